use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_SKILL_LEVEL: i32 = 5;

fn default_level() -> i32 {
    DEFAULT_SKILL_LEVEL
}

/// Editable skill fields; `name` is unique across skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SkillDetails {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "category is required"))]
    pub category: String,
    #[serde(default = "default_level")]
    #[validate(range(min = 1, max = 10, message = "level must be between 1 and 10"))]
    pub level: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    #[serde(flatten)]
    pub details: SkillDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SkillUpdate {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "category is required"))]
    pub category: Option<String>,
    #[validate(range(min = 1, max = 10, message = "level must be between 1 and 10"))]
    pub level: Option<i32>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl SkillUpdate {
    pub fn apply_to(self, details: &mut SkillDetails) {
        if let Some(name) = self.name {
            details.name = name;
        }
        if let Some(category) = self.category {
            details.category = category;
        }
        if let Some(level) = self.level {
            details.level = level;
        }
        if let Some(description) = self.description {
            details.description = Some(description);
        }
        if let Some(icon) = self.icon {
            details.icon = Some(icon);
        }
    }
}
