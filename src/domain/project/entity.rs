//! Project entity
//!
//! `status` is an open string. The frontend knows `completed`, `in-progress`
//! and `planned` but other values are stored unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PROJECT_STATUS: &str = "completed";

fn default_status() -> String {
    DEFAULT_PROJECT_STATUS.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProjectDetails {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    #[validate(url(message = "github_url must be a valid URL"))]
    pub github_url: Option<String>,
    #[serde(default)]
    #[validate(url(message = "live_url must be a valid URL"))]
    pub live_url: Option<String>,
    #[serde(default)]
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = 50, message = "status must not be empty"))]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(flatten)]
    pub details: ProjectDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProjectUpdate {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[validate(url(message = "github_url must be a valid URL"))]
    pub github_url: Option<String>,
    #[validate(url(message = "live_url must be a valid URL"))]
    pub live_url: Option<String>,
    #[validate(url(message = "image_url must be a valid URL"))]
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub category: Option<String>,
    #[validate(length(min = 1, max = 50, message = "status must not be empty"))]
    pub status: Option<String>,
}

impl ProjectUpdate {
    pub fn apply_to(self, details: &mut ProjectDetails) {
        if let Some(name) = self.name {
            details.name = name;
        }
        if let Some(description) = self.description {
            details.description = description;
        }
        if let Some(long_description) = self.long_description {
            details.long_description = Some(long_description);
        }
        if let Some(technologies) = self.technologies {
            details.technologies = technologies;
        }
        if let Some(github_url) = self.github_url {
            details.github_url = Some(github_url);
        }
        if let Some(live_url) = self.live_url {
            details.live_url = Some(live_url);
        }
        if let Some(image_url) = self.image_url {
            details.image_url = Some(image_url);
        }
        if let Some(featured) = self.featured {
            details.featured = featured;
        }
        if let Some(category) = self.category {
            details.category = Some(category);
        }
        if let Some(status) = self.status {
            details.status = status;
        }
    }
}
