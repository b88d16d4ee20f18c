//! Profile entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Editable profile fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileDetails {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    #[validate(url(message = "github must be a valid URL"))]
    pub github: Option<String>,
    #[serde(default)]
    #[validate(url(message = "linkedin must be a valid URL"))]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    #[validate(url(message = "resume_url must be a valid URL"))]
    pub resume_url: Option<String>,
}

impl ProfileDetails {
    /// Placeholder written on first start when no profile exists yet
    pub fn placeholder() -> Self {
        Self {
            name: "Your Name".to_string(),
            title: "Software Engineer".to_string(),
            location: None,
            email: "hello@example.com".to_string(),
            phone: None,
            telegram: None,
            github: None,
            linkedin: None,
            summary: Some("Tell visitors about yourself.".to_string()),
            avatar: None,
            resume_url: None,
        }
    }
}

/// The single profile row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    #[serde(flatten)]
    pub details: ProfileDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_placeholder_is_valid() {
        assert!(ProfileDetails::placeholder().validate().is_ok());
    }

    #[test]
    fn test_profile_serializes_flat() {
        let now = Utc::now();
        let profile = Profile {
            id: 1,
            details: ProfileDetails::placeholder(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Your Name");
        assert!(json.get("details").is_none());

        let back: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut details = ProfileDetails::placeholder();
        details.email = "not-an-email".to_string();

        assert!(details.validate().is_err());
    }
}
