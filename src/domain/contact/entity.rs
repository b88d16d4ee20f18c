use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status every submission starts with
pub const INITIAL_CONTACT_STATUS: &str = "new";

/// Contact form payload
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 200, message = "subject must be at most 200 characters"))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 5000, message = "message must be 1 to 5000 characters"))]
    pub message: String,
}

/// Where a submission came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// A submission ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl NewContact {
    pub fn from_submission(submission: ContactSubmission, client: ClientInfo) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            status: INITIAL_CONTACT_STATUS.to_string(),
            ip_address: client.ip_address,
            user_agent: client.user_agent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin status change; free text, no enforced transitions
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactStatusUpdate {
    #[validate(length(min = 1, max = 50, message = "status is required"))]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_starts_as_new() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"name":"A","email":"a@b.com","message":"hi"}"#).unwrap();
        assert!(submission.validate().is_ok());

        let contact = NewContact::from_submission(
            submission,
            ClientInfo {
                ip_address: Some("10.0.0.1".to_string()),
                user_agent: Some("curl/8.0".to_string()),
            },
        );

        assert_eq!(contact.status, INITIAL_CONTACT_STATUS);
        assert!(contact.subject.is_none());
        assert_eq!(contact.ip_address.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn test_submission_rules() {
        let bad_email: ContactSubmission =
            serde_json::from_str(r#"{"name":"A","email":"nope","message":"hi"}"#).unwrap();
        assert!(bad_email.validate().is_err());

        let long = ContactSubmission {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: None,
            message: "x".repeat(5001),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_status_update_requires_value() {
        let update = ContactStatusUpdate {
            status: String::new(),
        };
        assert!(update.validate().is_err());
    }
}
