//! Experience entity and partial update

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Editable experience fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_dates", skip_on_field_errors = false))]
pub struct ExperienceDetails {
    #[validate(length(min = 1, max = 200, message = "company is required"))]
    pub company: String,
    #[validate(length(min = 1, max = 200, message = "position is required"))]
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

fn validate_dates(details: &ExperienceDetails) -> Result<(), ValidationError> {
    match details.end_date {
        Some(_) if details.current => Err(ValidationError::new("current_with_end_date")
            .with_message("a current position cannot have an end_date".into())),
        Some(end) if end < details.start_date => Err(ValidationError::new("end_before_start")
            .with_message("end_date must not be before start_date".into())),
        _ => Ok(()),
    }
}

/// A stored experience
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: i64,
    #[serde(flatten)]
    pub details: ExperienceDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ExperienceUpdate {
    #[validate(length(min = 1, max = 200, message = "company is required"))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 200, message = "position is required"))]
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    /// `null` clears the end date, absence leaves it alone
    #[serde(default, deserialize_with = "present")]
    pub end_date: Option<Option<DateTime<Utc>>>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub achievements: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
}

impl ExperienceUpdate {
    pub fn apply_to(self, details: &mut ExperienceDetails) {
        let end_date_sent = self.end_date.is_some();

        if let Some(company) = self.company {
            details.company = company;
        }
        if let Some(position) = self.position {
            details.position = position;
        }
        if let Some(location) = self.location {
            details.location = Some(location);
        }
        if let Some(start_date) = self.start_date {
            details.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            details.end_date = end_date;
        }
        if let Some(current) = self.current {
            details.current = current;
            // Switching to current drops a stale end date unless one was sent explicitly
            if current && !end_date_sent {
                details.end_date = None;
            }
        }
        if let Some(description) = self.description {
            details.description = Some(description);
        }
        if let Some(achievements) = self.achievements {
            details.achievements = achievements;
        }
        if let Some(technologies) = self.technologies {
            details.technologies = technologies;
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn details() -> ExperienceDetails {
        ExperienceDetails {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: Some("Remote".to_string()),
            start_date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            end_date: Some(Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap()),
            current: false,
            description: None,
            achievements: vec!["Shipped v1".to_string()],
            technologies: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_valid_details() {
        assert!(details().validate().is_ok());
    }

    #[test]
    fn test_current_with_end_date_rejected() {
        let mut d = details();
        d.current = true;

        let errors = d.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("__all__"));
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut d = details();
        d.end_date = Some(Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap());

        assert!(d.validate().is_err());
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let absent: ExperienceUpdate = serde_json::from_str(r#"{"company":"Initech"}"#).unwrap();
        assert!(absent.end_date.is_none());

        let cleared: ExperienceUpdate = serde_json::from_str(r#"{"end_date":null}"#).unwrap();
        assert_eq!(cleared.end_date, Some(None));

        let mut d = details();
        absent.apply_to(&mut d);
        assert_eq!(d.company, "Initech");
        assert!(d.end_date.is_some());

        cleared.apply_to(&mut d);
        assert!(d.end_date.is_none());
    }

    #[test]
    fn test_switching_to_current_clears_end_date() {
        let update: ExperienceUpdate = serde_json::from_str(r#"{"current":true}"#).unwrap();
        let mut d = details();

        update.apply_to(&mut d);

        assert!(d.current);
        assert!(d.end_date.is_none());
        assert!(d.validate().is_ok());
    }
}
