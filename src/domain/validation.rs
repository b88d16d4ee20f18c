//! Shared validation helpers built on the `validator` crate

use validator::{Validate, ValidationErrors};

use crate::domain::DomainError;

/// Project statuses used by the frontend; other values are accepted as-is
pub const KNOWN_PROJECT_STATUSES: [&str; 3] = ["completed", "in-progress", "planned"];

/// Runs the derived validation rules and converts failures into a domain error
pub fn validate_entity<T: Validate>(value: &T) -> Result<(), DomainError> {
    value
        .validate()
        .map_err(|errors| DomainError::validation(format_validation_errors(&errors)))
}

/// Flattens field errors into `field: message` pairs ordered by field name
///
/// Struct-level errors are reported with their message only.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages = Vec::new();

    for (field, field_errors) in fields {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());

            if field == "__all__" {
                messages.push(message);
            } else {
                messages.push(format!("{}: {}", field, message));
            }
        }
    }

    if messages.is_empty() {
        "Invalid request".to_string()
    } else {
        messages.join("; ")
    }
}
