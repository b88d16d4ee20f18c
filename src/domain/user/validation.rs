//! Credential rules for admin accounts

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use validator::ValidateEmail;

/// Letters, digits, `_` and `-`, starting with a letter or digit, 3 to 50 long
static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{2,49}$").expect("valid username pattern"));

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error(
        "username must be 3 to 50 letters, digits, '_' or '-' and start with a letter or digit"
    )]
    InvalidUsername,

    #[error("email must be a valid address")]
    InvalidEmail,

    #[error("password must be between {min} and {max} characters")]
    PasswordLength { min: usize, max: usize },
}

pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    if USERNAME_PATTERN.is_match(username) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidUsername)
    }
}

pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(UserValidationError::InvalidEmail)
    }
}

/// Length is counted in characters, not bytes
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    let length = password.chars().count();

    if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(UserValidationError::PasswordLength {
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        })
    }
}
