//! User domain
//!
//! Admin accounts used to authenticate against the mutating endpoints.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserRole};
pub use repository::UserRepository;
pub use validation::{UserValidationError, validate_email, validate_password, validate_username};
