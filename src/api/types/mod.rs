//! Shared request and response types for the HTTP layer

pub mod error;
pub mod json;
pub mod path;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::{Json, ValidatedJson};
pub use path::EntityId;
