//! API middleware components

pub mod admin_auth;
pub mod client_info;
pub mod logging;
pub mod rate_limit;
pub mod security;

pub use admin_auth::{Principal, RequireAdmin};
pub use client_info::RequestClient;
pub use logging::logging_middleware;
pub use rate_limit::rate_limit_middleware;
pub use security::{MAX_BODY_SIZE, security_headers_middleware};
