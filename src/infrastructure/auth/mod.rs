//! Authentication infrastructure module
//!
//! HS256 JWT issuing and validation for admin sessions.

mod jwt;

pub use jwt::{IssuedToken, JwtClaims, JwtConfig, JwtGenerator, JwtService};
