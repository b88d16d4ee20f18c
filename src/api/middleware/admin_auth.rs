//! Admin authentication extractor
//!
//! Accepts `Authorization: Bearer <jwt>` for an active admin user.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::UserRole;

const INVALID_TOKEN: &str = "Invalid or expired token";

/// Identity attached to an authenticated admin request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub role: UserRole,
}

/// Extractor that requires a valid admin JWT
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub Principal);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state
            .jwt_service
            .validate(token)
            .map_err(|_| ApiError::unauthorized(INVALID_TOKEN))?;
        let user_id = claims
            .user_id()
            .map_err(|_| ApiError::unauthorized(INVALID_TOKEN))?;

        let user = state
            .user_service
            .get(user_id)
            .await?
            .ok_or_else(|| ApiError::unauthorized("User not found"))?;

        if !user.is_active() {
            return Err(ApiError::unauthorized("User account is disabled"));
        }

        if !user.is_admin() {
            return Err(ApiError::unauthorized("Admin access required"));
        }

        debug!(user_id = user.id(), "Admin access via JWT");

        Ok(RequireAdmin(Principal {
            user_id: user.id(),
            username: user.username().to_string(),
            role: user.role(),
        }))
    }
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Authorization header required"))?;

    value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Invalid authorization header format"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            "Bearer eyJhbGciOiJIUzI1NiJ9.test".parse().unwrap(),
        );

        assert_eq!(
            extract_bearer_token(&headers).unwrap(),
            "eyJhbGciOiJIUzI1NiJ9.test"
        );
    }

    #[test]
    fn test_missing_header() {
        let err = extract_bearer_token(&HeaderMap::new()).unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Authorization header required");
    }

    #[test]
    fn test_wrong_scheme() {
        for value in ["Basic YWRtaW46cGFzcw==", "Bearer ", "token"] {
            let mut headers = HeaderMap::new();
            headers.insert(header::AUTHORIZATION, value.parse().unwrap());

            let err = extract_bearer_token(&headers).unwrap_err();
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(err.message(), "Invalid authorization header format");
        }
    }
}
