//! Authentication API endpoints

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(get_current_user))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
    pub user: UserResponse,
}

/// User fields safe to expose
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            role: user.role().to_string(),
        }
    }
}

/// POST /auth/login
///
/// Exchanges credentials for a signed token. Every failure reads the same.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let issued = state.jwt_service.generate(&user)?;
    info!(user_id = user.id(), "User logged in");

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_at: issued.expires_at.to_rfc3339(),
        user: UserResponse::from(&user),
    }))
}

#[derive(Debug, Serialize)]
pub struct PrincipalResponse {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

/// GET /auth/me
pub async fn get_current_user(RequireAdmin(principal): RequireAdmin) -> Json<PrincipalResponse> {
    Json(PrincipalResponse {
        user_id: principal.user_id,
        username: principal.username,
        role: principal.role.to_string(),
    })
}
