//! Experience management admin endpoints

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, EntityId, Json, ValidatedJson};
use crate::domain::{Experience, ExperienceDetails, ExperienceUpdate};

/// GET /admin/experiences/{id}
pub async fn get_experience(
    RequireAdmin(_principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Experience>, ApiError> {
    Ok(Json(state.experience_service.get(id).await?))
}

/// POST /admin/experiences
pub async fn create_experience(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(details): ValidatedJson<ExperienceDetails>,
) -> Result<(StatusCode, Json<Experience>), ApiError> {
    let experience = state.experience_service.create(details).await?;
    info!(admin = %principal.username, experience_id = experience.id, "Experience created");

    Ok((StatusCode::CREATED, Json(experience)))
}

/// PUT /admin/experiences/{id}
pub async fn update_experience(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(update): ValidatedJson<ExperienceUpdate>,
) -> Result<Json<Experience>, ApiError> {
    let experience = state.experience_service.update(id, update).await?;
    info!(admin = %principal.username, experience_id = id, "Experience updated");

    Ok(Json(experience))
}

/// DELETE /admin/experiences/{id}
pub async fn delete_experience(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    state.experience_service.delete(id).await?;
    info!(admin = %principal.username, experience_id = id, "Experience deleted");

    Ok(StatusCode::NO_CONTENT)
}
