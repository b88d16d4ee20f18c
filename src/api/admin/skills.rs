//! Skill management admin endpoints

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, EntityId, Json, ValidatedJson};
use crate::domain::{Skill, SkillDetails, SkillUpdate};

/// GET /admin/skills/{id}
pub async fn get_skill(
    RequireAdmin(_principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Skill>, ApiError> {
    Ok(Json(state.skill_service.get(id).await?))
}

/// POST /admin/skills
pub async fn create_skill(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(details): ValidatedJson<SkillDetails>,
) -> Result<(StatusCode, Json<Skill>), ApiError> {
    let skill = state.skill_service.create(details).await?;
    info!(admin = %principal.username, skill_id = skill.id, "Skill created");

    Ok((StatusCode::CREATED, Json(skill)))
}

/// PUT /admin/skills/{id}
pub async fn update_skill(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(update): ValidatedJson<SkillUpdate>,
) -> Result<Json<Skill>, ApiError> {
    let skill = state.skill_service.update(id, update).await?;
    info!(admin = %principal.username, skill_id = id, "Skill updated");

    Ok(Json(skill))
}

/// DELETE /admin/skills/{id}
pub async fn delete_skill(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    state.skill_service.delete(id).await?;
    info!(admin = %principal.username, skill_id = id, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}
