//! Project management admin endpoints

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, EntityId, Json, ValidatedJson};
use crate::domain::{Project, ProjectDetails, ProjectUpdate};

/// GET /admin/projects/{id}
pub async fn get_project(
    RequireAdmin(_principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(state.project_service.get(id).await?))
}

/// POST /admin/projects
pub async fn create_project(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(details): ValidatedJson<ProjectDetails>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state.project_service.create(details).await?;
    info!(admin = %principal.username, project_id = project.id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /admin/projects/{id}
pub async fn update_project(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(update): ValidatedJson<ProjectUpdate>,
) -> Result<Json<Project>, ApiError> {
    let project = state.project_service.update(id, update).await?;
    info!(admin = %principal.username, project_id = id, "Project updated");

    Ok(Json(project))
}

/// DELETE /admin/projects/{id}
pub async fn delete_project(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    state.project_service.delete(id).await?;
    info!(admin = %principal.username, project_id = id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
