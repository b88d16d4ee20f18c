//! Contact inbox admin endpoints

use axum::{extract::State, http::StatusCode};
use tracing::info;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, EntityId, Json, ValidatedJson};
use crate::domain::{Contact, ContactStatusUpdate};

/// GET /admin/contacts
///
/// Newest first, read straight from the store.
pub async fn list_contacts(
    RequireAdmin(_principal): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.contact_service.list().await?))
}

/// GET /admin/contacts/{id}
pub async fn get_contact(
    RequireAdmin(_principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<Contact>, ApiError> {
    Ok(Json(state.contact_service.get(id).await?))
}

/// PUT /admin/contacts/{id}/status
pub async fn update_contact_status(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidatedJson(update): ValidatedJson<ContactStatusUpdate>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state.contact_service.update_status(id, update).await?;
    info!(
        admin = %principal.username,
        contact_id = id,
        status = %contact.status,
        "Contact status updated"
    );

    Ok(Json(contact))
}

/// DELETE /admin/contacts/{id}
pub async fn delete_contact(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    state.contact_service.delete(id).await?;
    info!(admin = %principal.username, contact_id = id, "Contact deleted");

    Ok(StatusCode::NO_CONTENT)
}
