//! Profile management admin endpoint

use axum::extract::State;
use tracing::info;

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ValidatedJson};
use crate::domain::{Profile, ProfileDetails};

/// PUT /admin/profile
///
/// Full replacement; the profile is created if it does not exist yet.
pub async fn update_profile(
    RequireAdmin(principal): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(details): ValidatedJson<ProfileDetails>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state.profile_service.update(details).await?;
    info!(admin = %principal.username, "Profile updated");

    Ok(Json(profile))
}
