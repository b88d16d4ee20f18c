//! Contact form endpoint

use axum::{extract::State, http::StatusCode};

use crate::api::middleware::RequestClient;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ValidatedJson};
use crate::domain::{Contact, ContactSubmission};

/// POST /contact
pub async fn submit_contact(
    State(state): State<AppState>,
    RequestClient(client): RequestClient,
    ValidatedJson(submission): ValidatedJson<ContactSubmission>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let contact = state.contact_service.submit(submission, client).await?;

    Ok((StatusCode::CREATED, Json(contact)))
}
