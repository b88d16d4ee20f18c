//! Public portfolio endpoints

pub mod contact;
pub mod portfolio;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create the public router, mounted under the API prefix
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(portfolio::get_profile))
        .route("/experiences", get(portfolio::list_experiences))
        .route("/skills", get(portfolio::list_skills))
        .route("/projects", get(portfolio::list_projects))
        .route("/contact", post(contact::submit_contact))
}
