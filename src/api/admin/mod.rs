//! Admin API endpoints for managing portfolio content
//!
//! Every handler takes [`RequireAdmin`](crate::api::middleware::RequireAdmin)
//! first, so unauthenticated calls are rejected before the body is read.

pub mod contacts;
pub mod experiences;
pub mod profile;
pub mod projects;
pub mod skills;

use axum::{
    Router,
    routing::{get, post, put},
};

use super::state::AppState;

/// Create admin API router
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        // Profile
        .route("/profile", put(profile::update_profile))
        // Experiences
        .route("/experiences", post(experiences::create_experience))
        .route(
            "/experiences/{id}",
            get(experiences::get_experience)
                .put(experiences::update_experience)
                .delete(experiences::delete_experience),
        )
        // Skills
        .route("/skills", post(skills::create_skill))
        .route(
            "/skills/{id}",
            get(skills::get_skill)
                .put(skills::update_skill)
                .delete(skills::delete_skill),
        )
        // Projects
        .route("/projects", post(projects::create_project))
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        // Contact inbox
        .route("/contacts", get(contacts::list_contacts))
        .route(
            "/contacts/{id}",
            get(contacts::get_contact).delete(contacts::delete_contact),
        )
        .route("/contacts/{id}/status", put(contacts::update_contact_status))
}
