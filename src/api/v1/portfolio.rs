//! Cached public listings

use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Experience, Profile, Project, Skill};

/// GET /profile
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>, ApiError> {
    Ok(Json(state.profile_service.get().await?))
}

/// GET /experiences
pub async fn list_experiences(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, ApiError> {
    Ok(Json(state.experience_service.list().await?))
}

/// GET /skills
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, ApiError> {
    Ok(Json(state.skill_service.list().await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    pub featured: Option<String>,
}

impl ProjectsQuery {
    /// Only the literals `true` and `false` filter; anything else lists all
    pub fn featured_filter(&self) -> Option<bool> {
        match self.featured.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

/// GET /projects?featured=true|false
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let featured = query.featured_filter();
    debug!(featured = ?featured, "Listing projects");

    Ok(Json(state.project_service.list(featured).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(value: Option<&str>) -> ProjectsQuery {
        ProjectsQuery {
            featured: value.map(str::to_string),
        }
    }

    #[test]
    fn test_featured_filter() {
        assert_eq!(query(Some("true")).featured_filter(), Some(true));
        assert_eq!(query(Some("false")).featured_filter(), Some(false));
        assert_eq!(query(Some("yes")).featured_filter(), None);
        assert_eq!(query(Some("TRUE")).featured_filter(), None);
        assert_eq!(query(None).featured_filter(), None);
    }
}
