//! Project domain

mod entity;
mod repository;

pub use entity::{DEFAULT_PROJECT_STATUS, Project, ProjectDetails, ProjectUpdate};
pub use repository::ProjectRepository;
