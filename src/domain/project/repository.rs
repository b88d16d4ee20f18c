use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{Project, ProjectDetails};
use crate::domain::DomainError;

/// Storage for projects
#[async_trait]
pub trait ProjectRepository: Send + Sync + Debug {
    /// Lists projects newest first, optionally filtered by the featured flag
    async fn list(&self, featured: Option<bool>) -> Result<Vec<Project>, DomainError>;

    async fn get(&self, id: i64) -> Result<Option<Project>, DomainError>;

    async fn create(&self, details: ProjectDetails) -> Result<Project, DomainError>;

    async fn update(&self, id: i64, details: ProjectDetails) -> Result<Project, DomainError>;

    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
