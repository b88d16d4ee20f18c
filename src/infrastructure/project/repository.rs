//! In-memory project repository implementation

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::DomainError;
use crate::domain::project::{Project, ProjectDetails, ProjectRepository};
use crate::infrastructure::storage::InMemoryTable;

#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    table: InMemoryTable<Project>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn list(&self, featured: Option<bool>) -> Result<Vec<Project>, DomainError> {
        let mut projects: Vec<Project> = self
            .table
            .all()
            .await
            .into_iter()
            .filter(|p| featured.is_none_or(|f| p.details.featured == f))
            .collect();

        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(projects)
    }

    async fn get(&self, id: i64) -> Result<Option<Project>, DomainError> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, details: ProjectDetails) -> Result<Project, DomainError> {
        let now = Utc::now();

        Ok(self
            .table
            .insert_with(|id| Project {
                id,
                details,
                created_at: now,
                updated_at: now,
            })
            .await)
    }

    async fn update(&self, id: i64, details: ProjectDetails) -> Result<Project, DomainError> {
        self.table
            .update_with(id, |project| {
                project.details = details;
                project.updated_at = Utc::now();
            })
            .await
            .ok_or_else(|| DomainError::not_found(format!("Project {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.table.remove(id).await)
    }
}
