//! PostgreSQL project repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::project::{Project, ProjectDetails, ProjectRepository};

const COLUMNS: &str = "id, name, description, long_description, technologies, github_url, \
                       live_url, image_url, featured, category, status, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn list(&self, featured: Option<bool>) -> Result<Vec<Project>, DomainError> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT {} FROM projects
            WHERE ($1::BOOLEAN IS NULL OR featured = $1)
            ORDER BY created_at DESC, id DESC
            "#,
            COLUMNS
        ))
        .bind(featured)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list projects: {}", e)))?;

        Ok(rows.iter().map(row_to_project).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Project>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM projects WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get project: {}", e)))?;

        Ok(row.as_ref().map(row_to_project))
    }

    async fn create(&self, details: ProjectDetails) -> Result<Project, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO projects (name, description, long_description, technologies, github_url,
                                  live_url, image_url, featured, category, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.long_description)
        .bind(&details.technologies)
        .bind(&details.github_url)
        .bind(&details.live_url)
        .bind(&details.image_url)
        .bind(details.featured)
        .bind(&details.category)
        .bind(&details.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create project: {}", e)))?;

        Ok(row_to_project(&row))
    }

    async fn update(&self, id: i64, details: ProjectDetails) -> Result<Project, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE projects
            SET name = $2, description = $3, long_description = $4, technologies = $5,
                github_url = $6, live_url = $7, image_url = $8, featured = $9,
                category = $10, status = $11, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.long_description)
        .bind(&details.technologies)
        .bind(&details.github_url)
        .bind(&details.live_url)
        .bind(&details.image_url)
        .bind(details.featured)
        .bind(&details.category)
        .bind(&details.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update project: {}", e)))?;

        row.as_ref()
            .map(row_to_project)
            .ok_or_else(|| DomainError::not_found(format!("Project {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete project: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_project(row: &sqlx::postgres::PgRow) -> Project {
    Project {
        id: row.get("id"),
        details: ProjectDetails {
            name: row.get("name"),
            description: row.get("description"),
            long_description: row.get("long_description"),
            technologies: row.get("technologies"),
            github_url: row.get("github_url"),
            live_url: row.get("live_url"),
            image_url: row.get("image_url"),
            featured: row.get("featured"),
            category: row.get("category"),
            status: row.get("status"),
        },
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
