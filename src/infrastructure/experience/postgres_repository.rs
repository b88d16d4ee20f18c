//! PostgreSQL experience repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::experience::{Experience, ExperienceDetails, ExperienceRepository};

const COLUMNS: &str = "id, company, position, location, start_date, end_date, current, \
                       description, achievements, technologies, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PostgresExperienceRepository {
    pool: PgPool,
}

impl PostgresExperienceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperienceRepository for PostgresExperienceRepository {
    async fn list(&self) -> Result<Vec<Experience>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM experiences ORDER BY start_date DESC, id DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list experiences: {}", e)))?;

        Ok(rows.iter().map(row_to_experience).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Experience>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM experiences WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get experience: {}", e)))?;

        Ok(row.as_ref().map(row_to_experience))
    }

    async fn create(&self, details: ExperienceDetails) -> Result<Experience, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO experiences (company, position, location, start_date, end_date, current,
                                     description, achievements, technologies)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&details.company)
        .bind(&details.position)
        .bind(&details.location)
        .bind(details.start_date)
        .bind(details.end_date)
        .bind(details.current)
        .bind(&details.description)
        .bind(&details.achievements)
        .bind(&details.technologies)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create experience: {}", e)))?;

        Ok(row_to_experience(&row))
    }

    async fn update(&self, id: i64, details: ExperienceDetails) -> Result<Experience, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE experiences
            SET company = $2, position = $3, location = $4, start_date = $5, end_date = $6,
                current = $7, description = $8, achievements = $9, technologies = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(&details.company)
        .bind(&details.position)
        .bind(&details.location)
        .bind(details.start_date)
        .bind(details.end_date)
        .bind(details.current)
        .bind(&details.description)
        .bind(&details.achievements)
        .bind(&details.technologies)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update experience: {}", e)))?;

        row.as_ref()
            .map(row_to_experience)
            .ok_or_else(|| DomainError::not_found(format!("Experience {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete experience: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_experience(row: &sqlx::postgres::PgRow) -> Experience {
    Experience {
        id: row.get("id"),
        details: ExperienceDetails {
            company: row.get("company"),
            position: row.get("position"),
            location: row.get("location"),
            start_date: row.get("start_date"),
            end_date: row.get("end_date"),
            current: row.get("current"),
            description: row.get("description"),
            achievements: row.get("achievements"),
            technologies: row.get("technologies"),
        },
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
