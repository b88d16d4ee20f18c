//! PostgreSQL skill repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::skill::{Skill, SkillDetails, SkillRepository};
use crate::infrastructure::storage::map_write_error;

const COLUMNS: &str = "id, name, category, level, description, icon, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PostgresSkillRepository {
    pool: PgPool,
}

impl PostgresSkillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillRepository for PostgresSkillRepository {
    async fn list(&self) -> Result<Vec<Skill>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM skills ORDER BY category, name",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list skills: {}", e)))?;

        Ok(rows.iter().map(row_to_skill).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Skill>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM skills WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get skill: {}", e)))?;

        Ok(row.as_ref().map(row_to_skill))
    }

    async fn create(&self, details: SkillDetails) -> Result<Skill, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO skills (name, category, level, description, icon)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&details.name)
        .bind(&details.category)
        .bind(details.level)
        .bind(&details.description)
        .bind(&details.icon)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "create skill", || {
                format!("Skill '{}' already exists", details.name)
            })
        })?;

        Ok(row_to_skill(&row))
    }

    async fn update(&self, id: i64, details: SkillDetails) -> Result<Skill, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE skills
            SET name = $2, category = $3, level = $4, description = $5, icon = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(id)
        .bind(&details.name)
        .bind(&details.category)
        .bind(details.level)
        .bind(&details.description)
        .bind(&details.icon)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, "update skill", || {
                format!("Skill '{}' already exists", details.name)
            })
        })?;

        row.as_ref()
            .map(row_to_skill)
            .ok_or_else(|| DomainError::not_found(format!("Skill {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete skill: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_skill(row: &sqlx::postgres::PgRow) -> Skill {
    Skill {
        id: row.get("id"),
        details: SkillDetails {
            name: row.get("name"),
            category: row.get("category"),
            level: row.get("level"),
            description: row.get("description"),
            icon: row.get("icon"),
        },
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
