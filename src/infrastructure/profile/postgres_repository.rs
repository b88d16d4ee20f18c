//! PostgreSQL profile repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::profile::{Profile, ProfileDetails, ProfileRepository};

const COLUMNS: &str = "id, name, title, location, email, phone, telegram, github, linkedin, \
                       summary, avatar, resume_url, created_at, updated_at";

/// PostgreSQL implementation of ProfileRepository
///
/// The table holds at most one meaningful row; the lowest id wins.
#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn get(&self) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM profiles ORDER BY id LIMIT 1",
            COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get profile: {}", e)))?;

        Ok(row.as_ref().map(row_to_profile))
    }

    async fn save(&self, details: ProfileDetails) -> Result<Profile, DomainError> {
        let updated = sqlx::query(&format!(
            r#"
            UPDATE profiles
            SET name = $1, title = $2, location = $3, email = $4, phone = $5,
                telegram = $6, github = $7, linkedin = $8, summary = $9,
                avatar = $10, resume_url = $11, updated_at = NOW()
            WHERE id = (SELECT id FROM profiles ORDER BY id LIMIT 1)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&details.name)
        .bind(&details.title)
        .bind(&details.location)
        .bind(&details.email)
        .bind(&details.phone)
        .bind(&details.telegram)
        .bind(&details.github)
        .bind(&details.linkedin)
        .bind(&details.summary)
        .bind(&details.avatar)
        .bind(&details.resume_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update profile: {}", e)))?;

        if let Some(row) = updated {
            return Ok(row_to_profile(&row));
        }

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO profiles (name, title, location, email, phone, telegram, github,
                                  linkedin, summary, avatar, resume_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&details.name)
        .bind(&details.title)
        .bind(&details.location)
        .bind(&details.email)
        .bind(&details.phone)
        .bind(&details.telegram)
        .bind(&details.github)
        .bind(&details.linkedin)
        .bind(&details.summary)
        .bind(&details.avatar)
        .bind(&details.resume_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create profile: {}", e)))?;

        Ok(row_to_profile(&row))
    }
}

fn row_to_profile(row: &sqlx::postgres::PgRow) -> Profile {
    Profile {
        id: row.get("id"),
        details: ProfileDetails {
            name: row.get("name"),
            title: row.get("title"),
            location: row.get("location"),
            email: row.get("email"),
            phone: row.get("phone"),
            telegram: row.get("telegram"),
            github: row.get("github"),
            linkedin: row.get("linkedin"),
            summary: row.get("summary"),
            avatar: row.get("avatar"),
            resume_url: row.get("resume_url"),
        },
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
