//! PostgreSQL contact repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::contact::{Contact, ContactRepository, NewContact};

const COLUMNS: &str = "id, name, email, subject, message, status, ip_address, user_agent, \
                       created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM contacts ORDER BY created_at DESC, id DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list contacts: {}", e)))?;

        Ok(rows.iter().map(row_to_contact).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM contacts WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get contact: {}", e)))?;

        Ok(row.as_ref().map(row_to_contact))
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO contacts (name, email, subject, message, status, ip_address, user_agent)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(&contact.status)
        .bind(&contact.ip_address)
        .bind(&contact.user_agent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create contact: {}", e)))?;

        Ok(row_to_contact(&row))
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<Contact, DomainError> {
        let row = sqlx::query(&format!(
            "UPDATE contacts SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update contact status: {}", e)))?;

        row.as_ref()
            .map(row_to_contact)
            .ok_or_else(|| DomainError::not_found(format!("Contact {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete contact: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_contact(row: &sqlx::postgres::PgRow) -> Contact {
    Contact {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        subject: row.get("subject"),
        message: row.get("message"),
        status: row.get("status"),
        ip_address: row.get("ip_address"),
        user_agent: row.get("user_agent"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
