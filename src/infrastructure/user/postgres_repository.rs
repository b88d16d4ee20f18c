//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::DomainError;
use crate::domain::user::{User, UserRepository, UserRole};
use crate::infrastructure::storage::map_write_error;

const COLUMNS: &str = "id, username, email, password_hash, role, active, created_at, updated_at, \
                       last_login_at";

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn duplicate_user(user: &User) -> String {
    format!(
        "User '{}' or email '{}' already exists",
        user.username(),
        user.email()
    )
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM users WHERE username = $1", COLUMNS))
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user by username: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, role, active,
                               created_at, updated_at, last_login_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(user.username())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.role().as_str())
        .bind(user.is_active())
        .bind(user.created_at())
        .bind(user.updated_at())
        .bind(user.last_login_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "create user", || duplicate_user(&user)))?;

        row_to_user(&row)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4, role = $5, active = $6,
                updated_at = $7, last_login_at = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(user.id())
        .bind(user.username())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.role().as_str())
        .bind(user.is_active())
        .bind(user.updated_at())
        .bind(user.last_login_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "update user", || duplicate_user(user)))?;

        match row {
            Some(row) => row_to_user(&row),
            None => Err(DomainError::not_found(format!("User {} not found", user.id()))),
        }
    }

    async fn record_login(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to record login: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("User {} not found", id)));
        }

        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count users: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let role: String = row.get("role");
    let role = UserRole::parse(&role)
        .ok_or_else(|| DomainError::storage(format!("Unknown user role '{}'", role)))?;

    Ok(User::new(
        row.get::<String, _>("username"),
        row.get::<String, _>("email"),
        row.get::<String, _>("password_hash"),
        role,
    )
    .with_id(row.get("id"))
    .with_active(row.get("active"))
    .with_timestamps(
        row.get("created_at"),
        row.get("updated_at"),
        row.get("last_login_at"),
    ))
}
