//! PostgreSQL connection pooling and shared error mapping

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::DomainError;

/// PostgreSQL connection configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/portfolio".to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

/// Opens a connection pool
pub async fn connect_pool(config: &PostgresConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

/// SQLSTATE 23505
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

/// Maps a failed write, turning unique violations into `Conflict`
pub fn map_write_error(
    error: sqlx::Error,
    action: &str,
    conflict: impl FnOnce() -> String,
) -> DomainError {
    if is_unique_violation(&error) {
        DomainError::conflict(conflict())
    } else {
        DomainError::storage(format!("Failed to {}: {}", action, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PostgresConfig::new("postgres://db/portfolio").with_max_connections(20);

        assert_eq!(config.url, "postgres://db/portfolio");
        assert_eq!(config.max_connections, 20);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_non_database_errors_are_storage_errors() {
        let err = map_write_error(sqlx::Error::RowNotFound, "create skill", || {
            "unreachable".to_string()
        });

        assert!(matches!(err, DomainError::Storage { .. }));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }
}
