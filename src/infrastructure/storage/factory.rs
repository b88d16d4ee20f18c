//! Storage factory for runtime backend selection

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::DomainError;
use crate::domain::contact::ContactRepository;
use crate::domain::experience::ExperienceRepository;
use crate::domain::profile::ProfileRepository;
use crate::domain::project::ProjectRepository;
use crate::domain::skill::SkillRepository;
use crate::domain::user::UserRepository;
use crate::infrastructure::contact::{InMemoryContactRepository, PostgresContactRepository};
use crate::infrastructure::experience::{
    InMemoryExperienceRepository, PostgresExperienceRepository,
};
use crate::infrastructure::profile::{InMemoryProfileRepository, PostgresProfileRepository};
use crate::infrastructure::project::{InMemoryProjectRepository, PostgresProjectRepository};
use crate::infrastructure::skill::{InMemorySkillRepository, PostgresSkillRepository};
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

use super::migrations::run_migrations;
use super::postgres::{PostgresConfig, connect_pool};

/// One repository per entity, all backed by the same store
#[derive(Debug, Clone)]
pub struct Repositories {
    pub profiles: Arc<dyn ProfileRepository>,
    pub experiences: Arc<dyn ExperienceRepository>,
    pub skills: Arc<dyn SkillRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub users: Arc<dyn UserRepository>,
    pool: Option<PgPool>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            profiles: Arc::new(InMemoryProfileRepository::new()),
            experiences: Arc::new(InMemoryExperienceRepository::new()),
            skills: Arc::new(InMemorySkillRepository::new()),
            projects: Arc::new(InMemoryProjectRepository::new()),
            contacts: Arc::new(InMemoryContactRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            pool: None,
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            profiles: Arc::new(PostgresProfileRepository::new(pool.clone())),
            experiences: Arc::new(PostgresExperienceRepository::new(pool.clone())),
            skills: Arc::new(PostgresSkillRepository::new(pool.clone())),
            projects: Arc::new(PostgresProjectRepository::new(pool.clone())),
            contacts: Arc::new(PostgresContactRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    pub fn backend(&self) -> StorageBackend {
        match self.pool {
            Some(_) => StorageBackend::Postgres,
            None => StorageBackend::InMemory,
        }
    }

    /// Checks that the store answers queries
    pub async fn ping(&self) -> Result<(), DomainError> {
        let Some(pool) = &self.pool else {
            return Ok(());
        };

        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database ping failed: {}", e)))?;

        Ok(())
    }
}

/// Factory for creating the repositories selected by configuration
#[derive(Debug, Default)]
pub struct StorageFactory;

impl StorageFactory {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(&self, config: &StorageConfig) -> Result<Repositories, DomainError> {
        match config.backend {
            StorageBackend::InMemory => {
                info!("Using in-memory storage");
                Ok(Repositories::in_memory())
            }
            StorageBackend::Postgres => {
                let pool = self.connect(config).await?;

                if config.run_migrations {
                    let applied = run_migrations(&pool).await?;
                    info!(applied, "Database migrations complete");
                }

                Ok(Repositories::postgres(pool))
            }
        }
    }

    /// Opens the PostgreSQL pool described by the storage section
    pub async fn connect(&self, config: &StorageConfig) -> Result<PgPool, DomainError> {
        let url = config.database_url.clone().ok_or_else(|| {
            DomainError::configuration("Database URL is required for PostgreSQL storage")
        })?;

        info!(max_connections = config.max_connections, "Connecting to PostgreSQL");
        connect_pool(&PostgresConfig::new(url).with_max_connections(config.max_connections)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory() {
        let repositories = StorageFactory::new()
            .create(&StorageConfig::default())
            .await
            .unwrap();

        assert_eq!(repositories.backend(), StorageBackend::InMemory);
        assert!(repositories.ping().await.is_ok());
        assert!(repositories.profiles.get().await.unwrap().is_none());
        assert_eq!(repositories.users.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_postgres_requires_url() {
        let config = StorageConfig {
            backend: StorageBackend::Postgres,
            database_url: None,
            ..Default::default()
        };

        let result = StorageFactory::new().create(&config).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
