//! Experience service - cached listing with write invalidation

use std::sync::Arc;

use tracing::debug;

use crate::domain::DomainError;
use crate::domain::cache::{CacheKey, CachedEntity};
use crate::domain::experience::{
    Experience, ExperienceDetails, ExperienceRepository, ExperienceUpdate,
};
use crate::domain::validation::validate_entity;

use super::portfolio_cache_service::PortfolioCacheService;

#[derive(Debug)]
pub struct ExperienceService<R: ExperienceRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<PortfolioCacheService>,
}

impl<R: ExperienceRepository + ?Sized> ExperienceService<R> {
    pub fn new(repository: Arc<R>, cache: Arc<PortfolioCacheService>) -> Self {
        Self { repository, cache }
    }

    /// All experiences, most recent start date first
    pub async fn list(&self) -> Result<Vec<Experience>, DomainError> {
        self.cache
            .read_through(CacheKey::Experiences, || self.repository.list())
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Experience, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, details: ExperienceDetails) -> Result<Experience, DomainError> {
        validate_entity(&details)?;

        let experience = self.repository.create(details).await?;
        debug!(experience_id = experience.id, "Created experience");
        self.cache.invalidate(CachedEntity::Experience).await;

        Ok(experience)
    }

    /// Applies the fields present in `update` and revalidates the merged record
    pub async fn update(&self, id: i64, update: ExperienceUpdate) -> Result<Experience, DomainError> {
        validate_entity(&update)?;

        let mut details = self.get(id).await?.details;
        update.apply_to(&mut details);
        validate_entity(&details)?;

        let experience = self.repository.update(id, details).await?;
        self.cache.invalidate(CachedEntity::Experience).await;

        Ok(experience)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        self.cache.invalidate(CachedEntity::Experience).await;
        Ok(())
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(format!("Experience {} not found", id))
}
