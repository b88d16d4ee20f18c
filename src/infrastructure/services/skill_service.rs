//! Skill service - cached listing with write invalidation

use std::sync::Arc;

use tracing::debug;

use crate::domain::DomainError;
use crate::domain::cache::{CacheKey, CachedEntity};
use crate::domain::skill::{Skill, SkillDetails, SkillRepository, SkillUpdate};
use crate::domain::validation::validate_entity;

use super::portfolio_cache_service::PortfolioCacheService;

#[derive(Debug)]
pub struct SkillService<R: SkillRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<PortfolioCacheService>,
}

impl<R: SkillRepository + ?Sized> SkillService<R> {
    pub fn new(repository: Arc<R>, cache: Arc<PortfolioCacheService>) -> Self {
        Self { repository, cache }
    }

    /// All skills ordered by category, then name
    pub async fn list(&self) -> Result<Vec<Skill>, DomainError> {
        self.cache
            .read_through(CacheKey::Skills, || self.repository.list())
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Skill, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// `Conflict` when the name is already used
    pub async fn create(&self, details: SkillDetails) -> Result<Skill, DomainError> {
        validate_entity(&details)?;

        let skill = self.repository.create(details).await?;
        debug!(skill_id = skill.id, name = %skill.details.name, "Created skill");
        self.cache.invalidate(CachedEntity::Skill).await;

        Ok(skill)
    }

    pub async fn update(&self, id: i64, update: SkillUpdate) -> Result<Skill, DomainError> {
        validate_entity(&update)?;

        let mut details = self.get(id).await?.details;
        update.apply_to(&mut details);
        validate_entity(&details)?;

        let skill = self.repository.update(id, details).await?;
        self.cache.invalidate(CachedEntity::Skill).await;

        Ok(skill)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        self.cache.invalidate(CachedEntity::Skill).await;
        Ok(())
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(format!("Skill {} not found", id))
}
