//! Profile service - the cached singleton profile

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::cache::{CacheKey, CachedEntity};
use crate::domain::profile::{Profile, ProfileDetails, ProfileRepository};
use crate::domain::validation::validate_entity;

use super::portfolio_cache_service::PortfolioCacheService;

#[derive(Debug)]
pub struct ProfileService<R: ProfileRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<PortfolioCacheService>,
}

impl<R: ProfileRepository + ?Sized> ProfileService<R> {
    pub fn new(repository: Arc<R>, cache: Arc<PortfolioCacheService>) -> Self {
        Self { repository, cache }
    }

    /// Returns the profile, `NotFound` until one has been saved
    pub async fn get(&self) -> Result<Profile, DomainError> {
        let repository = &self.repository;

        self.cache
            .read_through(CacheKey::Profile, move || async move {
                repository
                    .get()
                    .await?
                    .ok_or_else(|| DomainError::not_found("Profile not found"))
            })
            .await
    }

    /// Replaces the profile, creating it when absent
    pub async fn update(&self, details: ProfileDetails) -> Result<Profile, DomainError> {
        validate_entity(&details)?;

        let profile = self.repository.save(details).await?;
        self.cache.invalidate(CachedEntity::Profile).await;

        Ok(profile)
    }

    /// Writes the placeholder profile on first start
    pub async fn seed_if_absent(&self) -> Result<Option<Profile>, DomainError> {
        if self.repository.get().await?.is_some() {
            return Ok(None);
        }

        let profile = self.update(ProfileDetails::placeholder()).await?;
        info!(profile_id = profile.id, "Seeded placeholder profile");

        Ok(Some(profile))
    }
}
