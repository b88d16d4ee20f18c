//! In-memory profile repository implementation

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::DomainError;
use crate::domain::profile::{Profile, ProfileDetails, ProfileRepository};
use crate::infrastructure::storage::InMemoryTable;

/// In-memory implementation of ProfileRepository
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    table: InMemoryTable<Profile>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self) -> Result<Option<Profile>, DomainError> {
        Ok(self.table.read().await.values().next().cloned())
    }

    async fn save(&self, details: ProfileDetails) -> Result<Profile, DomainError> {
        let now = Utc::now();
        let mut rows = self.table.write().await;

        if let Some(profile) = rows.values_mut().next() {
            profile.details = details;
            profile.updated_at = now;
            return Ok(profile.clone());
        }

        let id = self.table.next_id();
        let profile = Profile {
            id,
            details,
            created_at: now,
            updated_at: now,
        };
        rows.insert(id, profile.clone());

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_until_saved() {
        let repo = InMemoryProfileRepository::new();

        assert!(repo.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_in_place() {
        let repo = InMemoryProfileRepository::new();

        let first = repo.save(ProfileDetails::placeholder()).await.unwrap();

        let mut details = ProfileDetails::placeholder();
        details.name = "Ada Lovelace".to_string();
        let second = repo.save(details.clone()).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.details, details);
        assert_eq!(second.created_at, first.created_at);
        assert_eq!(repo.get().await.unwrap().unwrap(), second);
    }
}
