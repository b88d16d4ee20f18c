//! Profile repository trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{Profile, ProfileDetails};
use crate::domain::DomainError;

/// Storage for the singleton profile
#[async_trait]
pub trait ProfileRepository: Send + Sync + Debug {
    /// Returns the profile if one has been stored
    async fn get(&self) -> Result<Option<Profile>, DomainError>;

    /// Replaces the profile in place, creating it if absent
    async fn save(&self, details: ProfileDetails) -> Result<Profile, DomainError>;
}
