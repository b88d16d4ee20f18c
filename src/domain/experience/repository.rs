//! Experience repository trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{Experience, ExperienceDetails};
use crate::domain::DomainError;

/// Storage for experiences
#[async_trait]
pub trait ExperienceRepository: Send + Sync + Debug {
    /// Lists experiences, most recent start date first
    async fn list(&self) -> Result<Vec<Experience>, DomainError>;

    async fn get(&self, id: i64) -> Result<Option<Experience>, DomainError>;

    async fn create(&self, details: ExperienceDetails) -> Result<Experience, DomainError>;

    /// Replaces the stored fields; `NotFound` when the id has no row
    async fn update(&self, id: i64, details: ExperienceDetails) -> Result<Experience, DomainError>;

    /// Returns whether a row was deleted
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
