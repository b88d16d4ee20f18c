use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{Skill, SkillDetails};
use crate::domain::DomainError;

/// Storage for skills
#[async_trait]
pub trait SkillRepository: Send + Sync + Debug {
    /// Lists skills ordered by category, then name
    async fn list(&self) -> Result<Vec<Skill>, DomainError>;

    async fn get(&self, id: i64) -> Result<Option<Skill>, DomainError>;

    /// `Conflict` when the name is already taken
    async fn create(&self, details: SkillDetails) -> Result<Skill, DomainError>;

    async fn update(&self, id: i64, details: SkillDetails) -> Result<Skill, DomainError>;

    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
