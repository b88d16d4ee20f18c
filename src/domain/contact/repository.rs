use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{Contact, NewContact};
use crate::domain::DomainError;

/// Storage for contact submissions
#[async_trait]
pub trait ContactRepository: Send + Sync + Debug {
    /// Lists submissions newest first
    async fn list(&self) -> Result<Vec<Contact>, DomainError>;

    async fn get(&self, id: i64) -> Result<Option<Contact>, DomainError>;

    async fn create(&self, contact: NewContact) -> Result<Contact, DomainError>;

    /// `NotFound` when the id has no row
    async fn update_status(&self, id: i64, status: &str) -> Result<Contact, DomainError>;

    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
