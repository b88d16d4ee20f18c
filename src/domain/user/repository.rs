//! User repository trait

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Get a user by their username (for login)
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Persists a new user and returns it with its assigned id
    ///
    /// `Conflict` when the username or email is taken.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    async fn update(&self, user: &User) -> Result<User, DomainError>;

    async fn record_login(&self, id: i64) -> Result<(), DomainError>;

    async fn count(&self) -> Result<usize, DomainError>;

    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_username(username).await?.is_some())
    }
}
