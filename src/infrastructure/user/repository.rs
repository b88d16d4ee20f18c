//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::DomainError;
use crate::domain::user::{User, UserRepository};

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
    sequence: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn find_conflict(users: &HashMap<i64, User>, candidate: &User) -> Option<DomainError> {
    users
        .values()
        .filter(|u| u.id() != candidate.id())
        .find_map(|u| {
            if u.username() == candidate.username() {
                Some(DomainError::conflict(format!(
                    "Username '{}' already exists",
                    candidate.username()
                )))
            } else if u.email() == candidate.email() {
                Some(DomainError::conflict(format!(
                    "Email '{}' already exists",
                    candidate.email()
                )))
            } else {
                None
            }
        })
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username() == username).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if let Some(conflict) = find_conflict(&users, &user) {
            return Err(conflict);
        }

        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let user = user.with_id(id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id()) {
            return Err(DomainError::not_found(format!("User {} not found", user.id())));
        }

        if let Some(conflict) = find_conflict(&users, user) {
            return Err(conflict);
        }

        users.insert(user.id(), user.clone());
        Ok(user.clone())
    }

    async fn record_login(&self, id: i64) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        let user = users
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("User {} not found", id)))?;
        user.record_login();

        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserRole;

    fn create_test_user(username: &str) -> User {
        User::new(
            username,
            format!("{}@example.com", username),
            "hashed_password",
            UserRole::Admin,
        )
    }

    #[tokio::test]
    async fn test_create_assigns_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(create_test_user("admin")).await.unwrap();
        let second = repo.create(create_test_user("editor")).await.unwrap();

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_by_username() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(create_test_user("admin")).await.unwrap();

        let found = repo.get_by_username("admin").await.unwrap().unwrap();
        assert_eq!(found.id(), created.id());

        assert!(repo.get_by_username("nobody").await.unwrap().is_none());
        assert!(repo.username_exists("admin").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_and_email() {
        let repo = InMemoryUserRepository::new();
        repo.create(create_test_user("admin")).await.unwrap();

        let same_name = repo.create(create_test_user("admin")).await;
        assert!(matches!(same_name, Err(DomainError::Conflict { .. })));

        let same_email = User::new("other", "admin@example.com", "hash", UserRole::Admin);
        let result = repo.create(same_email).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_and_record_login() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.create(create_test_user("admin")).await.unwrap();

        user.deactivate();
        repo.update(&user).await.unwrap();
        repo.record_login(user.id()).await.unwrap();

        let stored = repo.get(user.id()).await.unwrap().unwrap();
        assert!(!stored.is_active());
        assert!(stored.last_login_at().is_some());

        let missing = repo.record_login(42).await;
        assert!(missing.unwrap_err().is_not_found());
    }
}
