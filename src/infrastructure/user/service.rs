//! User service for authentication and admin provisioning

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::user::{
    User, UserRepository, UserRole, validate_email, validate_password, validate_username,
};

use super::password::PasswordHasher;

/// Request for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// User service for authentication and management
#[derive(Debug)]
pub struct UserService<R: UserRepository + ?Sized, H: PasswordHasher + ?Sized> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository + ?Sized, H: PasswordHasher + ?Sized> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Create a new user with a freshly hashed password
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_username(&request.username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.username_exists(&request.username).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(request.username, request.email, password_hash, request.role);

        self.repository.create(user).await
    }

    /// Creates the account unless a user with that username already exists
    ///
    /// Returns the new user, or `None` when nothing was created.
    pub async fn ensure_user(&self, request: CreateUserRequest) -> Result<Option<User>, DomainError> {
        if self.repository.username_exists(&request.username).await? {
            return Ok(None);
        }

        let user = self.create(request).await?;
        info!(username = %user.username(), "Created user");

        Ok(Some(user))
    }

    /// Authenticate a user with username and password
    ///
    /// Unknown users, inactive users and wrong passwords all yield `None`.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.repository.get_by_username(username).await? {
            Some(u) => u,
            None => return Ok(None),
        };

        if !user.is_active() {
            return Ok(None);
        }

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        self.repository.record_login(user.id()).await?;

        // Re-fetch user to get updated last_login_at
        self.repository.get(user.id()).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::password::Argon2Hasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> (
        Arc<InMemoryUserRepository>,
        UserService<InMemoryUserRepository, Argon2Hasher>,
    ) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(Argon2Hasher::new());
        (repository.clone(), UserService::new(repository, hasher))
    }

    fn make_request(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: password.to_string(),
            role: UserRole::Admin,
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let (_, service) = create_service();

        let user = service
            .create(make_request("admin", "secure_password123"))
            .await
            .unwrap();

        assert_eq!(user.id(), 1);
        assert!(user.is_admin());
        assert_ne!(user.password_hash(), "secure_password123");
    }

    #[tokio::test]
    async fn test_create_user_rejects_bad_input() {
        let (_, service) = create_service();

        let short_name = service.create(make_request("ab", "secure_password123")).await;
        assert!(matches!(short_name, Err(DomainError::Validation { .. })));

        let short_password = service.create(make_request("admin", "short")).await;
        assert!(matches!(short_password, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let (_, service) = create_service();
        service
            .create(make_request("admin", "secure_password123"))
            .await
            .unwrap();

        let result = service.create(make_request("admin", "other_password456")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_ensure_user_is_idempotent() {
        let (_, service) = create_service();

        let first = service
            .ensure_user(make_request("admin", "secure_password123"))
            .await
            .unwrap();
        let second = service
            .ensure_user(make_request("admin", "different_password"))
            .await
            .unwrap();

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(service.count().await.unwrap(), 1);

        // The original password still applies
        let user = service
            .authenticate("admin", "secure_password123")
            .await
            .unwrap();
        assert!(user.is_some());
    }

    #[tokio::test]
    async fn test_authenticate_success_records_login() {
        let (_, service) = create_service();
        service
            .create(make_request("admin", "secure_password123"))
            .await
            .unwrap();

        let user = service
            .authenticate("admin", "secure_password123")
            .await
            .unwrap()
            .unwrap();

        assert!(user.last_login_at().is_some());
    }

    #[tokio::test]
    async fn test_authenticate_failures() {
        let (repository, service) = create_service();
        let mut user = service
            .create(make_request("admin", "secure_password123"))
            .await
            .unwrap();

        assert!(service.authenticate("admin", "wrong_password").await.unwrap().is_none());
        assert!(service.authenticate("nobody", "secure_password123").await.unwrap().is_none());

        user.deactivate();
        repository.update(&user).await.unwrap();

        let inactive = service
            .authenticate("admin", "secure_password123")
            .await
            .unwrap();
        assert!(inactive.is_none());
    }
}
