//! Portfolio API
//!
//! Backend for a personal portfolio site:
//! - Public read endpoints for profile, experience, skills and projects
//! - Read-through caching with write invalidation (in-memory or Redis)
//! - Contact form inbox
//! - JWT-protected admin endpoints for managing content

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{DomainError, UserRole};
use domain::cache::Cache;
use infrastructure::{
    auth::{JwtConfig, JwtService},
    cache::CacheFactory,
    rate_limit::RateLimiter,
    services::{
        ContactService, ExperienceService, PortfolioCacheConfig, PortfolioCacheService,
        ProfileService, ProjectService, SkillService,
    },
    storage::{Repositories, StorageFactory},
    user::{Argon2Hasher, CreateUserRequest, UserService},
};
use rand::Rng;
use tracing::{info, warn};

/// Create the application state from configuration, connecting the
/// configured store and cache
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    info!(backend = ?config.storage.backend, "Initializing storage");
    let repositories = StorageFactory::new().create(&config.storage).await?;

    let cache = CacheFactory::new().create(&config.cache).await?;

    build_app_state(config, repositories, cache).await
}

/// Wire services over existing backends, seed the profile and make sure the
/// admin account exists
pub async fn build_app_state(
    config: &AppConfig,
    repositories: Repositories,
    cache: Arc<dyn Cache>,
) -> anyhow::Result<AppState> {
    let cache_config = if config.cache.enabled {
        PortfolioCacheConfig::default()
    } else {
        warn!("Cache disabled, every read goes to the store");
        PortfolioCacheConfig::default().disabled()
    };
    let cache = Arc::new(PortfolioCacheService::with_config(cache, cache_config));

    let profile_service = Arc::new(ProfileService::new(
        repositories.profiles.clone(),
        cache.clone(),
    ));
    let experience_service = Arc::new(ExperienceService::new(
        repositories.experiences.clone(),
        cache.clone(),
    ));
    let skill_service = Arc::new(SkillService::new(repositories.skills.clone(), cache.clone()));
    let project_service = Arc::new(ProjectService::new(
        repositories.projects.clone(),
        cache.clone(),
    ));
    let contact_service = Arc::new(ContactService::new(repositories.contacts.clone()));
    let user_service = Arc::new(UserService::new(
        repositories.users.clone(),
        Arc::new(Argon2Hasher::new()),
    ));

    profile_service.seed_if_absent().await?;
    create_initial_admin_user(&user_service, config).await?;

    let jwt_service = create_jwt_service_from_secret(config)?;

    Ok(AppState {
        profile_service,
        experience_service,
        skill_service,
        project_service,
        contact_service,
        user_service,
        jwt_service,
        rate_limiter: Arc::new(RateLimiter::from_config(&config.rate_limit)),
        repositories,
        cache,
    })
}

fn random_alphanumeric(len: usize) -> String {
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Create JWT service from secret (config or `JWT_SECRET`, else random)
fn create_jwt_service_from_secret(config: &AppConfig) -> Result<Arc<JwtService>, DomainError> {
    let jwt_secret = config
        .auth
        .jwt_secret
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| {
            warn!(
                "No JWT_SECRET configured. Generating random secret. \
                Sessions will NOT persist across restarts."
            );
            random_alphanumeric(64)
        });

    let jwt_config = JwtConfig::new(jwt_secret, u64::from(config.auth.jwt_expiration_hours));
    jwt_config.lifetime()?;

    Ok(Arc::new(JwtService::new(jwt_config)))
}

/// Create the admin account on first start
async fn create_initial_admin_user(
    user_service: &UserService<dyn domain::UserRepository, Argon2Hasher>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let (password, is_configured) = match config.auth.admin_password.clone() {
        Some(p) if !p.is_empty() => (p, true),
        _ => (random_alphanumeric(16), false),
    };

    let request = CreateUserRequest {
        username: config.auth.admin_username.clone(),
        email: config.auth.admin_email.clone(),
        password: password.clone(),
        role: UserRole::Admin,
    };

    if user_service.ensure_user(request).await?.is_none() {
        return Ok(());
    }

    info!("===========================================");
    info!("Initial admin user created!");
    info!("Username: {}", config.auth.admin_username);

    if is_configured {
        info!("Password: (set via ADMIN_DEFAULT_PASSWORD)");
    } else {
        info!("Password: {}", password);
    }

    info!("Please change this password after first login.");
    info!("===========================================");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn build(config: &AppConfig) -> AppState {
        let cache = CacheFactory::new().create_in_memory(100);
        build_app_state(config, Repositories::in_memory(), cache)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_build_seeds_profile_and_admin() {
        let mut config = AppConfig::default();
        config.auth.admin_password = Some("bootstrap-password".to_string());

        let state = build(&config).await;

        let profile = state.profile_service.get().await.unwrap();
        assert_eq!(profile.details.name, "Your Name");

        let admin = state
            .repositories
            .users
            .get_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert!(admin.is_admin());
        assert_eq!(admin.email(), "admin@example.com");

        let authenticated = state
            .user_service
            .authenticate("admin", "bootstrap-password")
            .await
            .unwrap();
        assert!(authenticated.is_some());
    }

    #[tokio::test]
    async fn test_generated_admin_password_is_not_empty() {
        let state = build(&AppConfig::default()).await;

        assert_eq!(state.repositories.users.count().await.unwrap(), 1);
        assert!(
            state
                .user_service
                .authenticate("admin", "")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_random_alphanumeric() {
        let secret = random_alphanumeric(64);

        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(secret, random_alphanumeric(64));
    }
}
