use std::str::FromStr;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix under which every versioned route is mounted
    pub api_prefix: String,
    pub environment: String,
    /// Allowed CORS origins; empty allows any origin
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Unset picks JSON in production and pretty output elsewhere
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(format!("Unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CacheBackend {
    #[default]
    InMemory,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// When disabled every lookup is a miss
    pub enabled: bool,
    pub backend: CacheBackend,
    pub redis_url: Option<String>,
    /// Optional namespace for Redis keys; empty stores the bare key names
    pub key_prefix: String,
    pub max_capacity: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    pub jwt_expiration_hours: u32,
    pub admin_username: String,
    pub admin_email: String,
    /// Password for the initial admin; a random one is generated when unset
    pub admin_password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub requests_per_second: u32,
    /// Bucket capacity; falls back to `requests_per_second` when unset
    pub burst: Option<u32>,
}

impl RateLimitConfig {
    pub fn capacity(&self) -> u32 {
        self.burst.unwrap_or(self.requests_per_second).max(1)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_prefix: "/api/v1".to_string(),
            environment: "development".to_string(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            database_url: None,
            max_connections: 5,
            run_migrations: true,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: CacheBackend::default(),
            redis_url: None,
            key_prefix: String::new(),
            max_capacity: 10_000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_expiration_hours: 24,
            admin_username: "admin".to_string(),
            admin_email: "admin@example.com".to_string(),
            admin_password: None,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests_per_second: 100,
            burst: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        app_config.apply_legacy_env(|name| std::env::var(name).ok())?;
        app_config.apply_environment_defaults();

        Ok(app_config)
    }

    /// Applies the flat deployment variables (`DATABASE_URL`, `PORT`, ...) on top of
    /// the layered configuration.
    fn apply_legacy_env<F>(&mut self, lookup: F) -> Result<(), config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.storage.database_url = Some(url);
            self.storage.backend = StorageBackend::Postgres;
        }

        if let Some(url) = lookup("REDIS_URL").filter(|v| !v.is_empty()) {
            self.cache.redis_url = Some(url);
            self.cache.backend = CacheBackend::Redis;
        }

        if let Some(secret) = lookup("JWT_SECRET").filter(|v| !v.is_empty()) {
            self.auth.jwt_secret = Some(secret);
        }

        if let Some(password) = lookup("ADMIN_DEFAULT_PASSWORD").filter(|v| !v.is_empty()) {
            self.auth.admin_password = Some(password);
        }

        if let Some(environment) = lookup("ENVIRONMENT").filter(|v| !v.is_empty()) {
            self.server.environment = environment;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| config::ConfigError::Message(format!("Invalid PORT: {}", port)))?;
        }

        if let Some(limit) = lookup("RATE_LIMIT") {
            self.rate_limit.requests_per_second = limit.parse().map_err(|_| {
                config::ConfigError::Message(format!("Invalid RATE_LIMIT: {}", limit))
            })?;
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.environment.eq_ignore_ascii_case("production")
    }

    /// Fills settings left unset with the defaults for `server.environment`
    fn apply_environment_defaults(&mut self) {
        if self.logging.format.is_none() {
            self.logging.format = Some(if self.is_production() {
                LogFormat::Json
            } else {
                LogFormat::Pretty
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn apply(vars: &[(&str, &str)]) -> Result<AppConfig, config::ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = AppConfig::default();
        config.apply_legacy_env(|name| vars.get(name).cloned())?;
        Ok(config)
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.api_prefix, "/api/v1");
        assert_eq!(config.storage.backend, StorageBackend::InMemory);
        assert_eq!(config.cache.backend, CacheBackend::InMemory);
        assert!(config.cache.key_prefix.is_empty());
        assert_eq!(config.auth.jwt_expiration_hours, 24);
        assert_eq!(config.rate_limit.capacity(), 100);
        assert!(!config.is_production());
    }

    #[test]
    fn test_legacy_env_overrides() {
        let config = apply(&[
            ("DATABASE_URL", "postgres://localhost/portfolio"),
            ("REDIS_URL", "redis://localhost:6379"),
            ("JWT_SECRET", "secret"),
            ("PORT", "9090"),
            ("RATE_LIMIT", "5"),
            ("ENVIRONMENT", "production"),
            ("ADMIN_DEFAULT_PASSWORD", "changeme123"),
        ])
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Postgres);
        assert_eq!(
            config.storage.database_url.as_deref(),
            Some("postgres://localhost/portfolio")
        );
        assert_eq!(config.cache.backend, CacheBackend::Redis);
        assert_eq!(config.auth.jwt_secret.as_deref(), Some("secret"));
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.rate_limit.requests_per_second, 5);
        assert_eq!(config.rate_limit.capacity(), 5);
        assert_eq!(config.auth.admin_password.as_deref(), Some("changeme123"));
        assert!(config.is_production());
    }

    #[test]
    fn test_production_defaults_to_json_logs() {
        let mut config = apply(&[("ENVIRONMENT", "production")]).unwrap();
        config.apply_environment_defaults();
        assert_eq!(config.logging.format, Some(LogFormat::Json));

        let mut config = apply(&[]).unwrap();
        config.apply_environment_defaults();
        assert_eq!(config.logging.format, Some(LogFormat::Pretty));
    }

    #[test]
    fn test_explicit_log_format_wins_in_production() {
        let mut config = apply(&[("ENVIRONMENT", "production")]).unwrap();
        config.logging.format = Some(LogFormat::Pretty);
        config.apply_environment_defaults();

        assert_eq!(config.logging.format, Some(LogFormat::Pretty));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(apply(&[("PORT", "not-a-port")]).is_err());
    }

    #[test]
    fn test_storage_backend_from_str() {
        assert_eq!(
            "postgres".parse::<StorageBackend>().unwrap(),
            StorageBackend::Postgres
        );
        assert_eq!(
            "in_memory".parse::<StorageBackend>().unwrap(),
            StorageBackend::InMemory
        );
        assert!("mysql".parse::<StorageBackend>().is_err());
    }
}
