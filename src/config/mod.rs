//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AuthConfig, CacheBackend, CacheConfig, LogFormat, LoggingConfig, RateLimitConfig,
    ServerConfig, StorageBackend, StorageConfig,
};
