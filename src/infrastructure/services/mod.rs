//! Infrastructure services

mod contact_service;
mod experience_service;
mod portfolio_cache_service;
mod profile_service;
mod project_service;
mod skill_service;

pub use contact_service::ContactService;
pub use experience_service::ExperienceService;
pub use portfolio_cache_service::{CACHE_TTL, PortfolioCacheConfig, PortfolioCacheService};
pub use profile_service::ProfileService;
pub use project_service::ProjectService;
pub use skill_service::SkillService;
