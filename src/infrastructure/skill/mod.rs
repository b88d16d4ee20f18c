//! Skill persistence

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresSkillRepository;
pub use repository::InMemorySkillRepository;
