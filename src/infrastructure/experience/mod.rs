//! Experience persistence

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresExperienceRepository;
pub use repository::InMemoryExperienceRepository;
