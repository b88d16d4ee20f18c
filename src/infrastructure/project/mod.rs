//! Project persistence

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresProjectRepository;
pub use repository::InMemoryProjectRepository;
