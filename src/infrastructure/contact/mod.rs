//! Contact submission persistence

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresContactRepository;
pub use repository::InMemoryContactRepository;
