//! Storage infrastructure - backend selection and shared PostgreSQL plumbing

mod factory;
mod in_memory;
pub mod migrations;
mod postgres;

pub use factory::{Repositories, StorageFactory};
pub use in_memory::InMemoryTable;
pub use migrations::{
    Migration, PostgresMigrator, pending_migrations, portfolio_migrations, run_migrations,
};
pub use postgres::{PostgresConfig, connect_pool, is_unique_violation, map_write_error};
