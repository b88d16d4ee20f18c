//! CLI module for the Portfolio API
//!
//! - `serve`: run the HTTP server (default)
//! - `migrate`: apply schema migrations, seed the profile and admin, then exit
//!   (`--status` only reports applied and pending migrations)

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Portfolio API - profile, experience, skills, projects and contact inbox
#[derive(Debug, Parser)]
#[command(name = "portfolio-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the API server (default)
    Serve(serve::ServeArgs),

    /// Apply database migrations and seed data, then exit
    Migrate(migrate::MigrateArgs),
}

/// Load `.env` and configuration, then start logging
pub fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}
