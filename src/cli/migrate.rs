//! Migrate command - prepares the store and exits

use clap::Args;
use tracing::info;

use crate::config::{AppConfig, StorageBackend};
use crate::infrastructure::storage::{PostgresMigrator, StorageFactory, pending_migrations};

#[derive(Debug, Default, Args)]
pub struct MigrateArgs {
    /// Report applied and pending migrations without changing the schema
    #[arg(long)]
    pub status: bool,
}

pub async fn run(mut config: AppConfig, args: MigrateArgs) -> anyhow::Result<()> {
    if config.storage.backend != StorageBackend::Postgres {
        anyhow::bail!("migrate requires the postgres storage backend (set DATABASE_URL)");
    }

    if args.status {
        return report_status(&config).await;
    }

    config.storage.run_migrations = true;

    // Building the state applies migrations and seeds the profile and admin
    crate::create_app_state_with_config(&config).await?;
    info!("Migrations applied and seed data in place");

    Ok(())
}

async fn report_status(config: &AppConfig) -> anyhow::Result<()> {
    let pool = StorageFactory::new().connect(&config.storage).await?;
    let migrator = PostgresMigrator::new(pool);

    let current = migrator.current_version().await?;
    let applied = migrator.applied_versions().await?;
    let pending = pending_migrations(&applied);

    info!(
        current_version = ?current,
        applied = applied.len(),
        pending = pending.len(),
        "Migration status"
    );
    for migration in &pending {
        info!(
            version = migration.version,
            description = migration.description,
            "Pending migration"
        );
    }

    Ok(())
}
