use clap::Parser;
use portfolio_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli::bootstrap()?;

    match cli.command {
        None => cli::serve::run(config, cli::serve::ServeArgs::default()).await,
        Some(Command::Serve(args)) => cli::serve::run(config, args).await,
        Some(Command::Migrate(args)) => cli::migrate::run(config, args).await,
    }
}
