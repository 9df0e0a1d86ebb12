//! Main entry point for the Olympics dashboard.

use anyhow::Context;
use clap::Parser;
use olympics_common::{init_dev_logging, init_logging, LoggingConfig};
use olympics_config::ConfigLoader;
use olympics_dashboard::{export_figures, serve, AppState, Cli, Command};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply(&mut config);
    config.validate_all().context("Invalid configuration")?;

    if cli.dev {
        init_dev_logging()
    } else {
        init_logging(LoggingConfig::from(&config.logging))
    }
    .context("Failed to initialize logging")?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting Olympics dashboard");

    let host = config.server.host.clone();
    let port = config.server.port;
    let default_sport = config.dashboard.default_sport.clone();

    let state = AppState::load(config).context("Failed to prepare the dataset")?;

    match cli.command {
        Command::Serve { .. } => serve(state, &host, port).await?,
        Command::Export { out, sport } => {
            let sport = sport.unwrap_or(default_sport);
            let manifest = export_figures(&state, &out, &sport)
                .with_context(|| format!("Failed to export figures to {}", out.display()))?;
            println!("Wrote {} figures to {}", manifest.figures.len(), out.display());
        }
    }

    Ok(())
}
