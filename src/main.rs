mod app_system;
mod catalog;
mod config;
mod domain;
mod stats;
mod transport;
mod virtual_user;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::info;
use crate::app_system::{setup_tracing, AppError, LoadTestSystem};
use crate::catalog::ScenarioCatalog;
use crate::config::{Cli, LoadTestConfig};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    setup_tracing();

    let config = LoadTestConfig::try_from(cli)?;
    let catalog = match &config.catalog_path {
        Some(path) => ScenarioCatalog::from_json_file(path)?,
        None => ScenarioCatalog::black_friday(),
    };

    info!(
        host = %config.host,
        users = config.users,
        spawn_interval = ?config.spawn_interval,
        run_time = ?config.run_time,
        min_wait = ?config.pacing.min(),
        max_wait = ?config.pacing.max(),
        "Starting Black Friday swarm"
    );

    let system = LoadTestSystem::new(config, catalog)?;
    let snapshot = system.run().await?;

    info!(dispatched = snapshot.dispatched(), "Load test complete");
    Ok(())
}
