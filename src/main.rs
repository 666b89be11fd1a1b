mod actor_framework;
mod domain;
mod clients;
mod app_system;
mod cli;

mod user_actor;
mod game_actor;
mod cart_actor;
mod order_actor;
mod transaction_actor;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use crate::app_system::{seed_demo_data, setup_tracing, AppError, VaultConfig, VaultSystem};
use crate::cli::{Console, Menu};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = VaultConfig::parse();
    setup_tracing(&config.log_level);

    info!(?config, "Starting Game Vault");

    let system = VaultSystem::new(usize::from(config.channel_capacity));

    if !config.no_seed {
        if let Err(e) = seed_demo_data(&system).await {
            error!(error = %e, "Failed to load demo data");
            eprintln!("Error initializing data: {e}");
        }
    }

    let console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    let session = Menu::new(&system, console).run().await;

    system.shutdown().await?;
    session?;

    info!("Game Vault stopped");
    Ok(())
}
