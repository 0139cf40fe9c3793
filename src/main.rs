//! Game gateway launcher binary.
//!
//! ```text
//! config.toml ──▶ config loader ──▶ gateway::setup ──▶ start()
//!                                          │
//!                       SIGINT/SIGTERM ──▶ stop()
//! ```
//!
//! The process is pure glue: it loads and validates the configuration,
//! brings the gateway up, and hands control back on the first shutdown
//! signal. Anything that fails along the way ends the process with a
//! non-zero status.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_gateway::bots::BotMode;
use game_gateway::config::load_config;
use game_gateway::datasource::{Datasource, GameDatabase};
use game_gateway::gateway;
use game_gateway::lifecycle::{self, signals};

#[derive(Parser)]
#[command(name = "game-gateway")]
#[command(about = "HTTPS gateway launcher for the game platform", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "sample/config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and exit.
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "game_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Check) = cli.command {
        let config = load_config(&cli.config)?;
        let bot_mode = BotMode::from_limit(config.bots.max_bots);
        if let Some(game_db) = GameDatabase::from_config(&config.sql) {
            tracing::info!(
                path = %cli.config.display(),
                game_database = %game_db,
                bot_mode = %bot_mode,
                "Configuration OK"
            );
        }
        return Ok(());
    }

    tracing::info!("game-gateway v0.1.0 starting");

    let mut server = lifecycle::launch(&cli.config, Datasource::DEFAULT, gateway::setup).await?;

    signals::wait_for_shutdown().await;

    server.stop().await?;
    tracing::info!("Shutdown complete");
    Ok(())
}
