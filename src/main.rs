//! Strictly Tic-Tac-Toe - console front-end

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe_console::{PlayConfig, console};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = PlayConfig::load_or_default(&cli.config)?.with_overrides(cli.delay_ms, cli.seed);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => console::run_play(&config).await,
        Command::SelfPlay { games, json } => run_self_play(games, json, &config).await,
    }
}

/// Run advisor-versus-advisor games and print the tally
#[instrument(skip(config))]
async fn run_self_play(games: u32, json: bool, config: &PlayConfig) -> Result<()> {
    info!("Starting self-play");
    let tally = console::self_play(games, config).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{games} games: {tally}");
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
