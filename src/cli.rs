//! Command-line interface for the `tictactoe` binary.

use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - play against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(
        long,
        global = true,
        env = "STRICTLY_TICTACTOE_CONFIG",
        default_value = "tictactoe.toml"
    )]
    pub config: std::path::PathBuf,

    /// Pause before the computer replies, in milliseconds
    #[arg(long, global = true, env = "STRICTLY_TICTACTOE_DELAY_MS")]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible games
    #[arg(long, global = true, env = "STRICTLY_TICTACTOE_SEED")]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play against the computer on the terminal
    Play,

    /// Let the computer play itself and report the results
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
