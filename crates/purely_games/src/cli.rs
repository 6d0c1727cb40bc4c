//! Command-line interface for purely_games.

use clap::{Parser, Subcommand};
use purely_tictactoe::strategies::StrategyKind;

/// Purely Games - Functional tic-tac-toe with pluggable strategies
#[derive(Parser, Debug)]
#[command(name = "purely_games")]
#[command(about = "Functional tic-tac-toe with pluggable strategies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the narrated walkthrough
    Demo {
        /// Seed for the random strategies in the walkthrough
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play one or more games between built-in strategies
    Play {
        /// Strategy playing X
        #[arg(long, default_value = "center-first")]
        x: StrategyKind,

        /// Strategy playing O
        #[arg(long, default_value = "random")]
        o: StrategyKind,

        /// Number of games to play
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        games: u32,

        /// Base seed for random strategies
        #[arg(long)]
        seed: Option<u64>,

        /// Print the match report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a match described by a TOML file
    Run {
        /// Path to match configuration file
        #[arg(short, long, default_value = "match.toml")]
        config: std::path::PathBuf,

        /// Print the match report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in strategies
    Strategies,
}
