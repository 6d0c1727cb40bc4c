//! Purely Games - Unified CLI
//!
//! Demo walkthrough and strategy matches for functional tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use purely_games::{MatchConfig, MatchReport, demo, run_match};
use purely_tictactoe::strategies::StrategyKind;
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays clean for boards and JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo { seed } => run_demo(seed),
        Command::Play {
            x,
            o,
            games,
            seed,
            json,
        } => run_play(MatchConfig::new(x, o, games, seed), json),
        Command::Run { config, json } => run_play(MatchConfig::from_file(&config)?, json),
        Command::Strategies => {
            StrategyKind::iter().for_each(|kind| println!("{}", kind));
            Ok(())
        }
    }
}

/// Print the narrated walkthrough
#[instrument]
fn run_demo(seed: Option<u64>) -> Result<()> {
    info!("Starting demo");
    print!("{}", demo::transcript(seed)?);
    Ok(())
}

/// Play a match and print the report
#[instrument]
fn run_play(config: MatchConfig, json: bool) -> Result<()> {
    let report = run_match(&config);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &MatchReport) {
    let config = report.config();
    println!("{} (X) vs {} (O)\n", config.x_strategy(), config.o_strategy());
    for (i, result) in report.results().iter().enumerate() {
        let outcome = match (result.winner(), result.forfeited_by()) {
            (_, Some(player)) => format!("Draw ({} forfeited)", player),
            (Some(player), None) => format!("{} wins", player),
            (None, None) => "Draw".to_string(),
        };
        println!("Game {}: {}\n{}", i + 1, outcome, result.board());
    }
    println!("{}", report.tally());
}
