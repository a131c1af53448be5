//! tictactoe - terminal tic-tac-toe with a scoreboard.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_rounds::{AppConfig, GameEngine, Theme, logging, parse_script, report, run_script};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Tui {
            theme,
            config,
            log_file,
        } => run_tui(theme, config, log_file),
        Command::Play { json, tokens } => run_play(json, &tokens),
    }
}

/// Run the interactive terminal UI
fn run_tui(theme: Option<Theme>, config: Option<PathBuf>, log_file: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(theme, log_file);
    tictactoe_rounds::tui::run_tui(&config)
}

/// Run a scripted game and print the final state
#[instrument(skip(tokens), fields(tokens = tokens.len()))]
fn run_play(json: bool, tokens: &[String]) -> Result<()> {
    logging::init_stderr();

    let steps = parse_script(tokens)?;
    let mut engine = GameEngine::new();
    let outcome = run_script(&mut engine, &steps);
    info!(%outcome, scores = %engine.scores(), "Script finished");

    if json {
        let snapshot = serde_json::to_string_pretty(&engine.snapshot())?;
        println!("{}", snapshot);
    } else {
        println!("{}", report(&engine));
    }
    Ok(())
}
