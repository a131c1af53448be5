//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_rounds::Theme;

/// Two-player tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Initial color theme (overrides the config file)
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// File to write logs to (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a list of moves and print the result
    Play {
        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,

        /// Moves (1-9 or labels like "center"); "r" starts a new round
        tokens: Vec<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Tui {
            theme: None,
            config: None,
            log_file: None,
        }
    }
}
