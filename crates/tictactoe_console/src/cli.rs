//! Command-line interface for the console game.

use crate::settings::InvalidInputPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe on the console, cells numbered 1-9", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glyph drawn for empty cells
    #[arg(long)]
    pub placeholder: Option<char>,

    /// What to do when a line is not a number
    #[arg(long, value_enum)]
    pub on_invalid_input: Option<InvalidInputPolicy>,

    /// Do not print the board again after the result line
    #[arg(long)]
    pub no_final_board: bool,
}
