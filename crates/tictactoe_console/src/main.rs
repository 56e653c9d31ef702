//! Two-player tic-tac-toe on the console.
//!
//! Players take turns typing a cell number (1-9); the board is printed
//! after every move until someone completes a line or the board fills.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod driver;
mod settings;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use driver::ConsoleDriver;
use settings::ConsoleSettings;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = ConsoleSettings::resolve(&cli)?;
    info!(?settings, "Starting console game");

    let mut driver = ConsoleDriver::new(io::stdin().lock(), io::stdout().lock(), settings);
    let status = driver.run()?;

    info!(?status, turns = driver.engine().turn_count(), "Exiting");
    Ok(())
}
