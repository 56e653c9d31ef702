//! Console settings, loaded from an optional TOML file and CLI overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the driver reacts to a line that is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidInputPolicy {
    /// Print a hint and ask again.
    #[default]
    Reprompt,
    /// Stop the program with an error.
    Exit,
}

/// User-configurable settings for the console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Glyph for empty cells.
    placeholder: char,

    /// Reaction to malformed input.
    on_invalid_input: InvalidInputPolicy,

    /// Print the board once more after the result line.
    show_final_board: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            placeholder: tictactoe_engine::EMPTY_CELL,
            on_invalid_input: InvalidInputPolicy::default(),
            show_final_board: true,
        }
    }
}

impl ConsoleSettings {
    /// Loads settings from a TOML file. Missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Builds settings from the command line: file first, then flag overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(placeholder) = cli.placeholder {
            settings.placeholder = placeholder;
        }
        if let Some(policy) = cli.on_invalid_input {
            settings.on_invalid_input = policy;
        }
        if cli.no_final_board {
            settings.show_final_board = false;
        }

        if matches!(settings.placeholder, 'X' | 'O') || settings.placeholder.is_control() {
            return Err(ConfigError::new(format!(
                "Placeholder {:?} would be confused with the board",
                settings.placeholder
            )));
        }

        debug!(?settings, "Settings resolved");
        Ok(settings)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
