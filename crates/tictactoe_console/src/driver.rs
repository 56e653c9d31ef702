//! Console loop: prompt, validate, apply, print, repeat until the game ends.

use crate::settings::{ConsoleSettings, InvalidInputPolicy};
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, GameStatus, MoveError};
use tracing::{debug, info, instrument, warn};

/// Hint printed after a line that is not a number.
const NUMBER_HINT: &str = "Please enter a number from 1 to 9.";

/// Errors that stop the console game before it finishes.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DriverError {
    /// Standard input closed mid-game.
    #[display("Input ended before the game finished")]
    EndOfInput,

    /// A line was not an integer and the policy is to exit.
    #[display("Expected a number from 1 to 9, got {:?}", input)]
    MalformedInput {
        /// The offending line, trimmed.
        input: String,
    },

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// The engine rejected a move.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
}

/// Drives one game between two people sharing a console.
pub struct ConsoleDriver<R, W> {
    input: R,
    output: W,
    settings: ConsoleSettings,
    engine: GameEngine,
}

impl<R: BufRead, W: Write> ConsoleDriver<R, W> {
    /// Creates a driver around a fresh game.
    pub fn new(input: R, output: W, settings: ConsoleSettings) -> Self {
        Self {
            input,
            output,
            settings,
            engine: GameEngine::new(),
        }
    }

    /// Returns the engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Plays until the game is won or tied and returns the final status.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError`] if input runs out, malformed input is not
    /// tolerated, or the console cannot be written.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameStatus, DriverError> {
        info!("Starting game");
        let placeholder = *self.settings.placeholder();

        loop {
            let position = self.read_move()?;
            self.engine.apply_move(position)?;
            writeln!(self.output, "{}", self.engine.render_with(placeholder))?;

            let outcome = self.engine.evaluate_outcome();
            if outcome.is_terminal() {
                writeln!(self.output, "{}", outcome)?;
                if *self.settings.show_final_board() {
                    writeln!(self.output, "{}", self.engine.render_with(placeholder))?;
                }
                self.output.flush()?;
                info!(?outcome, turns = self.engine.turn_count(), "Game finished");
                return Ok(self.engine.status());
            }
        }
    }

    /// Prompts until the current player enters a playable cell number.
    fn read_move(&mut self) -> Result<i64, DriverError> {
        loop {
            write!(
                self.output,
                "Player {} move (1-9): ",
                self.engine.current_player()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed mid-game");
                return Err(DriverError::EndOfInput);
            }

            let trimmed = line.trim();
            match trimmed.parse::<i64>() {
                Ok(position) if self.engine.is_valid_move(position) => return Ok(position),
                Ok(position) => debug!(position, "Unplayable cell, asking again"),
                Err(_) => match self.settings.on_invalid_input() {
                    InvalidInputPolicy::Reprompt => {
                        debug!(input = trimmed, "Not a number, asking again");
                        writeln!(self.output, "{}", NUMBER_HINT)?;
                    }
                    InvalidInputPolicy::Exit => {
                        return Err(DriverError::MalformedInput {
                            input: trimmed.to_string(),
                        });
                    }
                },
            }
        }
    }
}
