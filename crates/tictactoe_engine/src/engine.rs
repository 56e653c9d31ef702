//! Game engine for tic-tac-toe.
//!
//! Each player's marks are kept as a nine-bit [`CellSet`]. A move sets one
//! bit; win detection is a subset test against the eight line masks.

use super::action::Move;
use super::error::{InvalidReason, MoveError};
use super::invariants;
use super::outcome::{GameStatus, Outcome};
use super::rules::{MAX_TURNS, MIN_WIN_TURNS, winning_line};
use super::{Cell, CellSet, Player, Position};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Glyph for empty cells in [`GameEngine::render`].
pub const EMPTY_CELL: char = '-';

/// Tic-tac-toe game engine.
///
/// Created empty with X to move. Only [`GameEngine::apply_move`] mutates it;
/// once won or tied it rejects every further move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    turn_count: u8,
    current_player: Player,
    x_marks: CellSet,
    o_marks: CellSet,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            turn_count: 0,
            current_player: Player::X,
            x_marks: CellSet::EMPTY,
            o_marks: CellSet::EMPTY,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Builds a game by applying cell numbers in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(moves: &[i64]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &number in moves {
            engine.apply_move(number)?;
        }
        Ok(engine)
    }

    /// Returns whose turn it is.
    ///
    /// After a win this is still the winner, since the turn does not pass
    /// on a terminal move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true if `position` names an empty cell (1-9).
    #[instrument(skip(self))]
    pub fn is_valid_move(&self, position: i64) -> bool {
        Position::from_number(position).is_some_and(|pos| self.cell(pos) == Cell::Empty)
    }

    /// Marks `position` for the current player and advances the game.
    ///
    /// The turn passes to the opponent unless the move wins or fills the
    /// board, in which case the game becomes terminal.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] without touching any state if the
    /// cell is out of range, already occupied, or the game is over.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turn_count))]
    pub fn apply_move(&mut self, position: i64) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::invalid(position, InvalidReason::GameOver));
        }
        let pos = Position::from_number(position)
            .ok_or_else(|| MoveError::invalid(position, InvalidReason::OutOfRange))?;
        if self.cell(pos) != Cell::Empty {
            return Err(MoveError::invalid(position, InvalidReason::Occupied));
        }

        let player = self.current_player;
        self.marks_mut(player).insert(pos);
        self.turn_count += 1;
        self.history.push(Move::new(player, pos));
        debug!(%pos, "Mark placed");

        match self.evaluate_outcome() {
            Outcome::NoWinner => self.current_player = player.opponent(),
            outcome => {
                info!(?outcome, turns = self.turn_count, "Game over");
                self.status = outcome.into();
            }
        }

        debug_assert!(
            invariants::check_all(self).is_ok(),
            "Engine invariants violated"
        );
        Ok(())
    }

    /// Evaluates the board from the current player's side.
    ///
    /// Only the current player's marks are tested. Before a move is handed
    /// over that is the mover, who is the only one able to have just
    /// completed a line.
    #[instrument(skip(self))]
    pub fn evaluate_outcome(&self) -> Outcome {
        if self.turn_count < MIN_WIN_TURNS {
            return Outcome::NoWinner;
        }

        if winning_line(self.occupied_by(self.current_player)).is_some() {
            Outcome::Win(self.current_player)
        } else if self.turn_count == MAX_TURNS {
            Outcome::Tie
        } else {
            Outcome::NoWinner
        }
    }

    /// Renders the board as three rows of three glyphs, each row ending in a newline.
    pub fn render(&self) -> String {
        self.render_with(EMPTY_CELL)
    }

    /// Renders the board using `placeholder` for empty cells.
    pub fn render_with(&self, placeholder: char) -> String {
        let mut result = String::with_capacity(12);
        for (i, cell) in self.cells().iter().enumerate() {
            result.push(cell.symbol(placeholder));
            if i % 3 == 2 {
                result.push('\n');
            }
        }
        result
    }

    /// Number of moves played so far.
    pub fn turn_count(&self) -> u8 {
        self.turn_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the contents of one cell.
    pub fn cell(&self, pos: Position) -> Cell {
        if self.x_marks.contains(pos) {
            Cell::Occupied(Player::X)
        } else if self.o_marks.contains(pos) {
            Cell::Occupied(Player::O)
        } else {
            Cell::Empty
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> [Cell; 9] {
        let mut cells = [Cell::Empty; 9];
        for pos in Position::iter() {
            cells[pos.index()] = self.cell(pos);
        }
        cells
    }

    /// Cells marked by `player`.
    pub fn occupied_by(&self, player: Player) -> CellSet {
        match player {
            Player::X => self.x_marks,
            Player::O => self.o_marks,
        }
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty cells, or none once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::iter()
            .filter(|pos| self.cell(*pos) == Cell::Empty)
            .collect()
    }

    fn marks_mut(&mut self, player: Player) -> &mut CellSet {
        match player {
            Player::X => &mut self.x_marks,
            Player::O => &mut self.o_marks,
        }
    }

    #[cfg(test)]
    pub(crate) fn corrupt_for_test(&mut self, player: Player, pos: Position) {
        self.marks_mut(player).insert(pos);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
