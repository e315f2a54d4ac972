//! The tic-tac-toe game state machine.
//!
//! A [`Game`] owns the board and the two-player turn rotation. Moves
//! are validated and applied in place; once a terminal condition is
//! reached the state becomes read-only and further moves fail.

use crate::rules;
use crate::types::{Board, Player, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when playing a move.
///
/// All three signal caller misuse; none is recoverable internally.
/// They are surfaced synchronously to the caller as control-flow
/// signals for illegal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// A coordinate is outside the board.
    #[display("Cell ({_0}, {_1}) is outside the board")]
    OutOfBoard(usize, usize),

    /// The game has already reached a terminal condition.
    #[display("Game has already ended")]
    GameAlreadyEnded,

    /// The target cell is already occupied.
    #[display("Cell ({_0}, {_1}) is already occupied")]
    InvalidPlay(usize, usize),
}

impl std::error::Error for MoveError {}

/// Complete game state.
///
/// Created once with an empty board and a fixed player order, then
/// mutated in place by successive [`Game::play`] calls until a line is
/// completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    /// Turn rotation: front is the player to move, back is the player
    /// who moved last. Each successful move reverses the pair.
    players: [Player; 2],
}

impl Game {
    /// Creates a new game with an empty board. `O` moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: [Player::O, Player::X],
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player expected to make the next move.
    pub fn current_player(&self) -> Player {
        self.players[0]
    }

    /// Returns the occupant of cell `(x, y)`, or `None` if the cell is
    /// empty or out of range.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<Player> {
        self.board.get(x, y)
    }

    /// Plays the current player's mark at `(x, y)`.
    ///
    /// On success the cell is set and the turn passes to the other
    /// player.
    ///
    /// # Errors
    ///
    /// Checked in order, first failure wins:
    /// - [`MoveError::OutOfBoard`] if `x >= SIZE` or `y >= SIZE`.
    /// - [`MoveError::GameAlreadyEnded`] if a terminal condition holds.
    /// - [`MoveError::InvalidPlay`] if the cell is already occupied.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play(&mut self, x: usize, y: usize) -> Result<(), MoveError> {
        if x >= SIZE || y >= SIZE {
            return Err(MoveError::OutOfBoard(x, y));
        }
        if self.ended() {
            return Err(MoveError::GameAlreadyEnded);
        }
        if !self.board.is_empty(x, y) {
            return Err(MoveError::InvalidPlay(x, y));
        }

        self.board.set(x, y, self.current_player());
        self.players.reverse();
        Ok(())
    }

    /// Checks whether any row, column, or diagonal is fully occupied
    /// by one player.
    ///
    /// Recomputed from the board on every call. A full board with no
    /// completed line is not terminal; there is no draw state.
    pub fn ended(&self) -> bool {
        rules::winner(&self.board).is_some()
    }

    /// Returns the winning player, or `None` while the game is open.
    ///
    /// The winner is the player at the back of the rotation: `play`
    /// moves the mover to the back, so the back is whoever just
    /// completed the line.
    pub fn winner(&self) -> Option<Player> {
        self.ended().then(|| self.players[1])
    }

    /// Logs the board through the tracing facade, one row per line.
    ///
    /// Human inspection only; not part of core correctness.
    pub fn debug_print(&self) {
        for row in self.board.to_string().lines() {
            debug!("{row}");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
