//! Tic-tac-toe game engine.
//!
//! A minimal two-player turn-based engine: board state, turn
//! alternation, move validation, and win detection. The engine is the
//! entire surface; any CLI or UI is an external collaborator that
//! reads board state for display.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_player(), Player::O);
//!
//! game.play(0, 0)?; // o
//! game.play(1, 0)?; // x
//! game.play(0, 1)?; // o
//! game.play(1, 1)?; // x
//! game.play(0, 2)?; // o completes the top row
//!
//! assert!(game.ended());
//! assert_eq!(game.winner(), Some(Player::O));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod rules;
mod types;

pub use game::{Game, MoveError};
pub use rules::{column_winner, diagonal_winner, row_winner, winner};
pub use types::{Board, Player, SIZE};
