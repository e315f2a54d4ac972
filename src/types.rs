//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Board dimension. The board is always `SIZE * SIZE` cells.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player O (goes first).
    O,
    /// Player X (goes second).
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::O => write!(f, "o"),
            Player::X => write!(f, "x"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in a flat array where cell `(x, y)` lives at
/// linear index `x * SIZE + y`. An empty cell is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; SIZE * SIZE],
        }
    }

    /// Linear index of cell `(x, y)`.
    pub(crate) fn pos(x: usize, y: usize) -> usize {
        x * SIZE + y
    }

    /// Returns the occupant of cell `(x, y)`, or `None` if the cell is
    /// empty or the coordinates fall outside the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Player> {
        if x >= SIZE || y >= SIZE {
            return None;
        }
        self.cells[Self::pos(x, y)]
    }

    /// Occupies cell `(x, y)` with `player`.
    ///
    /// Callers validate bounds and vacancy first; this is the raw write.
    pub(crate) fn set(&mut self, x: usize, y: usize, player: Player) {
        self.cells[Self::pos(x, y)] = Some(player);
    }

    /// Checks if cell `(x, y)` is unoccupied.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_none()
    }

    /// Returns all cells in linear order.
    pub fn cells(&self) -> &[Option<Player>; SIZE * SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders one row per line, cells joined with `" | "`, empty cells
    /// as `"."`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..SIZE {
            for y in 0..SIZE {
                match self.cells[Self::pos(x, y)] {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, ".")?,
                }
                if y < SIZE - 1 {
                    write!(f, " | ")?;
                }
            }
            if x < SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
