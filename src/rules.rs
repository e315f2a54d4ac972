//! Win detection for tic-tac-toe.
//!
//! Pure functions for evaluating terminal conditions on a board.
//! Rules are separated from board storage so they can be tested
//! independently; every check recomputes from the cells, no cached
//! state.

use crate::types::{Board, Player, SIZE};
use tracing::instrument;

/// Checks whether every cell named by `line` holds the same player.
///
/// An all-empty line does not count: `None` is never a player.
fn line_winner(board: &Board, line: impl IntoIterator<Item = (usize, usize)>) -> Option<Player> {
    let mut cells = line.into_iter().map(|(x, y)| board.get(x, y));
    let first = cells.next()??;
    cells.all(|c| c == Some(first)).then_some(first)
}

/// Checks the `SIZE` rows for a fully occupied line.
#[instrument(skip(board))]
pub fn row_winner(board: &Board) -> Option<Player> {
    (0..SIZE).find_map(|x| line_winner(board, (0..SIZE).map(move |y| (x, y))))
}

/// Checks the `SIZE` columns for a fully occupied line.
#[instrument(skip(board))]
pub fn column_winner(board: &Board) -> Option<Player> {
    (0..SIZE).find_map(|y| line_winner(board, (0..SIZE).map(move |x| (x, y))))
}

/// Checks the main diagonal and the anti-diagonal.
#[instrument(skip(board))]
pub fn diagonal_winner(board: &Board) -> Option<Player> {
    line_winner(board, (0..SIZE).map(|i| (i, i)))
        .or_else(|| line_winner(board, (0..SIZE).map(|i| (i, SIZE - i - 1))))
}

/// Checks all `SIZE * 2 + 2` lines for a winner.
pub fn winner(board: &Board) -> Option<Player> {
    row_winner(board)
        .or_else(|| column_winner(board))
        .or_else(|| diagonal_winner(board))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(x, y, player) in cells {
            board.set(x, y, player);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[
            (0, 0, Player::X),
            (0, 1, Player::X),
            (0, 2, Player::X),
        ]);
        assert_eq!(row_winner(&board), Some(Player::X));
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(&[
            (0, 1, Player::O),
            (1, 1, Player::O),
            (2, 1, Player::O),
        ]);
        assert_eq!(row_winner(&board), None);
        assert_eq!(column_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = board_from(&[
            (0, 0, Player::O),
            (1, 1, Player::O),
            (2, 2, Player::O),
        ]);
        assert_eq!(diagonal_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[
            (0, 2, Player::X),
            (1, 1, Player::X),
            (2, 0, Player::X),
        ]);
        assert_eq!(diagonal_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_from(&[(0, 0, Player::X), (0, 1, Player::X)]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_from(&[
            (0, 0, Player::X),
            (0, 1, Player::O),
            (0, 2, Player::X),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line_is_not_a_win() {
        // x o x / o x x / o x o
        let board = board_from(&[
            (0, 0, Player::X),
            (0, 1, Player::O),
            (0, 2, Player::X),
            (1, 0, Player::O),
            (1, 1, Player::X),
            (1, 2, Player::X),
            (2, 0, Player::O),
            (2, 1, Player::X),
            (2, 2, Player::O),
        ]);
        assert_eq!(winner(&board), None);
    }
}
