//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// Checks whether the board is full.
///
/// A full board with no winning line is a draw; the caller checks
/// for a win first.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::from_moves(3, &[])));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&Board::from_moves(3, &[5])));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_moves(3, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_full_iff_no_playable_positions() {
        for taken in 0..=9 {
            let moves: Vec<usize> = (1..=taken).collect();
            let board = Board::from_moves(3, &moves);
            assert_eq!(is_full(&board), board.playable_positions().is_empty());
        }
    }
}
