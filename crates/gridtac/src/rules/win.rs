//! Win detection for N-by-N boards.

use crate::board::Board;
use crate::types::{Mark, Square};
use tracing::instrument;

/// Checks whether the given mark occupies a complete line.
///
/// Lines are every row, every column, the main diagonal, and the
/// anti-diagonal. Only those two diagonals count, matching the
/// classical three-in-a-row rule generalized to N.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_winning_line(board: &Board, mark: Mark) -> bool {
    let n = board.size();
    let owned = |row: usize, col: usize| board.at(row, col) == Square::Occupied(mark);

    if (0..n).any(|row| (0..n).all(|col| owned(row, col))) {
        return true;
    }
    if (0..n).any(|col| (0..n).all(|row| owned(row, col))) {
        return true;
    }
    if (0..n).all(|i| owned(i, i)) {
        return true;
    }
    (0..n).all(|i| owned(i, n - 1 - i))
}
