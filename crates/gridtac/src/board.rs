//! Board model: a labeled grid derived from the ordered move list.

use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// N-by-N board in row-major order.
///
/// A board is a pure function of the board size and the move list it
/// was derived from: identical inputs always produce identical boards.
/// Cells not yet played render as their 1-based position number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Derives the board from an ordered move list.
    ///
    /// Moves at even indices take the first seat's mark, odd indices
    /// the second seat's. Every position must lie in
    /// `[1, size * size]` and appear at most once; the snapshot layer
    /// enforces this before a board is ever derived.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn from_moves(size: usize, moves: &[usize]) -> Self {
        let mut squares = vec![Square::Empty; size * size];
        for (index, &position) in moves.iter().enumerate() {
            squares[position - 1] = Square::Occupied(Mark::for_move_index(index));
        }
        Self { size, squares }
    }

    /// Board size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cell count, N squared.
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// The square at a 1-based position, or `None` out of range.
    pub fn get(&self, position: usize) -> Option<Square> {
        position
            .checked_sub(1)
            .and_then(|index| self.squares.get(index))
            .copied()
    }

    /// The square at a 0-based row and column. Both must be below N.
    pub fn at(&self, row: usize, col: usize) -> Square {
        self.squares[row * self.size + col]
    }

    /// Whether the 1-based position is on the board and unoccupied.
    pub fn is_playable(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Square::Empty))
    }

    /// Whether every cell bears a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// All unoccupied positions, ascending.
    ///
    /// This is the authoritative legality source: a move is legal
    /// exactly when its position appears here.
    pub fn playable_positions(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(index, _)| index + 1)
            .collect()
    }

    /// Formats the board as a tab-separated grid, one line per row.
    ///
    /// Unoccupied cells show their 1-based position, occupied cells
    /// the bracketed mark label.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.size {
                if col > 0 {
                    out.push('\t');
                }
                let index = row * self.size + col;
                match self.squares[index] {
                    Square::Empty => out.push_str(&(index + 1).to_string()),
                    Square::Occupied(mark) => out.push_str(mark.label()),
                }
            }
        }
        out
    }
}
