//! Core domain types for the game.

use serde::{Deserialize, Serialize};

/// Mark bound to a play-order seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark of the player who moves first.
    X,
    /// Mark of the player who moves second.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark that plays the move at the given index of the move
    /// list. Even indices belong to the first seat.
    pub fn for_move_index(index: usize) -> Self {
        if index % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Bracketed label rendered on occupied board cells.
    pub fn label(self) -> &'static str {
        match self {
            Mark::X => "[X]",
            Mark::O => "[O]",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Play-order seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Moves on even move indices.
    First,
    /// Moves on odd move indices.
    Second,
}

impl Seat {
    /// Returns the opposing seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// The mark bound to this seat.
    pub fn mark(self) -> Mark {
        match self {
            Seat::First => Mark::X,
            Seat::Second => Mark::O,
        }
    }
}

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Moves are supplied by the interaction layer.
    Human,
    /// Moves are resolved by the engine, uniformly at random.
    Machine,
}

/// A cell on the derived board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Cell still showing its own position number.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }

    #[test]
    fn test_mark_alternates_by_move_index() {
        assert_eq!(Mark::for_move_index(0), Mark::X);
        assert_eq!(Mark::for_move_index(1), Mark::O);
        assert_eq!(Mark::for_move_index(8), Mark::X);
    }

    #[test]
    fn test_seat_mark_binding() {
        assert_eq!(Seat::First.mark(), Mark::X);
        assert_eq!(Seat::Second.mark(), Mark::O);
        assert_eq!(Seat::First.other(), Seat::Second);
    }
}
