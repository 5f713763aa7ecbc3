//! Error taxonomy for the engine.
//!
//! Configuration and move errors are locally recoverable: the
//! interaction layer re-prompts and play continues. Snapshot errors
//! are terminal for the single save or load that raised them; the
//! in-memory game stays valid.

use derive_more::{Display, Error};

/// Invalid game configuration, rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board size below the 3-cell minimum.
    #[display("board size must be a positive integer >= 3, got {size}")]
    BoardSize {
        /// The rejected size.
        size: usize,
    },
    /// Human player count other than 1 or 2.
    #[display("number of human players has to be 1 or 2, got {count}")]
    PlayerCount {
        /// The rejected count.
        count: u8,
    },
    /// Turn-order choice other than 1 or 2.
    #[display("game order should be either 1 or 2, got {choice}")]
    TurnOrder {
        /// The rejected choice.
        choice: u8,
    },
}

/// Illegal move, rejected without mutating the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Position outside `[1, board_size * board_size]`.
    #[display("position {position} is outside the board of {cells} cells")]
    OutOfRange {
        /// The rejected position.
        position: usize,
        /// Total cell count of the board.
        cells: usize,
    },
    /// Position already bears a mark.
    #[display("position {position} is not available")]
    Occupied {
        /// The rejected position.
        position: usize,
    },
}

/// Failure of a single snapshot store operation.
#[derive(Debug, Display, Error)]
pub enum SnapshotError {
    /// The underlying write failed; the in-memory snapshot is intact.
    #[display("failed to write snapshot: {source}")]
    Write {
        /// The I/O failure.
        source: std::io::Error,
    },
    /// The stored record is missing a field, mis-shaped, or violates
    /// a snapshot invariant.
    #[display("snapshot is corrupt: {reason}")]
    Corrupt {
        /// What was wrong with the record.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = ConfigError::BoardSize { size: 2 };
        assert!(err.to_string().contains('2'));

        let err = MoveError::Occupied { position: 5 };
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_write_error_exposes_source() {
        let err = SnapshotError::Write {
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
