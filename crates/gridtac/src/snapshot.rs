//! The resumable game snapshot and its durable store.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::SnapshotError;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Prefix shared by every save key.
pub const KEY_PREFIX: &str = "Tic_Tac_Toe_Saved_At_";

const KEY_SUFFIX: &str = ".json";

/// Sortable, filesystem-safe rendering of the save instant.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// The complete resumable state of one game.
///
/// Created fresh at game start or rehydrated from a stored record,
/// mutated only by the game state machine (one appended position per
/// completed turn, or a wholesale reset on replay), and written out
/// wholesale on interrupt-with-save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    board_size: usize,
    first_player_name: String,
    second_player_name: String,
    played_moves: Vec<usize>,
}

impl GameSnapshot {
    /// Builds an empty snapshot from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            board_size: config.board_size(),
            first_player_name: config.first_player_name().to_string(),
            second_player_name: config.second_player_name().to_string(),
            played_moves: Vec::new(),
        }
    }

    /// Board size N.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Name bound to the first seat.
    pub fn first_player_name(&self) -> &str {
        &self.first_player_name
    }

    /// Name bound to the second seat.
    pub fn second_player_name(&self) -> &str {
        &self.second_player_name
    }

    /// Positions in play order.
    pub fn played_moves(&self) -> &[usize] {
        &self.played_moves
    }

    /// Derives the current board. Pure: same moves, same board.
    pub fn board(&self) -> Board {
        Board::from_moves(self.board_size, &self.played_moves)
    }

    /// All still-unoccupied positions, ascending.
    pub fn playable_positions(&self) -> Vec<usize> {
        self.board().playable_positions()
    }

    /// Checks every snapshot invariant.
    ///
    /// A record that parses but violates one of these (board size
    /// below 3, empty name, move out of range or repeated, more moves
    /// than cells) is treated as corrupt: it cannot have been written
    /// by [`SnapshotStore::save`].
    ///
    /// # Errors
    ///
    /// [`SnapshotError::Corrupt`] naming the violated invariant.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let corrupt = |reason: String| SnapshotError::Corrupt { reason };

        if self.board_size < GameConfig::MIN_BOARD_SIZE {
            return Err(corrupt(format!("board_size {} is below 3", self.board_size)));
        }
        if self.first_player_name.is_empty() || self.second_player_name.is_empty() {
            return Err(corrupt("player names must be non-empty".to_string()));
        }
        let cells = self.board_size * self.board_size;
        if self.played_moves.len() > cells {
            return Err(corrupt(format!(
                "{} moves recorded on a board of {} cells",
                self.played_moves.len(),
                cells
            )));
        }
        let mut seen = vec![false; cells];
        for &position in &self.played_moves {
            if position < 1 || position > cells {
                return Err(corrupt(format!(
                    "move {position} is outside the board of {cells} cells"
                )));
            }
            if seen[position - 1] {
                return Err(corrupt(format!("move {position} is repeated")));
            }
            seen[position - 1] = true;
        }
        Ok(())
    }

    pub(crate) fn push_move(&mut self, position: usize) {
        self.played_moves.push(position);
    }

    pub(crate) fn clear_moves(&mut self) {
        self.played_moves.clear();
    }
}

/// Durable round-trip of snapshots, rooted at one directory.
///
/// Keys are file names of the form
/// `Tic_Tac_Toe_Saved_At_<timestamp>.json`; the timestamp is sortable,
/// so lexicographic key order is save order.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Creates a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes the snapshot under a fresh timestamp-derived key.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::Write`] on any underlying I/O failure; the
    /// in-memory snapshot is untouched and play may continue.
    #[instrument(skip(self, snapshot), fields(dir = %self.dir.display()))]
    pub fn save(&self, snapshot: &GameSnapshot) -> Result<String, SnapshotError> {
        let key = format!(
            "{KEY_PREFIX}{}{KEY_SUFFIX}",
            Local::now().format(TIMESTAMP_FORMAT)
        );
        let body = serde_json::to_string_pretty(snapshot)
            .map_err(|err| SnapshotError::Write { source: err.into() })?;
        fs::write(self.dir.join(&key), body)
            .map_err(|source| SnapshotError::Write { source })?;
        info!(%key, "game saved");
        Ok(key)
    }

    /// Reads a snapshot back by key and re-checks its invariants.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::Corrupt`] when the record is unreadable,
    /// missing a field, mis-shaped, or violates a snapshot invariant.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn load(&self, key: &str) -> Result<GameSnapshot, SnapshotError> {
        let raw = fs::read_to_string(self.dir.join(key)).map_err(|err| {
            SnapshotError::Corrupt {
                reason: format!("cannot read {key}: {err}"),
            }
        })?;
        let snapshot: GameSnapshot =
            serde_json::from_str(&raw).map_err(|err| SnapshotError::Corrupt {
                reason: format!("cannot parse {key}: {err}"),
            })?;
        snapshot.validate()?;
        debug!(%key, moves = snapshot.played_moves().len(), "snapshot loaded");
        Ok(snapshot)
    }

    /// Enumerates keys this store could load, sorted ascending.
    ///
    /// Only file names matching the writer's pattern are returned. An
    /// unreadable directory enumerates as empty, like an empty glob.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn list(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(%err, "cannot enumerate saved games");
                return Vec::new();
            }
        };
        let mut keys: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(KEY_PREFIX) && name.ends_with(KEY_SUFFIX))
            .collect();
        keys.sort();
        keys
    }
}
