//! The game state machine.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{MoveError, SnapshotError};
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Controller, Mark, Seat};
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument};

/// Tagged result of evaluating or interrupting a game.
///
/// Everything except `InProgress` is terminal for the current play
/// session. The driving loop switches on this tag; outcomes are never
/// signaled by raising.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game continues with the next seat.
    InProgress,
    /// The given mark completed a line.
    Won(Mark),
    /// The board filled with no winning line.
    Draw,
    /// A human quit without saving.
    Interrupted,
    /// A human quit and asked for the game to be persisted.
    Saved,
}

/// The seat whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn<'a> {
    /// Display name bound to the seat.
    pub name: &'a str,
    /// Mark the seat plays.
    pub mark: Mark,
    /// Which seat moves.
    pub seat: Seat,
    /// Who controls the seat.
    pub controller: Controller,
}

/// Turn sequencing, legality, and terminal classification for one
/// play session.
///
/// The machine is the sole owner of its [`GameSnapshot`]: no other
/// component mutates the move list. Mutation is limited to one
/// appended position per completed turn and the wholesale reset used
/// for replay.
#[derive(Debug, Clone)]
pub struct Game {
    snapshot: GameSnapshot,
    first_controller: Controller,
    second_controller: Controller,
}

impl Game {
    /// Starts a fresh game from a validated configuration.
    #[instrument(skip(config), fields(board_size = config.board_size()))]
    pub fn new(config: &GameConfig) -> Self {
        info!(
            first = config.first_player_name(),
            second = config.second_player_name(),
            "starting fresh game"
        );
        Self {
            snapshot: GameSnapshot::from_config(config),
            first_controller: config.first_controller(),
            second_controller: config.second_controller(),
        }
    }

    /// Rehydrates a game verbatim from a stored snapshot.
    ///
    /// Controllers are rederived from the reserved machine name, the
    /// same binding used when the snapshot was first configured.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::Corrupt`] when the snapshot violates an
    /// invariant a saved game could never hold.
    #[instrument(skip(snapshot), fields(moves = snapshot.played_moves().len()))]
    pub fn resume(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        let controller = |name: &str| {
            if name == GameConfig::MACHINE_NAME {
                Controller::Machine
            } else {
                Controller::Human
            }
        };
        info!(
            first = snapshot.first_player_name(),
            second = snapshot.second_player_name(),
            "resuming saved game"
        );
        Ok(Self {
            first_controller: controller(snapshot.first_player_name()),
            second_controller: controller(snapshot.second_player_name()),
            snapshot,
        })
    }

    /// Read access to the owned snapshot, for rendering and saving.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Derives the current board from the move list.
    pub fn board(&self) -> Board {
        self.snapshot.board()
    }

    /// Controller bound to the given seat.
    pub fn controller(&self, seat: Seat) -> Controller {
        match seat {
            Seat::First => self.first_controller,
            Seat::Second => self.second_controller,
        }
    }

    /// The seat to move: first seat on even move counts, else second.
    pub fn current_turn(&self) -> Turn<'_> {
        let seat = if self.snapshot.played_moves().len() % 2 == 0 {
            Seat::First
        } else {
            Seat::Second
        };
        let name = match seat {
            Seat::First => self.snapshot.first_player_name(),
            Seat::Second => self.snapshot.second_player_name(),
        };
        Turn {
            name,
            mark: seat.mark(),
            seat,
            controller: self.controller(seat),
        }
    }

    /// Appends a move for the seat to move.
    ///
    /// # Errors
    ///
    /// [`MoveError`] when the position is off the board or already
    /// taken; the move list is left unchanged.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: usize) -> Result<(), MoveError> {
        let board = self.board();
        if position < 1 || position > board.cell_count() {
            return Err(MoveError::OutOfRange {
                position,
                cells: board.cell_count(),
            });
        }
        if !board.is_playable(position) {
            return Err(MoveError::Occupied { position });
        }
        debug!(position, "move applied");
        self.snapshot.push_move(position);
        Ok(())
    }

    /// Classifies the position after the latest move.
    ///
    /// Checks a winning line for the mark that just moved, then a
    /// full board. Pure: evaluating twice classifies identically.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> Outcome {
        let moves = self.snapshot.played_moves();
        let Some(last_index) = moves.len().checked_sub(1) else {
            return Outcome::InProgress;
        };
        let mover = Mark::for_move_index(last_index);
        let board = self.board();
        if rules::win::has_winning_line(&board, mover) {
            Outcome::Won(mover)
        } else if rules::draw::is_full(&board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Ends the session on a quit request from a human turn.
    ///
    /// Does not consult the win detector; the caller performs the
    /// actual store write when the outcome is [`Outcome::Saved`].
    #[instrument(skip(self))]
    pub fn interrupt(&self, wants_save: bool) -> Outcome {
        if wants_save {
            Outcome::Saved
        } else {
            Outcome::Interrupted
        }
    }

    /// Resolves the automated opponent's move: uniform-random over
    /// the playable positions, no look-ahead. `None` on a full board.
    #[instrument(skip(self))]
    pub fn machine_move(&self) -> Option<usize> {
        let playable = self.snapshot.playable_positions();
        let position = playable.choose(&mut rand::thread_rng()).copied();
        debug!(?position, "machine move resolved");
        position
    }

    /// Clears the move list for a replay with the same configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting for replay");
        self.snapshot.clear_moves();
    }
}
