//! Validated game configuration.

use crate::error::ConfigError;
use crate::types::Controller;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Configuration for a fresh game, validated at construction.
///
/// The interaction layer already rejects malformed entries, but the
/// engine re-checks every field so a misbehaving caller cannot start
/// a game with an impossible shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    board_size: usize,
    first_player_name: String,
    second_player_name: String,
    first_controller: Controller,
    second_controller: Controller,
}

impl GameConfig {
    /// Board size offered when the player declines to choose one.
    pub const DEFAULT_BOARD_SIZE: usize = 3;

    /// Reserved name identifying the automated opponent's seat.
    pub const MACHINE_NAME: &'static str = "Machine";

    /// Smallest playable board.
    pub const MIN_BOARD_SIZE: usize = 3;

    /// Builds a configuration from raw console choices.
    ///
    /// `human_players` must be 1 or 2. With two humans both seats get
    /// fixed default names; with one, `turn_order` picks the human's
    /// seat (1 first, 2 second) and the other seat is bound to the
    /// automated opponent.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the board size is below 3, the player
    /// count is not 1 or 2, or the turn order is not 1 or 2.
    #[instrument]
    pub fn from_choices(
        board_size: usize,
        human_players: u8,
        turn_order: Option<u8>,
    ) -> Result<Self, ConfigError> {
        if board_size < Self::MIN_BOARD_SIZE {
            return Err(ConfigError::BoardSize { size: board_size });
        }
        match human_players {
            2 => Ok(Self::two_humans(board_size)),
            1 => match turn_order.unwrap_or(0) {
                1 => Ok(Self::one_human(board_size, true)),
                2 => Ok(Self::one_human(board_size, false)),
                choice => Err(ConfigError::TurnOrder { choice }),
            },
            count => Err(ConfigError::PlayerCount { count }),
        }
    }

    fn two_humans(board_size: usize) -> Self {
        info!(board_size, "configuring two-human game");
        Self {
            board_size,
            first_player_name: "User 1".to_string(),
            second_player_name: "User 2".to_string(),
            first_controller: Controller::Human,
            second_controller: Controller::Human,
        }
    }

    fn one_human(board_size: usize, human_first: bool) -> Self {
        info!(board_size, human_first, "configuring game against the machine");
        let (first, second, first_controller, second_controller) = if human_first {
            ("User", Self::MACHINE_NAME, Controller::Human, Controller::Machine)
        } else {
            (Self::MACHINE_NAME, "User", Controller::Machine, Controller::Human)
        };
        Self {
            board_size,
            first_player_name: first.to_string(),
            second_player_name: second.to_string(),
            first_controller,
            second_controller,
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

    /// Controller of the first seat.
    pub fn first_controller(&self) -> Controller {
        self.first_controller
    }

    /// Controller of the second seat.
    pub fn second_controller(&self) -> Controller {
        self.second_controller
    }
}
