//! N-by-N tic-tac-toe game engine.
//!
//! Generalizes three-in-a-row to any square board of size 3 or more,
//! with one or two human seats (the other bound to a uniform-random
//! automated opponent), mid-game interruption, and save/resume through
//! a durable snapshot.
//!
//! # Architecture
//!
//! - **Board**: grid derived as a pure function of the move list
//! - **Rules**: win and draw detection generalized to N
//! - **Game**: turn sequencing, legality, and outcome classification
//! - **Snapshot**: the resumable state and its on-disk store
//!
//! # Example
//!
//! ```
//! use gridtac::{Game, GameConfig, Outcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GameConfig::from_choices(3, 2, None)?;
//! let mut game = Game::new(&config);
//!
//! for position in [1, 5, 2, 4, 3] {
//!     game.apply_move(position)?;
//! }
//! assert_eq!(game.evaluate(), Outcome::Won(gridtac::Mark::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod game;
mod players;
mod rules;
mod snapshot;
mod types;

pub use board::Board;
pub use config::GameConfig;
pub use error::{ConfigError, MoveError, SnapshotError};
pub use game::{Game, Outcome, Turn};
pub use players::{MoveChoice, MoveSource, RandomOpponent};
pub use snapshot::{GameSnapshot, KEY_PREFIX, SnapshotStore};
pub use types::{Controller, Mark, Seat, Square};
