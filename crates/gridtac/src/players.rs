//! Move sources: the seam between the engine and whoever supplies
//! moves for a seat.

use crate::game::Game;
use anyhow::Result;
use tracing::debug;

/// A move as resolved by a seat's controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    /// A 1-based board position to play.
    Position(usize),
    /// A request to end the session instead of moving.
    Quit,
}

/// Supplies moves for one seat.
///
/// The interaction layer implements this for human seats; the engine
/// ships [`RandomOpponent`] for the machine seat. The engine only
/// consumes already-resolved values, so implementations may block
/// however they like.
pub trait MoveSource {
    /// Produces the next move for the seat whose turn it is.
    fn next_move(&mut self, game: &Game) -> Result<MoveChoice>;

    /// Display name for this source.
    fn name(&self) -> &str;
}

/// The automated opponent: uniform-random over playable positions.
///
/// Deliberately no stronger than the original's `random.choice`; it
/// never quits and never looks ahead.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    name: String,
}

impl RandomOpponent {
    /// Creates a new automated opponent.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSource for RandomOpponent {
    fn next_move(&mut self, game: &Game) -> Result<MoveChoice> {
        let position = game
            .machine_move()
            .ok_or_else(|| anyhow::anyhow!("no playable positions left"))?;
        debug!(opponent = %self.name, position, "automated move chosen");
        Ok(MoveChoice::Position(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_random_opponent_picks_a_playable_position() {
        let config = GameConfig::from_choices(3, 1, Some(1)).unwrap();
        let mut game = Game::new(&config);
        game.apply_move(5).unwrap();

        let mut opponent = RandomOpponent::new(GameConfig::MACHINE_NAME);
        for _ in 0..20 {
            match opponent.next_move(&game).unwrap() {
                MoveChoice::Position(pos) => {
                    assert_ne!(pos, 5);
                    assert!((1..=9).contains(&pos));
                }
                MoveChoice::Quit => panic!("machine never quits"),
            }
        }
    }

    #[test]
    fn test_random_opponent_errors_on_full_board() {
        let config = GameConfig::from_choices(3, 1, Some(1)).unwrap();
        let mut game = Game::new(&config);
        for pos in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
            game.apply_move(pos).unwrap();
        }

        let mut opponent = RandomOpponent::new(GameConfig::MACHINE_NAME);
        assert!(opponent.next_move(&game).is_err());
    }
}
