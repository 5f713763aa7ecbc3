//! Console-backed move source for human seats.

use crate::prompts::{self, MoveEntry};
use anyhow::Result;
use gridtac::{Game, MoveChoice, MoveSource};

/// Human seat fed from stdin.
///
/// Handles the whole per-turn conversation: render the board, read a
/// position or the quit key, and run the Confirm/Undo step. An undo
/// simply re-prompts the same player; repeated undos stay in this
/// loop and never grow the stack.
pub struct ConsolePlayer {
    name: String,
}

impl ConsolePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSource for ConsolePlayer {
    fn next_move(&mut self, game: &Game) -> Result<MoveChoice> {
        println!("\n{}, it's your turn now.", self.name);
        println!("\nThe board situation is as follows:\n{}", game.board().display());

        let board = game.board();
        loop {
            let entry = prompts::read_line("\nEnter a position:")?;
            match prompts::parse_move_entry(&entry) {
                Some(MoveEntry::Quit) => {
                    println!("\nSorry to see you quit!");
                    return Ok(MoveChoice::Quit);
                }
                Some(MoveEntry::Position(position)) => {
                    if !board.is_playable(position) {
                        println!("\nNot a valid entry: this position is not available.");
                        continue;
                    }
                    println!(
                        "\n{}, your turn is over, and you chose {}.",
                        self.name, position
                    );
                    if prompts::confirm_or_undo()? {
                        return Ok(MoveChoice::Position(position));
                    }
                    // Undo: fall through and prompt again.
                }
                None => println!("\nNot a valid entry: enter a position number, or Q to quit."),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
