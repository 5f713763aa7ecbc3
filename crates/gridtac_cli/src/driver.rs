//! The game loop: pulls moves from each seat's source and switches
//! on the engine's outcome tags.

use crate::player::ConsolePlayer;
use crate::prompts;
use anyhow::Result;
use gridtac::{
    Controller, Game, MoveChoice, MoveSource, Outcome, RandomOpponent, Seat, SnapshotStore,
};
use tracing::{debug, warn};

fn seat_source(name: &str, controller: Controller) -> Box<dyn MoveSource> {
    match controller {
        Controller::Human => Box::new(ConsolePlayer::new(name)),
        Controller::Machine => Box::new(RandomOpponent::new(name)),
    }
}

/// Runs play sessions on the given game until the player leaves.
pub fn run(mut game: Game, store: &SnapshotStore) -> Result<()> {
    let mut first = seat_source(
        game.snapshot().first_player_name(),
        game.controller(Seat::First),
    );
    let mut second = seat_source(
        game.snapshot().second_player_name(),
        game.controller(Seat::Second),
    );

    println!("\nLet's start the game. You can press Q anytime to quit.");

    loop {
        match play_session(&mut game, first.as_mut(), second.as_mut())? {
            Outcome::Won(_) | Outcome::Draw => {
                println!("\nThe board situation is as follows:\n{}", game.board().display());
                println!("\nThe game is over!");
                let again = prompts::confirm(
                    "\nDo you want to play with the same configuration again? [Y]es / [N]o:",
                )?;
                if !again {
                    println!("\nHave a nice day!");
                    return Ok(());
                }
                game.reset();
            }
            Outcome::Interrupted => {
                println!(
                    "\nYou interrupted the game by pressing Q, and chose not to save the game.\
                     \n\nHope to see you coming back soon!"
                );
                return Ok(());
            }
            Outcome::Saved => match store.save(game.snapshot()) {
                Ok(key) => {
                    println!(
                        "\nYou interrupted the game by pressing Q, and the game is saved as {key}.\
                         \n\nHope to see you coming back soon!"
                    );
                    return Ok(());
                }
                Err(err) => {
                    // The in-memory game is still valid; keep playing.
                    warn!(%err, "save failed");
                    println!("\nCould not save the game ({err}); the game continues.");
                }
            },
            Outcome::InProgress => unreachable!("sessions only end on a terminal outcome"),
        }
    }
}

/// Plays turns until the session reaches a terminal outcome.
fn play_session<'a>(
    game: &mut Game,
    first: &'a mut dyn MoveSource,
    second: &'a mut dyn MoveSource,
) -> Result<Outcome> {
    loop {
        let turn = game.current_turn();
        let player_name = turn.name.to_string();
        let (seat, controller) = (turn.seat, turn.controller);

        let source = match seat {
            Seat::First => &mut *first,
            Seat::Second => &mut *second,
        };

        match source.next_move(game)? {
            MoveChoice::Quit => {
                let wants_save =
                    prompts::confirm("\nDo you want to save the game? [Y]es / [N]o:")?;
                return Ok(game.interrupt(wants_save));
            }
            MoveChoice::Position(position) => {
                if let Err(err) = game.apply_move(position) {
                    // The console player validates first, so this only
                    // fires for a misbehaving source; same player retries.
                    debug!(%err, position, "rejected move");
                    println!("\nNot a valid entry: {err}.");
                    continue;
                }
                if controller == Controller::Machine {
                    println!("\n{player_name}'s turn is over.");
                }
                match game.evaluate() {
                    Outcome::Won(mark) => {
                        println!("\n{player_name} wins!");
                        return Ok(Outcome::Won(mark));
                    }
                    Outcome::Draw => {
                        println!("\nIt's a draw!");
                        return Ok(Outcome::Draw);
                    }
                    _ => {}
                }
            }
        }
    }
}
