//! Console shell for the gridtac engine.
//!
//! Welcomes the player, offers any saved games for resumption,
//! otherwise walks through fresh configuration, then hands the game
//! to the driver loop.

mod driver;
mod player;
mod prompts;

use anyhow::Result;
use clap::Parser;
use gridtac::{Game, GameConfig, GameSnapshot, SnapshotStore};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// N-by-N tic-tac-toe in the console.
#[derive(Debug, Parser)]
#[command(name = "gridtac", version, about)]
struct Cli {
    /// Directory where saved games are written and discovered.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = SnapshotStore::new(&cli.data_dir);

    println!("\nWelcome to the game of Tic Tac Toe!");

    let game = match select_saved_game(&store)? {
        Some(snapshot) => Game::resume(snapshot)?,
        None => {
            println!("\nStart with configuring the game as per your preferences.");
            Game::new(&configure_game()?)
        }
    };

    driver::run(game, &store)
}

/// Offers the saved games for resumption; `None` starts fresh.
fn select_saved_game(store: &SnapshotStore) -> Result<Option<GameSnapshot>> {
    let keys = store.list();
    if keys.is_empty() {
        return Ok(None);
    }

    println!("\nThe following saved games are available:");
    for (index, key) in keys.iter().enumerate() {
        println!("{}. {}", index + 1, key);
    }

    loop {
        let entry = prompts::read_line(
            "\nEnter the corresponding index to load a particular game, else enter 0:",
        )?;
        match entry.parse::<usize>() {
            Ok(0) => return Ok(None),
            Ok(index) if index <= keys.len() => {
                let key = &keys[index - 1];
                match store.load(key) {
                    Ok(snapshot) => return Ok(Some(snapshot)),
                    Err(err) => println!("\nCould not load {key}: {err}."),
                }
            }
            _ => println!("\nNot a valid entry: either choose one of the files, or zero."),
        }
    }
}

/// Collects board size, player count, and turn order from the console.
fn configure_game() -> Result<GameConfig> {
    let board_size = prompts::choose_board_size(GameConfig::DEFAULT_BOARD_SIZE)?;
    let human_players = prompts::choose_human_players()?;
    let turn_order = if human_players == 1 {
        Some(prompts::choose_turn_order()?)
    } else {
        None
    };
    Ok(GameConfig::from_choices(board_size, human_players, turn_order)?)
}
