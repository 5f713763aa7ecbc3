//! Line-oriented console prompts.
//!
//! Every prompt loops until it has a well-formed answer; no entry
//! typed at the console can escape as an error.

use anyhow::Result;
use std::io::{self, Write};

/// Entry typed at a move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEntry {
    /// A 1-based position.
    Position(usize),
    /// The quit key.
    Quit,
}

/// Prints the prompt and reads one trimmed line.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}\t");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Asks for a board size, offering a default on an empty entry.
pub fn choose_board_size(default: usize) -> Result<usize> {
    println!("\nChoose the size of the Tic Tac Toe board.");
    println!("\nPress <ENTER> or <RETURN> to use the default board of size {default}.");
    loop {
        let entry = read_line("\nEnter Board Size:")?;
        if entry.is_empty() {
            println!("\nYou have selected to play with the default board size.");
            return Ok(default);
        }
        match entry.parse::<usize>() {
            Ok(size) if size >= 3 => {
                println!("\nYou have selected a board of size {size}.");
                return Ok(size);
            }
            Ok(_) => println!("\nNot a valid entry: it must be a positive integer >= 3."),
            Err(err) => println!("\nNot a valid entry: {err}"),
        }
    }
}

/// Asks whether one or two humans are playing.
pub fn choose_human_players() -> Result<u8> {
    println!("\nChoose whether you will play against a dumb machine, or with one of your friends.");
    loop {
        let entry = read_line("\nEnter Number of Human Players:")?;
        match entry.parse::<u8>() {
            Ok(count @ (1 | 2)) => {
                if count == 1 {
                    println!("\nYou selected to play alone.");
                } else {
                    println!("\nYou selected to play with a friend.");
                }
                return Ok(count);
            }
            Ok(_) => println!("\nNot a valid entry: it has to be 1 or 2."),
            Err(err) => println!("\nNot a valid entry: {err}"),
        }
    }
}

/// Asks whether the lone human plays first or second.
pub fn choose_turn_order() -> Result<u8> {
    println!("\nChoose whether you will play first or second.");
    loop {
        let entry = read_line("\nEnter your game order:")?;
        match entry.parse::<u8>() {
            Ok(order @ (1 | 2)) => {
                if order == 1 {
                    println!("\nYou selected to play first.");
                } else {
                    println!("\nYou selected to play second.");
                }
                return Ok(order);
            }
            Ok(_) => println!("\nNot a valid entry: it should be either 1, or 2."),
            Err(err) => println!("\nNot a valid entry: {err}"),
        }
    }
}

/// Asks a yes/no question until one of the two is given.
pub fn confirm(prompt: &str) -> Result<bool> {
    loop {
        let entry = read_line(prompt)?;
        match parse_yes_no(&entry) {
            Some(answer) => return Ok(answer),
            None => println!("\nNot a valid entry: it has to be Y or N."),
        }
    }
}

/// Asks Confirm/Undo; `true` confirms the pending move.
pub fn confirm_or_undo() -> Result<bool> {
    loop {
        let entry = read_line("\n[C]onfirm / [U]ndo?:")?;
        match parse_confirm_undo(&entry) {
            Some(answer) => return Ok(answer),
            None => println!("\nNot a valid entry: it has to be C or U."),
        }
    }
}

pub fn parse_yes_no(entry: &str) -> Option<bool> {
    match entry.trim().to_ascii_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

pub fn parse_confirm_undo(entry: &str) -> Option<bool> {
    match entry.trim().to_ascii_uppercase().as_str() {
        "C" => Some(true),
        "U" => Some(false),
        _ => None,
    }
}

/// Parses a move-prompt entry: `Q` quits, digits name a position.
pub fn parse_move_entry(entry: &str) -> Option<MoveEntry> {
    let entry = entry.trim();
    if entry.eq_ignore_ascii_case("Q") {
        return Some(MoveEntry::Quit);
    }
    entry.parse::<usize>().ok().map(MoveEntry::Position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" n "), Some(false));
        assert_eq!(parse_yes_no("yes"), None);
        assert_eq!(parse_yes_no(""), None);
    }

    #[test]
    fn test_parse_confirm_undo() {
        assert_eq!(parse_confirm_undo("c"), Some(true));
        assert_eq!(parse_confirm_undo("U"), Some(false));
        assert_eq!(parse_confirm_undo("x"), None);
    }

    #[test]
    fn test_parse_move_entry() {
        assert_eq!(parse_move_entry("7"), Some(MoveEntry::Position(7)));
        assert_eq!(parse_move_entry(" 12 "), Some(MoveEntry::Position(12)));
        assert_eq!(parse_move_entry("q"), Some(MoveEntry::Quit));
        assert_eq!(parse_move_entry("Q"), Some(MoveEntry::Quit));
        assert_eq!(parse_move_entry("seven"), None);
        assert_eq!(parse_move_entry("-1"), None);
    }
}
