//! Tests for the game state machine across full play sessions.

use gridtac::{Game, GameConfig, Mark, MoveError, Outcome, Seat};

fn fresh_game(board_size: usize) -> Game {
    let config = GameConfig::from_choices(board_size, 2, None).unwrap();
    Game::new(&config)
}

fn play(game: &mut Game, moves: &[usize]) {
    for &position in moves {
        game.apply_move(position).unwrap();
    }
}

#[test]
fn test_top_row_win_lands_exactly_on_the_completing_move() {
    let mut game = fresh_game(3);

    // X takes 1, 2, 3; the win must appear at the fifth move, not before.
    for &(position, expected) in &[
        (1, Outcome::InProgress),
        (5, Outcome::InProgress),
        (2, Outcome::InProgress),
        (4, Outcome::InProgress),
        (3, Outcome::Won(Mark::X)),
    ] {
        game.apply_move(position).unwrap();
        assert_eq!(game.evaluate(), expected, "after move at {position}");
    }
}

#[test]
fn test_draw_when_board_fills_without_a_line() {
    let mut game = fresh_game(3);
    play(&mut game, &[1, 2, 3, 5, 4, 6, 8, 7]);
    assert_eq!(game.evaluate(), Outcome::InProgress);

    game.apply_move(9).unwrap();
    assert_eq!(game.evaluate(), Outcome::Draw);
    assert!(game.snapshot().playable_positions().is_empty());
}

#[test]
fn test_column_completion_is_a_win_not_a_draw() {
    // This sequence fills the first column (1, 4, 7) for X at the
    // seventh move, so the session ends in a win even though the
    // sequence could continue to fill the board.
    let mut game = fresh_game(3);
    play(&mut game, &[1, 2, 3, 5, 4, 6, 7]);
    assert_eq!(game.evaluate(), Outcome::Won(Mark::X));
}

#[test]
fn test_main_diagonal_win_on_4x4() {
    let mut game = fresh_game(4);
    play(&mut game, &[1, 2, 6, 3, 11, 4]);
    assert_eq!(game.evaluate(), Outcome::InProgress);

    game.apply_move(16).unwrap();
    assert_eq!(game.evaluate(), Outcome::Won(Mark::X));
}

#[test]
fn test_second_mark_can_win() {
    let mut game = fresh_game(3);
    play(&mut game, &[1, 4, 2, 5, 9, 6]);
    assert_eq!(game.evaluate(), Outcome::Won(Mark::O));
}

#[test]
fn test_illegal_move_leaves_move_list_unchanged() {
    let mut game = fresh_game(3);
    play(&mut game, &[5, 1]);

    let err = game.apply_move(5).unwrap_err();
    assert_eq!(err, MoveError::Occupied { position: 5 });
    assert_eq!(game.snapshot().played_moves(), &[5, 1]);

    let err = game.apply_move(10).unwrap_err();
    assert_eq!(err, MoveError::OutOfRange { position: 10, cells: 9 });
    assert_eq!(game.snapshot().played_moves(), &[5, 1]);
}

#[test]
fn test_turns_alternate_by_move_count() {
    let mut game = fresh_game(3);

    let turn = game.current_turn();
    assert_eq!((turn.seat, turn.mark), (Seat::First, Mark::X));
    assert_eq!(turn.name, "User 1");

    game.apply_move(5).unwrap();
    let turn = game.current_turn();
    assert_eq!((turn.seat, turn.mark), (Seat::Second, Mark::O));
    assert_eq!(turn.name, "User 2");

    game.apply_move(1).unwrap();
    assert_eq!(game.current_turn().seat, Seat::First);
}

#[test]
fn test_evaluate_is_idempotent() {
    let mut game = fresh_game(3);
    play(&mut game, &[1, 5, 2, 4, 3]);
    assert_eq!(game.evaluate(), game.evaluate());

    let mut game = fresh_game(3);
    play(&mut game, &[1, 2]);
    assert_eq!(game.evaluate(), game.evaluate());
}

#[test]
fn test_evaluate_on_untouched_game_is_in_progress() {
    assert_eq!(fresh_game(3).evaluate(), Outcome::InProgress);
}

#[test]
fn test_playable_positions_empty_exactly_at_full_length() {
    for size in [3, 4, 5] {
        let cells = size * size;
        let mut game = fresh_game(size);
        for position in 1..=cells {
            assert!(!game.snapshot().playable_positions().is_empty());
            game.apply_move(position).unwrap();
        }
        assert!(game.snapshot().playable_positions().is_empty());
        assert_eq!(game.snapshot().played_moves().len(), cells);
    }
}

#[test]
fn test_interrupt_does_not_consult_the_board() {
    let mut game = fresh_game(3);
    // A won position: interrupt still reports the quit outcome.
    play(&mut game, &[1, 5, 2, 4, 3]);
    assert_eq!(game.interrupt(false), Outcome::Interrupted);
    assert_eq!(game.interrupt(true), Outcome::Saved);
}

#[test]
fn test_reset_replays_with_same_configuration() {
    let config = GameConfig::from_choices(4, 1, Some(2)).unwrap();
    let mut game = Game::new(&config);
    play(&mut game, &[1, 2, 3]);

    game.reset();
    assert!(game.snapshot().played_moves().is_empty());
    assert_eq!(game.snapshot().board_size(), 4);
    assert_eq!(game.snapshot().first_player_name(), GameConfig::MACHINE_NAME);
    assert_eq!(game.current_turn().seat, Seat::First);
}

#[test]
fn test_machine_move_is_playable_and_absent_on_full_board() {
    let config = GameConfig::from_choices(3, 1, Some(1)).unwrap();
    let mut game = Game::new(&config);
    play(&mut game, &[1, 2, 3, 5, 4, 6, 8, 7]);

    for _ in 0..10 {
        assert_eq!(game.machine_move(), Some(9));
    }

    game.apply_move(9).unwrap();
    assert_eq!(game.machine_move(), None);
}
