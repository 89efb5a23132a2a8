//! Tests for turn sequencing and terminal states.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use strictly_tictactoe::{Game, GameStatus, Player, Position};

/// Plays uniformly random legal moves until the game ends, checking the
/// turn-alternation and terminal-state properties after every move.
fn random_playout(seed: u64) -> Game {
    let mut game = Game::seeded(seed);
    let mut rng = StdRng::seed_from_u64(seed ^ 0xdead_beef);

    while !game.is_game_over() {
        let mover = game.current_player();
        let pos = *game.available_moves().choose(&mut rng).unwrap();
        assert!(game.make_move(pos));

        let (x, o) = game.board().mark_counts();
        assert!(x.abs_diff(o) <= 1, "marks drifted apart: x={x} o={o}");

        if game.board().check_win(mover) {
            assert!(game.is_game_over());
            assert_eq!(game.winner(), Some(mover));
        } else if game.board().is_full() {
            assert!(game.is_game_over());
            assert_eq!(game.winner(), None);
        } else {
            assert_eq!(game.current_player(), mover.opponent());
        }
    }
    game
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..200 {
        let game = random_playout(seed);
        match game.status() {
            GameStatus::Won(p) => {
                assert!(game.board().check_win(p));
                assert!(!game.board().check_win(p.opponent()));
            }
            GameStatus::Draw => assert!(game.board().is_draw()),
            GameStatus::InProgress(_) => panic!("playout ended in progress"),
        }
    }
}

#[test]
fn test_rejections_after_game_over_are_idempotent() {
    let mut game = random_playout(42);
    let board = *game.board();
    let status = game.status();
    let player = game.current_player();

    for pos in Position::ALL {
        assert!(!game.make_move(pos));
    }
    assert_eq!(*game.board(), board);
    assert_eq!(game.status(), status);
    assert_eq!(game.current_player(), player);
}

#[test]
fn test_reset_game() {
    let mut game = random_playout(7);
    game.reset_game();
    assert_eq!(game.available_moves().len(), 9);
    assert!(!game.is_game_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.board_state(), [None; 9]);
}

#[test]
fn test_both_players_start_sometimes() {
    let mut game = Game::seeded(2024);
    let mut starters = Vec::new();
    for _ in 0..64 {
        starters.push(game.current_player());
        game.reset_game();
    }
    assert!(starters.contains(&Player::X));
    assert!(starters.contains(&Player::O));
}
