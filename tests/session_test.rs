//! Tests for the human-versus-computer session.

use strictly_tictactoe_console::{
    BoardError, GameSession, GameStatus, MoveAdvisor, Player, PlayerType,
};

fn computer_first() -> GameSession {
    (0..)
        .map(GameSession::seeded)
        .find(|s| s.current_player() == Player::O)
        .unwrap()
}

#[test]
fn test_fresh_session() {
    let session = GameSession::seeded(1);
    assert_eq!(session.available_moves(), (0..9).collect::<Vec<_>>());
    assert!(!session.is_game_over());
    assert_eq!(session.winner(), None);
    assert_eq!(session.board_state(), [None; 9]);
}

#[test]
fn test_index_errors_and_rejections() {
    let mut session = GameSession::seeded(1);
    assert_eq!(session.make_move(42), Err(BoardError::IndexOutOfBounds(42)));

    assert_eq!(session.make_move(3), Ok(true));
    let state = session.board_state();
    let player = session.current_player();
    assert_eq!(session.make_move(3), Ok(false));
    assert_eq!(session.board_state(), state);
    assert_eq!(session.current_player(), player);
}

#[test]
fn test_computer_opens_when_it_starts() {
    let mut session = computer_first();
    assert_eq!(
        session.player_type(session.current_player()),
        PlayerType::Computer
    );

    let mut advisor = MoveAdvisor::seeded(0);
    let pos = session.play_computer_turn(&mut advisor).unwrap();
    assert_eq!(pos.to_index(), 4);
    assert_eq!(session.board_state()[4], Some(Player::O));
    assert!(session.is_human_turn());
}

#[test]
fn test_game_runs_to_completion() {
    let mut session = computer_first();
    let mut advisor = MoveAdvisor::seeded(3);

    while !session.is_game_over() {
        if session.is_human_turn() {
            let cell = session.available_moves()[0];
            assert_eq!(session.make_move(cell), Ok(true));
        } else {
            assert!(session.play_computer_turn(&mut advisor).is_some());
        }
    }

    // The advisor never misses a win handed to it.
    assert!(matches!(
        session.status(),
        GameStatus::Won(Player::O) | GameStatus::Draw
    ));
    assert!(!session.is_human_turn());
    assert!(!session.is_computer_turn());
    assert_eq!(session.play_computer_turn(&mut advisor), None);
}

#[test]
fn test_reset_starts_over() {
    let mut session = computer_first();
    let mut advisor = MoveAdvisor::seeded(0);
    session.play_computer_turn(&mut advisor);
    session.reset_game();
    assert_eq!(session.available_moves().len(), 9);
    assert!(!session.is_game_over());
}
