//! Game session: the entry point a user interface drives.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{
    Board, BoardError, Game, GameStatus, GameView, Mark, MoveAdvisor, Position,
};
use tracing::{debug, info, instrument, warn};

/// Type of player controlling a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// Moves come from the user.
    Human,
    /// Moves come from the [`MoveAdvisor`].
    Computer,
}

/// A single human-versus-computer game.
///
/// The human always plays X and the computer always plays O. Moves are
/// addressed by raw board index (0-8) as a UI would report them.
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    game: Game<R>,
}

impl GameSession<StdRng> {
    /// Creates a session with an entropy-seeded starting player.
    pub fn new() -> Self {
        Self::from_game(Game::new())
    }

    /// Creates a session with a reproducible starting-player sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::from_game(Game::seeded(seed))
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> GameSession<R> {
    /// Wraps an existing game.
    pub fn from_game(game: Game<R>) -> Self {
        Self { game }
    }

    /// The mark the user plays.
    pub fn human_player(&self) -> Mark {
        Mark::X
    }

    /// The mark the advisor plays.
    pub fn computer_player(&self) -> Mark {
        Mark::O
    }

    /// Who controls `mark`.
    pub fn player_type(&self, mark: Mark) -> PlayerType {
        if mark == self.human_player() {
            PlayerType::Human
        } else {
            PlayerType::Computer
        }
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the board contents.
    pub fn board_state(&self) -> [Option<Mark>; Board::SIZE] {
        self.game.board_state()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.game.current_player()
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.game.winner()
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.game
            .available_moves()
            .into_iter()
            .map(Position::to_index)
            .collect()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Snapshot for the advisor.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Checks if the game is waiting on the user.
    pub fn is_human_turn(&self) -> bool {
        !self.is_game_over() && self.current_player() == self.human_player()
    }

    /// Checks if the game is waiting on the computer.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_game_over() && self.current_player() == self.computer_player()
    }
}

impl<R: Rng> GameSession<R> {
    /// Starts a fresh game.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.game.reset_game();
    }

    /// Attempts a move for the current player at `index`.
    ///
    /// Returns `Ok(false)` when the move is rejected (occupied square or
    /// game over).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::IndexOutOfBounds` for indices outside 0-8.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize) -> Result<bool, BoardError> {
        let pos = Position::try_from(index).inspect_err(|e| warn!(error = %e, "Bad move index"))?;
        Ok(self.game.make_move(pos))
    }

    /// Lets the advisor play the computer's turn.
    ///
    /// Does nothing and returns `None` unless it is the computer's turn.
    /// Returns the position played otherwise.
    #[instrument(skip(self, advisor))]
    pub fn play_computer_turn<A: Rng>(&mut self, advisor: &mut MoveAdvisor<A>) -> Option<Position> {
        if !self.is_computer_turn() {
            debug!("Not the computer's turn");
            return None;
        }

        let pos = advisor.best_move(&self.view())?;
        if self.game.make_move(pos) {
            info!(%pos, "Computer moved");
            Some(pos)
        } else {
            warn!(%pos, "Advisor chose a rejected move");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Player;

    /// Seed whose first draw makes the human start.
    fn human_first() -> GameSession {
        (0..)
            .map(GameSession::seeded)
            .find(|s| s.current_player() == Player::X)
            .unwrap()
    }

    #[test]
    fn test_fixed_seats() {
        let session = GameSession::seeded(0);
        assert_eq!(session.human_player(), Player::X);
        assert_eq!(session.computer_player(), Player::O);
        assert_eq!(session.player_type(Player::X), PlayerType::Human);
        assert_eq!(session.player_type(Player::O), PlayerType::Computer);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let mut session = GameSession::seeded(0);
        assert_eq!(session.make_move(9), Err(BoardError::IndexOutOfBounds(9)));
        assert_eq!(session.available_moves().len(), 9);
    }

    #[test]
    fn test_computer_waits_for_its_turn() {
        let mut session = human_first();
        let mut advisor = MoveAdvisor::seeded(0);
        assert!(session.is_human_turn());
        assert_eq!(session.play_computer_turn(&mut advisor), None);
        assert_eq!(session.available_moves().len(), 9);

        assert_eq!(session.make_move(0), Ok(true));
        assert!(session.is_computer_turn());
        assert_eq!(
            session.play_computer_turn(&mut advisor),
            Some(Position::Center)
        );
        assert!(session.is_human_turn());
    }
}
