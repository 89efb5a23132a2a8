//! Turn sequencing and terminal-state tracking.

use crate::{Board, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing; the player is to move.
    #[display("Player {}'s turn", _0)]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Player {} wins!", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("It's a Draw!")]
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Read-only snapshot of a game handed to move-selection code.
///
/// Holds a copy of the board, so nothing done with the view reaches the
/// live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    board: Board,
    to_move: Player,
}

impl GameView {
    /// Creates a view of `board` with `to_move` acting.
    pub fn new(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// Returns the board copy.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is being chosen.
    pub fn to_move(&self) -> Player {
        self.to_move
    }
}

/// Tic-tac-toe game engine.
///
/// `R` is the random source used to pick the starting player on
/// construction and on every reset.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
    rng: R,
}

impl Game<StdRng> {
    /// Creates a new game seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a new game with a reproducible starting-player sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Game<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new game drawing the starting player from `rng`.
    #[instrument(skip(rng))]
    pub fn with_rng(mut rng: R) -> Self {
        let current_player = Player::random(&mut rng);
        info!(starting = %current_player, "New game");
        Self {
            board: Board::new(),
            current_player,
            game_over: false,
            winner: None,
            rng,
        }
    }

    /// Starts over with a fresh board and a newly drawn starting player.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.current_player = Player::random(&mut self.rng);
        self.game_over = false;
        self.winner = None;
        info!(starting = %self.current_player, "Game reset");
    }

    /// Makes a move for the current player at the given position.
    ///
    /// Returns `false` without touching any state if the game is over or
    /// the square is taken. Otherwise places the mark, records a win or a
    /// draw, or hands the turn to the opponent, and returns `true`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, pos: Position) -> bool {
        if self.game_over {
            debug!("Move rejected: game is already over");
            return false;
        }

        let player = self.current_player;
        if self.board.place_mark(pos, player).is_err() {
            debug!("Move rejected: square is already occupied");
            return false;
        }

        if self.board.check_win(player) {
            self.winner = Some(player);
            self.game_over = true;
            info!(winner = %player, "Game won");
        } else if self.board.is_full() {
            self.game_over = true;
            info!("Game drawn");
        } else {
            self.current_player = player.opponent();
        }

        true
    }
}

impl<R> Game<R> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the board contents.
    pub fn board_state(&self) -> [Option<Player>; Board::SIZE] {
        self.board.state()
    }

    /// Returns the player whose turn it is (or who moved last, once over).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Checks if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Empty positions in ascending order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.board.available_moves()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner) {
            (false, _) => GameStatus::InProgress(self.current_player),
            (true, Some(winner)) => GameStatus::Won(winner),
            (true, None) => GameStatus::Draw,
        }
    }

    /// Snapshot for the move advisor.
    pub fn view(&self) -> GameView {
        GameView::new(self.board, self.current_player)
    }
}
