//! Strictly Tic-Tac-Toe - pure rule engine and heuristic computer opponent
//!
//! # Architecture
//!
//! - **Types**: players, squares and typed board positions
//! - **Board**: the 3x3 grid, placement and state snapshots
//! - **Rules**: win lines and draw detection shared by board, game and advisor
//! - **Game**: turn sequencing and terminal-state tracking
//! - **Advisor**: win, block, center, corner, side move selection
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, MoveAdvisor, Position};
//!
//! let mut game = Game::seeded(3);
//! let mut advisor = MoveAdvisor::seeded(3);
//!
//! assert_eq!(advisor.best_move(&game.view()), Some(Position::Center));
//! assert!(game.make_move(Position::Center));
//! assert!(!game.make_move(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod advisor;
mod board;
mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use advisor::{MoveAdvisor, Reason};
pub use board::Board;
pub use error::BoardError;
pub use game::{Game, GameStatus, GameView};
pub use position::Position;
pub use types::{Player, Square};

/// Alias for clarity in session management.
pub type Mark = Player;
