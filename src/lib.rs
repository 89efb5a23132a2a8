//! Strictly Tic-Tac-Toe console - session façade and terminal front-end
//!
//! # Architecture
//!
//! - **Session**: human-versus-computer façade a user interface drives
//! - **Console**: line-based front-end used by the binary
//! - **Config**: TOML/CLI settings for the front-end
//!
//! The rules, turn sequencing and move advisor live in the
//! `strictly_tictactoe` crate and are re-exported here.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe_console::{GameSession, MoveAdvisor};
//!
//! let mut session = GameSession::seeded(7);
//! let mut advisor = MoveAdvisor::seeded(7);
//!
//! if session.is_human_turn() {
//!     assert_eq!(session.make_move(0), Ok(true));
//! }
//! assert!(session.play_computer_turn(&mut advisor).is_some());
//! assert!(session.is_human_turn());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod session;

pub mod console;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Session management
pub use session::{GameSession, PlayerType};

// Crate-level exports - Game types (tic-tac-toe)
pub use strictly_tictactoe::{
    Board, BoardError, Game, GameStatus, GameView, Mark, MoveAdvisor, Player, Position, Reason,
    Square, rules,
};
