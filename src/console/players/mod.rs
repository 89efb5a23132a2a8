//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use strictly_tictactoe::GameView;

/// What a player decided to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Mark the cell at this raw index (0-8).
    Play(usize),
    /// Leave the game.
    Quit,
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// The index is not validated here; the session rejects occupied cells.
    async fn choose_move(&mut self, view: &GameView) -> Result<Choice>;

    /// Asks whether to start another game once one has finished.
    async fn rematch(&mut self) -> Result<bool> {
        Ok(false)
    }

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
