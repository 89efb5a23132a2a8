//! Computer player backed by the move advisor.

use super::{Choice, Player};
use anyhow::Result;
use rand::Rng;
use std::time::Duration;
use strictly_tictactoe::{GameView, MoveAdvisor};
use tracing::debug;

/// Computer player that asks the [`MoveAdvisor`] for each move.
pub struct ComputerPlayer<R> {
    name: String,
    advisor: MoveAdvisor<R>,
    delay: Duration,
}

impl<R: Rng + Send> ComputerPlayer<R> {
    /// Creates a computer player that pauses for `delay` before each move.
    pub fn new(name: impl Into<String>, advisor: MoveAdvisor<R>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            advisor,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl<R: Rng + Send> Player for ComputerPlayer<R> {
    async fn choose_move(&mut self, view: &GameView) -> Result<Choice> {
        debug!(ai = %self.name, "AI making move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.advisor.best_move(view) {
            Some(pos) => {
                debug!(ai = %self.name, position = %pos, "AI chose position");
                Ok(Choice::Play(pos.to_index()))
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
