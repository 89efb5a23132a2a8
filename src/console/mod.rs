//! Line-based console front-end.
//!
//! Stands in for a graphical client: it renders the board as text, reads
//! cell numbers from stdin and lets the computer answer after a short pause.

mod orchestrator;
mod players;

pub use orchestrator::Orchestrator;
pub use players::{Choice, ComputerPlayer, HumanPlayer, Player};

use crate::config::PlayConfig;
use crate::session::GameSession;
use anyhow::Result;
use serde::Serialize;
use std::time::Duration;
use strictly_tictactoe::{GameStatus, Mark, MoveAdvisor};
use tokio::io::BufReader;
use tracing::{info, instrument};

/// Win/draw counts from a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, derive_more::Display)]
#[display("X wins: {x_wins}, O wins: {o_wins}, draws: {draws}")]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress(_) => {}
        }
    }

    /// Total games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

fn session_and_advisor(config: &PlayConfig) -> (GameSession, MoveAdvisor) {
    match config.seed() {
        Some(seed) => (
            GameSession::seeded(*seed),
            MoveAdvisor::seeded(seed.wrapping_add(1)),
        ),
        None => (GameSession::new(), MoveAdvisor::new()),
    }
}

/// Plays human versus computer on stdin/stdout.
#[instrument(skip_all)]
pub async fn run_play(config: &PlayConfig) -> Result<()> {
    let (session, advisor) = session_and_advisor(config);
    info!(starting = %session.current_player(), "Starting console game");

    let human = HumanPlayer::new(
        config.human_name().clone(),
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    );
    let computer = ComputerPlayer::new(
        config.computer_name().clone(),
        advisor,
        config.computer_delay(),
    );

    println!(
        "{} play {}, {} plays {}. Cells are numbered 1-9.",
        config.human_name(),
        session.human_player(),
        config.computer_name(),
        session.computer_player(),
    );

    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(human),
        Box::new(computer),
        std::io::stdout(),
    );
    orchestrator.run().await
}

/// Plays `games` advisor-versus-advisor games and counts the results.
#[instrument(skip(config))]
pub async fn self_play(games: u32, config: &PlayConfig) -> Result<Tally> {
    let (session, advisor_o) = session_and_advisor(config);
    let advisor_x = match config.seed() {
        Some(seed) => MoveAdvisor::seeded(seed.wrapping_add(2)),
        None => MoveAdvisor::new(),
    };

    let mut orchestrator = Orchestrator::new(
        session,
        Box::new(ComputerPlayer::new("X", advisor_x, Duration::ZERO)),
        Box::new(ComputerPlayer::new("O", advisor_o, Duration::ZERO)),
        std::io::sink(),
    );

    let mut tally = Tally::default();
    for game in 0..games {
        if game > 0 {
            orchestrator.restart();
        }
        match orchestrator.play_game().await? {
            Some(status) => tally.record(status),
            None => anyhow::bail!("Computer player quit during self-play"),
        }
    }

    info!(%tally, "Self-play finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_record() {
        let mut tally = Tally::default();
        tally.record(GameStatus::Won(Mark::X));
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::InProgress(Mark::O));
        assert_eq!(
            tally,
            Tally {
                x_wins: 1,
                o_wins: 0,
                draws: 2
            }
        );
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.to_string(), "X wins: 1, O wins: 0, draws: 2");
    }

    #[tokio::test]
    async fn test_self_play_always_finishes() {
        let config = PlayConfig::default().with_overrides(Some(0), Some(11));
        let tally = self_play(25, &config).await.unwrap();
        assert_eq!(tally.total(), 25);
    }
}
