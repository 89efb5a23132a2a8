//! Game orchestration between players.

use super::players::{Choice, Player};
use crate::session::{GameSession, PlayerType};
use anyhow::Result;
use std::io::Write;
use strictly_tictactoe::rules::WinLine;
use strictly_tictactoe::{GameStatus, Mark};
use tracing::{debug, info, instrument, warn};

/// Drives one session, asking each seat's player for moves in turn.
///
/// The orchestrator owns the session, so every move goes through this one
/// task and moves can never interleave.
pub struct Orchestrator<W> {
    session: GameSession,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        out: W,
    ) -> Self {
        Self {
            session,
            human,
            computer,
            out,
        }
    }

    /// Plays games until the human declines a rematch or quits.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");

        while self.play_game().await?.is_some() {
            if !self.human.rematch().await? {
                break;
            }
            self.restart();
        }

        writeln!(self.out, "Thanks for playing!")?;
        Ok(())
    }

    /// Plays the current game to the end.
    ///
    /// Returns the final status, or `None` if a player quit.
    #[instrument(skip(self))]
    pub async fn play_game(&mut self) -> Result<Option<GameStatus>> {
        loop {
            writeln!(self.out, "\n{}\n", self.session.board())?;
            writeln!(self.out, "{}", self.session.status())?;

            if self.session.is_game_over() {
                let status = self.session.status();
                if let Some(line) = self.session.board().winning_line() {
                    writeln!(self.out, "Winning line: {}", cell_numbers(line))?;
                }
                info!(%status, "Game over");
                return Ok(Some(status));
            }

            let mark = self.session.current_player();
            let player = match self.session.player_type(mark) {
                PlayerType::Human => &mut self.human,
                PlayerType::Computer => &mut self.computer,
            };
            let player_name = player.name().to_string();

            debug!(player = %player_name, "Waiting for move");
            let view = self.session.view();
            let choice = player.choose_move(&view).await?;
            match choice {
                Choice::Quit => {
                    info!(player = %player_name, "Player left the game");
                    return Ok(None);
                }
                Choice::Play(index) => self.apply(&player_name, mark, index)?,
            }
        }
    }

    /// Starts a fresh game in the same session.
    pub fn restart(&mut self) {
        self.session.reset_game();
    }

    fn apply(&mut self, player_name: &str, mark: Mark, index: usize) -> Result<()> {
        if self.session.make_move(index)? {
            debug!(board = ?self.session.board_state(), "Board after move");
            writeln!(self.out, "{player_name} ({mark}) took cell {}", index + 1)?;
        } else {
            warn!(player = %player_name, index, "Move rejected");
            writeln!(self.out, "Cell {} is already taken.", index + 1)?;
        }
        Ok(())
    }
}

/// Renders a line as 1-based cell numbers, e.g. `1-5-9`.
fn cell_numbers(line: WinLine) -> String {
    line.map(|pos| (pos.to_index() + 1).to_string()).join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ComputerPlayer, HumanPlayer};
    use std::time::Duration;
    use strictly_tictactoe::MoveAdvisor;

    fn orchestrator(script: &'static [u8], out: Vec<u8>) -> Orchestrator<Vec<u8>> {
        Orchestrator::new(
            GameSession::seeded(5),
            Box::new(HumanPlayer::new("me", script, std::io::sink())),
            Box::new(ComputerPlayer::new(
                "cpu",
                MoveAdvisor::seeded(5),
                Duration::ZERO,
            )),
            out,
        )
    }

    #[tokio::test]
    async fn test_quit_ends_the_session() {
        let mut orch = orchestrator(b"q\n", Vec::new());
        orch.run().await.unwrap();

        let text = String::from_utf8(orch.out).unwrap();
        assert!(text.ends_with("Thanks for playing!\n"));
        assert!(!orch.session.is_game_over());
    }

    #[tokio::test]
    async fn test_game_over_shows_winning_line() {
        // Whoever starts holds 1 and 2 and is to move with 3 open.
        let mut session = GameSession::seeded(9);
        for index in [0, 4, 1, 8] {
            assert_eq!(session.make_move(index), Ok(true));
        }
        let winner = session.current_player();

        let mut orch = Orchestrator::new(
            session,
            Box::new(HumanPlayer::new("me", &b"3\n"[..], std::io::sink())),
            Box::new(ComputerPlayer::new(
                "cpu",
                MoveAdvisor::seeded(9),
                Duration::ZERO,
            )),
            Vec::new(),
        );
        assert_eq!(
            orch.play_game().await.unwrap(),
            Some(GameStatus::Won(winner))
        );

        let text = String::from_utf8(orch.out).unwrap();
        assert!(text.contains("took cell 3"));
        assert!(text.contains("Winning line: 1-2-3"));
    }

    #[tokio::test]
    async fn test_taken_cell_is_reported() {
        // Whoever starts, the computer holds the center after its first move.
        let mut orch = orchestrator(b"5\n5\n5\n5\nq\n", Vec::new());
        assert_eq!(orch.play_game().await.unwrap(), None);

        let text = String::from_utf8(orch.out).unwrap();
        assert!(text.contains("Cell 5 is already taken."));
    }
}
