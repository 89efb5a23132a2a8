//! Human player reading cell numbers from a line-based input.

use super::{Choice, Player};
use anyhow::Result;
use std::io::Write;
use strictly_tictactoe::{GameView, Position};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, instrument};

/// Human player typing `1`-`9` (or `q`) one line at a time.
pub struct HumanPlayer<I, O> {
    name: String,
    input: Lines<I>,
    output: O,
}

impl<I, O> HumanPlayer<I, O>
where
    I: AsyncBufRead + Unpin + Send,
    O: Write + Send,
{
    /// Creates a human player reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            input: input.lines(),
            output,
        }
    }

    /// Prompts and reads one trimmed line; `None` at end of input.
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let line = self.input.next_line().await?;
        Ok(line.map(|l| l.trim().to_lowercase()))
    }
}

#[async_trait::async_trait]
impl<I, O> Player for HumanPlayer<I, O>
where
    I: AsyncBufRead + Unpin + Send,
    O: Write + Send,
{
    #[instrument(skip(self, _view), fields(name = %self.name))]
    async fn choose_move(&mut self, _view: &GameView) -> Result<Choice> {
        loop {
            let Some(line) = self.ask("Your move (1-9, q to quit): ").await? else {
                debug!("Input closed");
                return Ok(Choice::Quit);
            };

            if line == "q" || line == "quit" {
                return Ok(Choice::Quit);
            }

            match Position::from_cell_number(&line) {
                Some(pos) => return Ok(Choice::Play(pos.to_index())),
                None => writeln!(self.output, "Please enter a number from 1 to 9.")?,
            }
        }
    }

    async fn rematch(&mut self) -> Result<bool> {
        let answer = self.ask("Play again? [y/N]: ").await?;
        Ok(matches!(answer.as_deref(), Some("y" | "yes")))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Board, Player as Mark};

    fn view() -> GameView {
        GameView::new(Board::new(), Mark::X)
    }

    #[tokio::test]
    async fn test_reprompts_until_valid_number() {
        let mut out = Vec::new();
        let mut human = HumanPlayer::new("me", &b"abc\n0\n 7 \n"[..], &mut out);
        assert_eq!(human.choose_move(&view()).await.unwrap(), Choice::Play(6));
        drop(human);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Please enter a number").count(), 2);
    }

    #[tokio::test]
    async fn test_quit_and_end_of_input() {
        let mut human = HumanPlayer::new("me", &b"Q\n"[..], std::io::sink());
        assert_eq!(human.choose_move(&view()).await.unwrap(), Choice::Quit);
        assert_eq!(human.choose_move(&view()).await.unwrap(), Choice::Quit);
    }

    #[tokio::test]
    async fn test_rematch_answers() {
        let mut human = HumanPlayer::new("me", &b"yes\nn\n"[..], std::io::sink());
        assert!(human.rematch().await.unwrap());
        assert!(!human.rematch().await.unwrap());
        assert!(!human.rematch().await.unwrap());
    }
}
