//! Heuristic move selection for the computer player.
//!
//! The advisor looks one ply ahead for a winning or blocking square and
//! otherwise prefers the center, then a corner, then a side. Ties inside a
//! tier are broken at random with the injected random source.

use crate::{GameView, Player, Position};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule produced the advisor's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Reason {
    /// Completes a line for the acting player.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes a random free side.
    Side,
    /// Random free square.
    Fallback,
}

/// Stateless move advisor; the random source is its only field.
#[derive(Debug, Clone)]
pub struct MoveAdvisor<R = StdRng> {
    rng: R,
}

impl MoveAdvisor<StdRng> {
    /// Creates an advisor seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an advisor with reproducible tie-breaking.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MoveAdvisor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoveAdvisor<R> {
    /// Creates an advisor breaking ties with `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a move for the player to act in `view`.
    ///
    /// Returns `None` only when the board has no empty square.
    pub fn best_move(&mut self, view: &GameView) -> Option<Position> {
        self.best_move_with_reason(view).map(|(pos, _)| pos)
    }

    /// Picks a move and reports which rule chose it.
    #[instrument(skip(self, view), fields(to_move = %view.to_move()))]
    pub fn best_move_with_reason(&mut self, view: &GameView) -> Option<(Position, Reason)> {
        let me = view.to_move();
        let available = view.board().available_moves();

        let choice = if let Some(pos) = completing_move(view, &available, me) {
            Some((pos, Reason::Win))
        } else if let Some(pos) = completing_move(view, &available, me.opponent()) {
            Some((pos, Reason::Block))
        } else if available.contains(&Position::Center) {
            Some((Position::Center, Reason::Center))
        } else if let Some(pos) = self.pick_from(&Position::CORNERS, &available) {
            Some((pos, Reason::Corner))
        } else if let Some(pos) = self.pick_from(&Position::SIDES, &available) {
            Some((pos, Reason::Side))
        } else {
            available
                .choose(&mut self.rng)
                .map(|&pos| (pos, Reason::Fallback))
        };

        match choice {
            Some((pos, reason)) => debug!(%pos, %reason, "Advisor chose move"),
            None => debug!("No moves available"),
        }
        choice
    }

    /// Uniformly picks one of `tier` that is still available.
    fn pick_from(&mut self, tier: &[Position], available: &[Position]) -> Option<Position> {
        let open: Vec<Position> = tier
            .iter()
            .copied()
            .filter(|pos| available.contains(pos))
            .collect();
        open.choose(&mut self.rng).copied()
    }
}

/// First available square (ascending) that would give `player` three in a
/// row, tried on a scratch copy of the board.
fn completing_move(view: &GameView, available: &[Position], player: Player) -> Option<Position> {
    available.iter().copied().find(|&pos| {
        let mut scratch = *view.board();
        scratch.place_mark(pos, player).is_ok() && scratch.check_win(player)
    })
}
