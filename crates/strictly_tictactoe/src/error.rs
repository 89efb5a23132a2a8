//! Board error types.

use crate::Position;

/// Error raised by direct board manipulation.
///
/// `Game::make_move` never surfaces these; it reports a rejected move as
/// `false` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The square at the position is already occupied.
    #[display("Cell {} ({}) is already occupied", _0.to_index(), _0)]
    InvalidMove(#[error(not(source))] Position),

    /// A state snapshot did not have exactly nine cells.
    #[display("Board state must have {expected} cells, got {actual}")]
    InvalidArgument {
        /// Required number of cells.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },

    /// A raw index outside 0-8.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    IndexOutOfBounds(#[error(not(source))] usize),
}
