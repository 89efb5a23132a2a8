//! The 3x3 board.

use crate::error::BoardError;
use crate::rules;
use crate::{Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// The board is a plain value: `Clone` and `Copy` duplicate the squares, so
/// a scratch copy can be mutated freely without touching the board it came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; Board::SIZE],
}

impl Board {
    /// Number of squares on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; Self::SIZE],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index (0-8).
    ///
    /// # Errors
    ///
    /// Returns `BoardError::IndexOutOfBounds` for indices past the board.
    pub fn get_cell(&self, index: usize) -> Result<Square, BoardError> {
        let pos = Position::try_from(index)?;
        Ok(self.get(pos))
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Places a player's mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidMove` if the square is already occupied;
    /// the board is left untouched.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, pos: Position, player: Player) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            debug!(?pos, "Rejecting mark on occupied square");
            return Err(BoardError::InvalidMove(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Checks whether `player` has three in a row.
    pub fn check_win(&self, player: Player) -> bool {
        rules::has_won(self, player)
    }

    /// Returns the player owning a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Returns the first completed line, if any.
    pub fn winning_line(&self) -> Option<rules::WinLine> {
        rules::winning_line(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the board is full with no completed line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Empty positions in ascending index order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of marks each player has placed, as `(x, o)`.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.squares
            .iter()
            .fold((0, 0), |(x, o), square| match square {
                Square::Occupied(Player::X) => (x + 1, o),
                Square::Occupied(Player::O) => (x, o + 1),
                Square::Empty => (x, o),
            })
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; Self::SIZE];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; Board::SIZE] {
        &self.squares
    }

    /// Returns a copy of the board contents as optional marks.
    pub fn state(&self) -> [Option<Player>; Board::SIZE] {
        self.squares.map(Square::player)
    }

    /// Replaces the whole board from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidArgument` unless exactly nine cells are
    /// supplied; the board is left untouched.
    #[instrument(skip(self, cells), fields(len = cells.len()))]
    pub fn set_state<T>(&mut self, cells: &[T]) -> Result<(), BoardError>
    where
        T: Copy + Into<Square>,
    {
        let squares: [Square; Board::SIZE] = cells
            .iter()
            .map(|&cell| cell.into())
            .collect::<Vec<Square>>()
            .try_into()
            .map_err(|_| BoardError::InvalidArgument {
                expected: Self::SIZE,
                actual: cells.len(),
            })?;
        self.squares = squares;
        Ok(())
    }

    /// Builds a board from a snapshot.
    ///
    /// # Errors
    ///
    /// Same as [`Board::set_state`].
    pub fn from_state<T>(cells: &[T]) -> Result<Self, BoardError>
    where
        T: Copy + Into<Square>,
    {
        let mut board = Self::new();
        board.set_state(cells)?;
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty squares shown by their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for pos in Position::ALL {
            match self.get(pos) {
                Square::Empty => write!(f, "{}", pos.to_index() + 1)?,
                Square::Occupied(player) => write!(f, "{player}")?,
            }
            if pos.col() < 2 {
                write!(f, "|")?;
            } else if pos.row() < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
