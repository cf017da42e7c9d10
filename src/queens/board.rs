//! Board dimensions and the occupancy grid used by the backtracking search.
//!
//! `BoardSize` is the validated side length of the board. Sizes below four are
//! rejected: one is trivial and two or three have no solutions.
//!
//! `Board` is an `N x N` grid of occupancy bits, one `BitVec` per row. Queens are
//! placed and removed in place, which is what the depth-first search needs.

use crate::queens::placement::Placement;
use bit_vec::BitVec;
use std::fmt::Display;
use std::str::FromStr;

/// The smallest board size that is accepted.
pub const MIN_SIZE: usize = 4;

/// Why a requested board size was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardSizeError {
    /// The input was not an integer.
    NotANumber,
    /// A 1x1 board, solved by a single queen.
    Trivial,
    /// Any size below `MIN_SIZE` (including zero and negative values).
    TooSmall,
}

impl Display for BoardSizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Invalid value entered. Enter again"),
            Self::Trivial => write!(
                f,
                "Trivial solution, choose a board size of at least {MIN_SIZE}"
            ),
            Self::TooSmall => write!(f, "Enter a value such that size>={MIN_SIZE}"),
        }
    }
}

impl std::error::Error for BoardSizeError {}

/// Side length of a chess board, always at least `MIN_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// The side length as a plain `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Err(BoardSizeError::Trivial),
            n if n < MIN_SIZE => Err(BoardSizeError::TooSmall),
            n => Ok(Self(n)),
        }
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value).map_or(
            Err(BoardSizeError::TooSmall),
            <Self as TryFrom<usize>>::try_from,
        )
    }
}

impl FromStr for BoardSize {
    type Err = BoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| BoardSizeError::NotANumber)
            .and_then(<Self as TryFrom<i64>>::try_from)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An `N x N` occupancy grid. A set bit marks a queen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<BitVec>,
}

impl Board {
    /// An empty board of side `size`.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        Self {
            rows: vec![BitVec::from_elem(n, false); n],
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Puts a queen on `(row, col)`.
    pub fn place(&mut self, row: usize, col: usize) {
        self.rows[row].set(col, true);
    }

    /// Lifts the queen off `(row, col)`.
    pub fn remove(&mut self, row: usize, col: usize) {
        self.rows[row].set(col, false);
    }

    /// Whether a queen stands on `(row, col)`.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.rows[row].get(col).unwrap_or(false)
    }

    /// Checks whether a queen at `(row, col)` is attacked by a queen in any row above it.
    ///
    /// Rows are filled top to bottom, so only the column and the two upward
    /// diagonals need to be inspected; everything below `row` is empty.
    #[must_use]
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        let n = self.size();

        if (0..row).any(|r| self.is_occupied(r, col)) {
            return false;
        }

        let mut up_left = (0..row).rev().zip((0..col).rev());
        if up_left.any(|(r, c)| self.is_occupied(r, c)) {
            return false;
        }

        let mut up_right = (0..row).rev().zip(col + 1..n);
        !up_right.any(|(r, c)| self.is_occupied(r, c))
    }

    /// Reads the board back as one column per row.
    ///
    /// # Panics
    ///
    /// If a row holds no queen, the board is not a complete placement.
    #[must_use]
    pub fn to_placement(&self) -> Placement {
        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .position(|bit| bit)
                    .unwrap_or_else(|| panic!("row {r} holds no queen"))
            })
            .collect()
    }
}
