//! Placements of queens stored as one column index per row.
//!
//! The row of a queen is its position in the sequence, so two queens can never
//! share a row. A placement of length `k` covers rows `0..k`.
//!
//! Placements are immutable once built. Growing one with [`Placement::extended`]
//! yields a fresh placement and leaves the parent untouched, which lets the
//! breadth-first frontier hold many siblings that share a prefix.

use itertools::Itertools;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt::Display;

/// Inline capacity of a placement before it spills to the heap.
const INLINE_ROWS: usize = 16;

/// Checks that no two queens in `columns` attack each other.
///
/// Column clashes are found by comparing the number of queens with the number of
/// distinct columns. Diagonal clashes are checked for every pair `(i, j)` with
/// `i < j`: the queens share a diagonal when the row distance `j - i` equals the
/// column distance in either direction. The whole placement is re-validated on
/// every call, not just the newest queen.
#[must_use]
pub fn is_safe(columns: &[usize]) -> bool {
    let distinct: FxHashSet<usize> = columns.iter().copied().collect();
    if distinct.len() != columns.len() {
        return false;
    }

    columns
        .iter()
        .enumerate()
        .tuple_combinations()
        .all(|((i, &ci), (j, &cj))| j - i != ci.abs_diff(cj))
}

/// A (possibly partial) assignment of one queen per row.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Placement(SmallVec<[usize; INLINE_ROWS]>);

impl Placement {
    /// A placement with no queens.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// A one-queen placement with the queen of row 0 in `col`.
    #[must_use]
    pub fn single(col: usize) -> Self {
        let mut columns = SmallVec::new();
        columns.push(col);
        Self(columns)
    }

    /// Returns a new placement with a queen in `col` on the next row.
    #[must_use]
    pub fn extended(&self, col: usize) -> Self {
        let mut columns = SmallVec::with_capacity(self.0.len() + 1);
        columns.extend_from_slice(&self.0);
        columns.push(col);
        Self(columns)
    }

    /// Number of rows that hold a queen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no row holds a queen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The columns, indexed by row.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Iterates over the columns in row order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// See [`is_safe`].
    #[must_use]
    pub fn is_safe(&self) -> bool {
        is_safe(&self.0)
    }

    /// Expands the placement into an `n x n` grid with a 1 at each queen.
    ///
    /// # Panics
    ///
    /// If a column is outside `0..n` or there are more rows than `n`.
    #[must_use]
    pub fn to_grid(&self, n: usize) -> Vec<Vec<u8>> {
        assert!(self.len() <= n, "placement of {} rows on a {n}x{n} board", self.len());

        self.iter()
            .map(|col| {
                assert!(col < n, "column {col} is off a {n}x{n} board");
                let mut row = vec![0; n];
                row[col] = 1;
                row
            })
            .collect()
    }
}

impl FromIterator<usize> for Placement {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<usize>> for Placement {
    fn from(columns: Vec<usize>) -> Self {
        Self(SmallVec::from_vec(columns))
    }
}

impl From<&[usize]> for Placement {
    fn from(columns: &[usize]) -> Self {
        Self(SmallVec::from_slice(columns))
    }
}

impl From<Placement> for Vec<usize> {
    fn from(placement: Placement) -> Self {
        placement.0.into_vec()
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}
