//! Depth-first backtracking on a mutable board.
//!
//! Rows are filled from the top. For the current row every column is tried in
//! turn: if the square is safe a queen is placed, the next row is searched
//! recursively, and the queen is lifted again before the next column is tried.
//! The search never stops early, so every branch below a solution's siblings is
//! still explored and the full solution set is produced.
//!
//! Only one board exists for the whole search, so memory is bounded by the
//! recursion depth `N` rather than by the width of the search tree.

use crate::queens::board::{Board, BoardSize};
use crate::queens::solutions::Solutions;
use crate::queens::solver::{SolutionStats, Solver};
use log::{debug, trace};

/// Depth-first N-Queens solver.
#[derive(Debug, Clone)]
pub struct Dfs {
    size: BoardSize,
    board: Board,
    stats: SolutionStats,
}

impl Dfs {
    fn search(&mut self, row: usize, solutions: &mut Solutions) {
        self.stats.expanded += 1;
        self.stats.peak = self.stats.peak.max(row);

        if row == self.size.get() {
            solutions.push(self.board.to_placement());
            return;
        }

        for col in 0..self.size.get() {
            if !self.board.is_safe(row, col) {
                trace!("rejected ({row}, {col})");
                self.stats.rejected += 1;
                continue;
            }

            self.board.place(row, col);
            self.search(row + 1, solutions);
            self.board.remove(row, col);
        }
    }
}

impl Solver for Dfs {
    fn new(size: BoardSize) -> Self {
        Self {
            size,
            board: Board::new(size),
            stats: SolutionStats::default(),
        }
    }

    fn solve(&mut self) -> Solutions {
        let mut solutions = Solutions::new(self.size);

        self.board = Board::new(self.size);
        self.stats = SolutionStats::default();
        self.search(0, &mut solutions);

        self.stats.solutions = solutions.len();
        debug!(
            "dfs: n = {}, {} solutions, {} expanded, {} rejected",
            self.size, self.stats.solutions, self.stats.expanded, self.stats.rejected
        );

        solutions
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}
