//! Breadth-first enumeration over a frontier of partial placements.
//!
//! The frontier is a FIFO queue seeded with a queen in every column of row 0.
//! Each step takes the oldest placement off the queue. A placement that already
//! fills the board is a solution; otherwise every column of the next row is tried
//! and the extensions that pass [`is_safe`](crate::queens::placement::is_safe)
//! go to the back of the queue. Unsafe extensions are dropped.
//!
//! Because extensions are always one row longer than their parent and the board
//! has `N` rows, the queue eventually drains and the search terminates.
//!
//! All safe placements of one length are live in the queue at the same time, so
//! memory grows with the widest level of the search tree. [`SolutionStats::peak`]
//! records the largest queue length seen.

use crate::queens::board::BoardSize;
use crate::queens::placement::Placement;
use crate::queens::solutions::Solutions;
use crate::queens::solver::{SolutionStats, Solver};
use log::{debug, trace};
use std::collections::VecDeque;

/// Breadth-first N-Queens solver.
#[derive(Debug, Clone)]
pub struct Bfs {
    size: BoardSize,
    stats: SolutionStats,
}

impl Bfs {
    /// Queues a one-queen placement for every column of the first row.
    fn seed(&self) -> VecDeque<Placement> {
        (0..self.size.get()).map(Placement::single).collect()
    }

    /// Pushes every safe one-row extension of `placement` onto `frontier`.
    fn expand(&mut self, placement: &Placement, frontier: &mut VecDeque<Placement>) {
        for col in 0..self.size.get() {
            let candidate = placement.extended(col);
            if candidate.is_safe() {
                frontier.push_back(candidate);
            } else {
                trace!("rejected {candidate}");
                self.stats.rejected += 1;
            }
        }
    }
}

impl Solver for Bfs {
    fn new(size: BoardSize) -> Self {
        Self {
            size,
            stats: SolutionStats::default(),
        }
    }

    fn solve(&mut self) -> Solutions {
        let n = self.size.get();
        let mut solutions = Solutions::new(self.size);

        self.stats = SolutionStats::default();
        let mut frontier = self.seed();
        let mut depth = 1;

        while let Some(placement) = frontier.pop_front() {
            self.stats.peak = self.stats.peak.max(frontier.len() + 1);
            self.stats.expanded += 1;

            assert!(
                placement.len() <= n,
                "frontier holds {placement}, longer than the board"
            );
            debug_assert!(placement.is_safe(), "frontier holds unsafe {placement}");

            if placement.len() > depth {
                debug!("level {depth} done, {} placements queued", frontier.len() + 1);
                depth = placement.len();
            }

            if placement.len() == n {
                solutions.push(placement);
            } else {
                self.expand(&placement, &mut frontier);
            }
        }

        self.stats.solutions = solutions.len();
        debug!(
            "bfs: n = {n}, {} solutions, {} expanded, {} rejected, peak frontier {}",
            self.stats.solutions, self.stats.expanded, self.stats.rejected, self.stats.peak
        );

        solutions
    }

    fn stats(&self) -> SolutionStats {
        self.stats
    }
}
