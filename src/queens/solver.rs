//! The common interface of the search strategies.
//!
//! Each strategy implements [`Solver`]: it is built for one board size and
//! returns every solution from [`Solver::solve`]. Strategies do not know about
//! each other; [`SolverType`] and [`SolverImpls`] let a caller pick one by value.

use crate::queens::bfs::Bfs;
use crate::queens::board::BoardSize;
use crate::queens::dfs::Dfs;
use crate::queens::solutions::Solutions;
use std::fmt::Display;

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolutionStats {
    /// Partial placements taken off the frontier (BFS) or recursive calls made (DFS).
    pub expanded: usize,
    /// Candidate squares that failed the safety check.
    pub rejected: usize,
    /// Largest frontier length (BFS) or deepest recursion (DFS).
    pub peak: usize,
    /// Complete placements found.
    pub solutions: usize,
}

/// A strategy that enumerates every N-Queens solution for one board size.
pub trait Solver {
    /// Creates a solver for boards of side `size`.
    fn new(size: BoardSize) -> Self
    where
        Self: Sized;

    /// Runs the full search and returns all solutions.
    ///
    /// Calling this again starts from scratch and yields the same set.
    fn solve(&mut self) -> Solutions;

    /// Statistics of the most recent call to `solve`.
    fn stats(&self) -> SolutionStats;
}

/// Builds a solver of type `S` and runs it once.
#[must_use]
pub fn enumerate<S: Solver>(size: BoardSize) -> Solutions {
    S::new(size).solve()
}

/// The available search strategies.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default)]
pub enum SolverType {
    /// Breadth-first expansion of a frontier of partial placements.
    #[default]
    Bfs,
    /// Depth-first backtracking on a mutable board.
    Dfs,
}

impl Display for SolverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bfs => write!(f, "Breadth-First Frontier Expansion"),
            Self::Dfs => write!(f, "Depth-First Backtracking"),
        }
    }
}

impl SolverType {
    /// Converts the `SolverType` to a concrete `SolverImpls`.
    #[must_use]
    pub fn to_impl(self, size: BoardSize) -> SolverImpls {
        match self {
            Self::Bfs => SolverImpls::Bfs(Box::new(Bfs::new(size))),
            Self::Dfs => SolverImpls::Dfs(Box::new(Dfs::new(size))),
        }
    }
}

/// A solver chosen at runtime.
#[derive(Debug, Clone)]
pub enum SolverImpls {
    /// Breadth-first frontier expansion.
    Bfs(Box<Bfs>),
    /// Depth-first backtracking.
    Dfs(Box<Dfs>),
}

impl SolverImpls {
    /// The strategy this solver runs.
    #[must_use]
    pub const fn solver_type(&self) -> SolverType {
        match self {
            Self::Bfs(_) => SolverType::Bfs,
            Self::Dfs(_) => SolverType::Dfs,
        }
    }
}

impl Solver for SolverImpls {
    fn new(size: BoardSize) -> Self {
        SolverType::default().to_impl(size)
    }

    fn solve(&mut self) -> Solutions {
        match self {
            Self::Bfs(solver) => solver.solve(),
            Self::Dfs(solver) => solver.solve(),
        }
    }

    fn stats(&self) -> SolutionStats {
        match self {
            Self::Bfs(solver) => solver.stats(),
            Self::Dfs(solver) => solver.stats(),
        }
    }
}
