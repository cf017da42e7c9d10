#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides the N-Queens board model and its search strategies.

pub mod bfs;
pub mod board;
pub mod dfs;
pub mod placement;
pub mod solutions;
pub mod solver;
