#![deny(missing_docs)]
//! This crate enumerates every solution of the N-Queens puzzle with two search strategies.

/// The `queens` module implements the board model, the safety checks and the breadth-first
/// and depth-first solvers.
pub mod queens;
