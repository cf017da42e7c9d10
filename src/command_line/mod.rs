//! Command-line parsing, the interactive board-size prompt and result reporting.

pub mod cli;
