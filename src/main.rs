//! # queens
//!
//! `queens` enumerates every solution of the N-Queens puzzle: all ways to place
//! N queens on an N×N board so that no two share a row, column or diagonal.
//!
//! The search expands a first-in-first-out frontier of partial placements one
//! row at a time (breadth-first). A depth-first backtracking solver with the same
//! interface lives in the library and is used for cross-checking and benchmarks.
//!
//! ## Usage
//!
//! ```sh
//! # Ask for the board size interactively
//! queens
//!
//! # Solve an 8x8 board without prompting
//! queens --size 8
//!
//! # Only print the number of solutions, with search statistics
//! queens -n 10 --count-only --stats
//!
//! # Verify every solution and log search progress
//! queens -n 6 --verify --debug
//!
//! # Generate shell completions
//! queens completions bash
//! ```
//!
//! For every solution the board is printed one row per line, e.g. `[0, 1, 0, 0]`,
//! followed by a blank line. The run ends with `Total solutions = <count>`.
//!
//! Logging goes to standard error. `--debug` raises the level to `debug`; the
//! `QUEENS_LOG` environment variable overrides it (e.g. `QUEENS_LOG=trace`).

use crate::command_line::cli::Cli;
use clap::Parser;

mod command_line;

/// Global allocator using `tikv-jemallocator` for memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Sets up `env_logger`, filtered by `QUEENS_LOG` when it is set.
fn init_logger(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env = env_logger::Env::new()
        .filter_or("QUEENS_LOG", default_level)
        .write_style("QUEENS_LOG_STYLE");

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.common.debug);

    if let Err(e) = command_line::cli::run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
