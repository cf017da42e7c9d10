use clap::{Args, CommandFactory, Parser, Subcommand};
use log::{debug, info};
use queens_solver::queens::board::{BoardSize, BoardSizeError};
use queens_solver::queens::solutions::Solutions;
use queens_solver::queens::solver::{SolutionStats, Solver, SolverType};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// The strategy used by the command-line tool.
pub(crate) const STRATEGY: SolverType = SolverType::Bfs;

/// Question printed before each attempt to read the board size.
pub(crate) const PROMPT: &str = "What is the size of the chessboard? n = ";

/// Defines the command-line interface for the queens application.
///
/// Uses `clap` for parsing arguments. With no arguments the board size is read
/// interactively from standard input.
#[derive(Parser, Debug)]
#[command(
    name = "queens",
    version,
    about = "Enumerates every solution of the N-Queens puzzle"
)]
pub(crate) struct Cli {
    /// Specifies the subcommand to execute.
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options for a solving run.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options of a solving run.
#[derive(Args, Debug, Default, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct CommonOptions {
    /// Board size. When omitted the size is asked for on standard input.
    #[arg(short = 'n', long)]
    pub(crate) size: Option<BoardSize>,

    /// Print only the number of solutions, not the boards.
    #[arg(short, long, default_value_t = false)]
    pub(crate) count_only: bool,

    /// Enable debug output, providing more verbose logging during the search.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Check every solution against the safety rules after the search.
    #[arg(short, long, default_value_t = false)]
    pub(crate) verify: bool,

    /// Print search and memory statistics after the solutions.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,
}

/// Runs the command selected on the command line.
///
/// # Errors
///
/// If reading the board size or writing the results fails.
pub(crate) fn run(cli: Cli) -> Result<(), String> {
    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "queens", &mut io::stdout());
        return Ok(());
    }

    let size = match cli.common.size {
        Some(size) => size,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_board_size(&mut stdin.lock(), &mut stdout.lock())
                .map_err(|e| format!("Unable to read the board size: {e}"))?
        }
    };

    solve_and_report(size, &cli.common)
}

/// Asks for a board size until a valid one is entered.
///
/// Non-numeric input and sizes below four print a message and ask again. A size
/// of one additionally prints the trivial-board notice.
///
/// # Errors
///
/// If reading or writing fails, or input ends before a valid size is entered.
pub(crate) fn prompt_board_size<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<BoardSize> {
    let mut buf = Vec::new();

    loop {
        writeln!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a board size was entered",
            ));
        }

        // Bytes that are not UTF-8 become replacement characters and fail to parse.
        let line = String::from_utf8_lossy(&buf);
        match line.parse::<BoardSize>() {
            Ok(size) => return Ok(size),
            Err(BoardSizeError::Trivial) => {
                writeln!(output, "{}", BoardSizeError::Trivial)?;
                writeln!(output, "{}", BoardSizeError::TooSmall)?;
            }
            Err(e) => writeln!(output, "{e}")?,
        }
        debug!("rejected board size {:?}", line.trim());
    }
}

/// Solves a board of side `size` and reports the results.
///
/// # Errors
///
/// If writing to standard output fails.
pub(crate) fn solve_and_report(size: BoardSize, common: &CommonOptions) -> Result<(), String> {
    let _ = epoch::advance();

    let mut solver = STRATEGY.to_impl(size);
    info!("Solving n = {size} with {}", solver.solver_type());

    let time = std::time::Instant::now();
    let solutions = solver.solve();
    let elapsed = time.elapsed();

    if common.verify {
        verify_solutions(&solutions);
    }

    let stdout = io::stdout();
    write_solutions(&mut stdout.lock(), &solutions, common.count_only)
        .map_err(|e| format!("Unable to write solutions: {e}"))?;

    if common.stats {
        let (allocated_mib, resident_mib) = memory_usage_mib();
        print_stats(
            size,
            solver.solver_type(),
            elapsed,
            &solver.stats(),
            allocated_mib,
            resident_mib,
        );
    }

    Ok(())
}

/// Writes every solution as a grid, unless `count_only`, then the total.
///
/// # Errors
///
/// If writing to `output` fails.
pub(crate) fn write_solutions<W: Write>(
    output: &mut W,
    solutions: &Solutions,
    count_only: bool,
) -> io::Result<()> {
    if !count_only {
        write!(output, "{solutions}")?;
    }
    writeln!(output, "Total solutions = {}", solutions.len())?;
    output.flush()
}

/// Verifies every solution found.
///
/// Prints whether the verification was successful. If verification fails, it panics.
pub(crate) fn verify_solutions(solutions: &Solutions) {
    let ok = solutions.verify();
    println!("Verified: {ok:?}");
    assert!(ok, "Solution failed verification!");
}

/// Reads allocated and resident memory from jemalloc, in MiB.
#[allow(clippy::cast_precision_loss)]
fn memory_usage_mib() -> (f64, f64) {
    let _ = epoch::advance();

    let allocated_bytes = stats::allocated::read().unwrap_or(0);
    let resident_bytes = stats::resident::read().unwrap_or(0);

    (
        allocated_bytes as f64 / (1024.0 * 1024.0),
        resident_bytes as f64 / (1024.0 * 1024.0),
    )
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
#[allow(clippy::cast_precision_loss)]
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Label of the `peak` counter, which means something different per strategy.
pub(crate) const fn peak_label(solver_type: SolverType) -> &'static str {
    match solver_type {
        SolverType::Bfs => "Peak frontier",
        SolverType::Dfs => "Peak depth",
    }
}

/// Prints a summary of problem and search statistics.
///
/// # Arguments
/// * `size` - The board size.
/// * `solver_type` - The strategy that produced `s`.
/// * `elapsed` - Duration spent by the solver.
/// * `s` - `SolutionStats` collected by the solver.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
pub(crate) fn print_stats(
    size: BoardSize,
    solver_type: SolverType,
    elapsed: Duration,
    s: &SolutionStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Board size", size);
    stat_line("Strategy", solver_type);

    println!("========================[ Search Statistics ]========================");
    stat_line("Solutions", s.solutions);
    stat_line_with_rate("Expanded", s.expanded, elapsed_secs);
    stat_line_with_rate("Rejected", s.rejected, elapsed_secs);
    stat_line(peak_label(solver_type), s.peak);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use queens_solver::queens::placement::Placement;
    use std::io::Cursor;

    fn prompt(input: &str) -> (io::Result<BoardSize>, String) {
        let mut output = Vec::new();
        let result = prompt_board_size(&mut Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_accepts_valid_size() {
        let (result, output) = prompt("8\n");
        assert_eq!(result.unwrap().get(), 8);
        assert_eq!(output, format!("{PROMPT}\n"));
    }

    #[test]
    fn test_prompt_smallest_size() {
        let (result, _) = prompt("4\n");
        assert_eq!(result.unwrap().get(), 4);
    }

    #[test]
    fn test_prompt_retries_non_numeric_input() {
        let (result, output) = prompt("abc\n\n6\n");
        assert_eq!(result.unwrap().get(), 6);
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert_eq!(output.matches("Invalid value entered. Enter again").count(), 2);
    }

    #[test]
    fn test_prompt_retries_small_sizes() {
        let (result, output) = prompt("2\n3\n0\n-5\n5\n");
        assert_eq!(result.unwrap().get(), 5);
        assert_eq!(output.matches("Enter a value such that size>=4").count(), 4);
        assert!(!output.contains("Trivial"));
    }

    #[test]
    fn test_prompt_trivial_size() {
        let (result, output) = prompt("1\n7\n");
        assert_eq!(result.unwrap().get(), 7);

        let expected = format!(
            "{PROMPT}\nTrivial solution, choose a board size of at least 4\nEnter a value such that size>=4\n{PROMPT}\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_prompt_retries_invalid_utf8() {
        let mut output = Vec::new();
        let result = prompt_board_size(&mut Cursor::new(&b"\xff\xfe\n8\n"[..]), &mut output);
        let output = String::from_utf8(output).unwrap();

        assert_eq!(result.unwrap().get(), 8);
        assert_eq!(output.matches(PROMPT).count(), 2);
        assert_eq!(output.matches("Invalid value entered. Enter again").count(), 1);
    }

    #[test]
    fn test_prompt_end_of_input() {
        let (result, _) = prompt("3\n");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_write_solutions() {
        let size = BoardSize::try_from(4_usize).unwrap();
        let mut solutions = Solutions::new(size);
        solutions.push(Placement::from(vec![1, 3, 0, 2]));
        solutions.push(Placement::from(vec![2, 0, 3, 1]));

        let mut output = Vec::new();
        write_solutions(&mut output, &solutions, false).unwrap();

        let expected = "\
[0, 1, 0, 0]
[0, 0, 0, 1]
[1, 0, 0, 0]
[0, 0, 1, 0]

[0, 0, 1, 0]
[1, 0, 0, 0]
[0, 0, 0, 1]
[0, 1, 0, 0]

Total solutions = 2
";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_write_solutions_count_only() {
        let size = BoardSize::try_from(6_usize).unwrap();
        let solutions = STRATEGY.to_impl(size).solve();

        let mut output = Vec::new();
        write_solutions(&mut output, &solutions, true).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Total solutions = 4\n");
    }

    #[test]
    fn test_peak_label_follows_strategy() {
        let size = BoardSize::try_from(4_usize).unwrap();
        assert_eq!(peak_label(STRATEGY.to_impl(size).solver_type()), "Peak frontier");
        assert_eq!(peak_label(SolverType::Dfs), "Peak depth");
        assert_eq!(STRATEGY.to_string(), "Breadth-First Frontier Expansion");
    }

    #[test]
    fn test_cli_parses_size() {
        let cli = Cli::try_parse_from(["queens", "-n", "8", "--count-only"]).unwrap();
        assert_eq!(cli.common.size.map(BoardSize::get), Some(8));
        assert!(cli.common.count_only);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_rejects_small_size() {
        assert!(Cli::try_parse_from(["queens", "--size", "3"]).is_err());
        assert!(Cli::try_parse_from(["queens", "--size", "x"]).is_err());
    }

    #[test]
    fn test_cli_without_arguments_prompts() {
        let cli = Cli::try_parse_from(["queens"]).unwrap();
        assert!(cli.common.size.is_none());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
