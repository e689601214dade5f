mod input;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_verify_core::{validate, validate_sequential, ValidationReport};

/// Verify a completed Sudoku grid: 27 concurrent region checks, one verdict.
#[derive(Debug, Parser)]
#[command(name = "sudoku-verify", version)]
struct Cli {
    /// Grid file holding 81 digits (0-9), whitespace ignored; "-" reads
    /// standard input. Omitted: verify the built-in sample solution.
    grid: Option<PathBuf>,

    /// Check regions one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Print the full per-region report as JSON instead of the verdict line
    #[arg(long)]
    json: bool,
}

// The verdict is reported via output text, not exit status: a completed
// run exits 0 whether the grid is valid or not. 1 is reserved for internal
// errors, 2 for unusable input.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let grid = match input::load_grid(cli.grid.as_deref()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let result = if cli.sequential {
        validate_sequential(&grid)
    } else {
        validate(&grid)
    };

    match result {
        Ok(report) => print_report(&report, cli.json),
        Err(err) => {
            eprintln!("internal error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &ValidationReport, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("internal error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report.verdict_line());
    }
    ExitCode::SUCCESS
}
