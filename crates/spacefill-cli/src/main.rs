//! Command‑line entry point for the `spacefill` tool.
//!
//! Provides subcommands to map indices to grid cells and back, dump whole
//! curves as text, and check curve properties.

use std::{
    fmt::Display,
    io::{self, BufWriter, Write},
    process,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand, builder::PossibleValuesParser};
use spacefill::registry;

/// CLI command implementations.
mod cmd;

use crate::cmd::{Curve, StepSpan};

#[derive(Parser)]
#[command(name = "spacefill")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Curve selection shared by every curve subcommand.
#[derive(Args)]
struct CurveArgs {
    #[arg(
        help = "Curve name",
        value_parser = PossibleValuesParser::new(registry::CURVE_NAMES.iter().copied())
    )]
    /// Curve name.
    curve: String,

    #[arg(
        short = 'n',
        long = "size",
        value_name = "N",
        help = "Grid side length (renders an N×N grid)"
    )]
    /// Side length of the grid.
    size: u64,

    #[arg(
        long = "wide",
        default_value_t = false,
        help = "Use 64-bit indices for very large grids"
    )]
    /// Select the `u64` variant of the curve.
    wide: bool,
}

impl CurveArgs {
    /// Build the selected curve.
    fn open(&self) -> Result<Curve> {
        Curve::open(&self.curve, self.size, self.wide)
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `spacefill` tool.
enum Commands {
    #[command(about = "Print the cell visited at step T")]
    /// Map an index to a grid cell.
    Map {
        /// Curve selection.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(help = "Step along the curve")]
        /// Index to map.
        index: u64,
    },

    #[command(about = "Print the step at which cell (X, Y) is visited")]
    /// Map a grid cell to an index.
    Inverse {
        /// Curve selection.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(help = "Column")]
        /// Cell column.
        x: u64,

        #[arg(help = "Row")]
        /// Cell row.
        y: u64,
    },

    #[command(about = "Print `t x y` for every step of the curve")]
    /// Dump the curve as one line per step.
    Walk {
        /// Curve selection.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(
            long = "chunk",
            value_name = "START:END",
            help = "Only print steps START (inclusive) to END (exclusive); either bound may be omitted"
        )]
        /// Optional span of steps.
        chunk: Option<StepSpan>,
    },

    #[command(about = "Print the grid as a table of step numbers")]
    /// Render the grid as text.
    Grid {
        /// Curve selection.
        #[command(flatten)]
        curve: CurveArgs,
    },

    #[command(about = "Check coverage, round trip and continuity of a curve")]
    /// Verify curve properties.
    Verify {
        /// Curve selection.
        #[command(flatten)]
        curve: CurveArgs,
    },

    #[command(
        name = "list-curves",
        about = "List supported curve names and constraints"
    )]
    /// List supported curves and their constraints.
    ListCurves,
}

/// Exit with an error message if `result` failed.
fn report_err<E: Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

/// Open the curve, logging its shape at `-v`.
fn open_curve(args: &CurveArgs, verbosity: u8) -> Result<Curve> {
    let curve = args.open()?;
    if verbosity > 0 {
        eprintln!("curve: {}", curve.describe());
    }
    Ok(curve)
}

/// Dispatch a parsed command, writing results to `out`.
fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let verbosity = cli.v;
    match cli.command {
        Commands::Map { curve, index } => cmd::map(&open_curve(&curve, verbosity)?, index, out),
        Commands::Inverse { curve, x, y } => {
            cmd::inverse(&open_curve(&curve, verbosity)?, x, y, out)
        }
        Commands::Walk { curve, chunk } => {
            cmd::walk_steps(&open_curve(&curve, verbosity)?, chunk, out)
        }
        Commands::Grid { curve } => cmd::grid(&open_curve(&curve, verbosity)?, out),
        Commands::Verify { curve } => {
            let report = cmd::verify(&open_curve(&curve, verbosity)?, out)?;
            if verbosity > 1 {
                eprintln!("{report:?}");
            }
            Ok(())
        }
        Commands::ListCurves => cmd::list_curves(out),
    }
}

fn main() {
    let cli = Cli::parse();
    let mut out = BufWriter::new(io::stdout().lock());
    let result = run(cli, &mut out);
    let flushed: Result<()> = out.flush().map_err(Into::into);
    report_err(result.and(flushed));
}
