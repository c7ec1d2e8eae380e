//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xshell::{Shell, cmd};

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run the test suite with cargo nextest, then the doctests.
    Test,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let sh = repo_shell()?;

    match cli.command {
        CommandName::Tidy => tidy(&sh),
        CommandName::Test => test(&sh),
    }
}

/// Repository root, one level above this crate.
fn repo_root() -> Result<PathBuf> {
    let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    Ok(xtask_dir
        .parent()
        .context("xtask crate must live at <repo>/xtask")?
        .to_path_buf())
}

/// Create a shell rooted at the repository root.
fn repo_shell() -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(repo_root()?);
    Ok(sh)
}

/// Run `cargo fmt` and clippy, then format again to tidy clippy's fixes.
fn tidy(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo +nightly fmt --all").run()?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Nextest skips doctests, so they run separately.
fn test(sh: &Shell) -> Result<()> {
    cmd!(sh, "cargo nextest run --all").run()?;
    cmd!(sh, "cargo test --doc --all").run()?;
    Ok(())
}
