use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "histcmp",
    version,
    about = "Compare monitored vs reference histogram sets",
    long_about = None
)]
pub struct Args {
    /// Monitored input file (the candidate run)
    #[arg(value_name = "MONITORED", value_hint = ValueHint::FilePath)]
    pub monitored: PathBuf,

    /// Reference input file (the baseline run)
    #[arg(value_name = "REFERENCE", value_hint = ValueHint::FilePath)]
    pub reference: PathBuf,

    /// Check configuration file (YAML); defaults to all checks on all objects
    #[arg(long = "config", short = 'c', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Write a report to this path (.json for JSON, anything else Markdown)
    #[arg(long = "output", short = 'o', value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Analysis engine executable (overrides HISTCMP_ENGINE and PATH lookup)
    #[arg(long = "engine", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub engine: Option<PathBuf>,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application and returns the process exit code.
///
/// # Errors
/// Returns an error if command execution fails.
pub fn run() -> Result<i32> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
