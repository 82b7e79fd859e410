use anyhow::{Context, Result, bail};

use crate::backend::{EngineBackend, EngineError};
use crate::checks::Status;
use crate::ci::{CiEnv, github_actions_marker};
use crate::config::Config;
use crate::console::{Colors, fail, panel};
use crate::formatters::table;
use crate::report::{ReportMeta, make_report};

use super::Args;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

pub fn run_with_args(args: &Args) -> Result<i32> {
    let colors = Colors::enabled();
    let ci = CiEnv::detect();

    if !args.monitored.is_file() {
        bail!("monitored input not found: {}", args.monitored.display());
    }
    if !args.reference.is_file() {
        bail!("reference input not found: {}", args.reference.display());
    }

    // The analysis engine owns histogram decoding and check numerics; its
    // absence is a diagnosed condition, not a crash.
    let engine = match EngineBackend::discover(args.engine.as_deref()) {
        Ok(engine) => engine,
        Err(err @ EngineError::NotFound(_)) => {
            fail(&colors, &err.to_string());
            return Ok(EXIT_FAILURE);
        }
        Err(err) => return Err(err.into()),
    };
    if args.verbose > 0 {
        eprintln!("Analysis engine: {}", engine.program().display());
    }

    let config = match &args.config {
        None => {
            if args.verbose > 0 {
                eprintln!("No config given, enabling all checks for all objects");
            }
            Config::default_checks()
        }
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            Config::from_path(path)?
        }
    };

    println!(
        "{}",
        panel(
            &colors,
            "Comparing files",
            &[
                format!("Monitored: {}", args.monitored.display()),
                format!("Reference: {}", args.reference.display()),
            ],
            None,
        )
    );
    println!(
        "{}",
        panel(
            &colors,
            "Configuration",
            &config
                .to_display_string()
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>(),
            None,
        )
    );

    let comparison = engine
        .compare(&config, &args.monitored, &args.reference)
        .context("comparison failed")?;

    let status = comparison.overall_status();

    println!("{}", table::format(&comparison, &colors));
    println!();
    println!(
        "{}",
        panel(
            &colors,
            "Result",
            &[format!("{} {}", status.icon(), status.name())],
            Some(table::status_style(status)),
        )
    );

    if ci.github_actions {
        match status {
            Status::Failure => println!(
                "{}",
                github_actions_marker(
                    "error",
                    &format!(
                        "Comparison between {} and {} failed!",
                        args.monitored.display(),
                        args.reference.display()
                    ),
                )
            ),
            Status::Inconclusive => println!(
                "{}",
                github_actions_marker(
                    "error",
                    &format!(
                        "Comparison between {} and {} was inconclusive!",
                        args.monitored.display(),
                        args.reference.display()
                    ),
                )
            ),
            Status::Success => {}
        }
    }

    if let Some(output) = &args.output {
        let meta = ReportMeta::new(&args.monitored, &args.reference);
        make_report(&comparison, &meta, output)?;
        if args.verbose > 0 {
            eprintln!("Report written to {}", output.display());
        }
    }

    Ok(if status == Status::Success {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}
