//! PMC - Entry Point
//!
//! Lives in the `pmc` facade crate next to the library.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | No public method was removed |
//! | 1 | At least one public method was removed |
//! | 2 | The comparison could not run (configuration, repository, revision) |

use anyhow::Context;
use clap::Parser;
use pmc::application::Reporter;
use pmc::cli::Cli;
use pmc::infrastructure::config::loader::validate_app_config;
use pmc::infrastructure::init_app;
use pmc::infrastructure::logging::init_logging;
use std::process::ExitCode;

const EXIT_CHECK_FAILED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_CHECK_FAILED),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run the check and print the report, returning whether it passed
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let mut config = cli
        .config_loader()
        .load()
        .context("Failed to load configuration")?;
    cli.apply(&mut config);
    validate_app_config(&config).context("Invalid command line options")?;

    init_logging(&config.logging)?;

    let format = config.check.format;
    let context = init_app(config)?;
    let report = context.run_check().context("Comparison failed")?;

    let output = Reporter::render(&report, format);
    print!("{output}");
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
    Ok(report.passed())
}
