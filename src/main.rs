//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes (0 success, 1 error, 2 `--fail-on` triggered)
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_audit::config::{EXIT_CODE_ERROR, EXIT_CODE_SUCCESS};
use seo_audit::initialization::init_logger_with;
use seo_audit::{run_cli, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_cli(&config) {
        Ok(report) => {
            if let Some(path) = &report.output {
                eprintln!(
                    "Audited {} page{} (lowest score {}, {} critical) - report written to {}",
                    report.audited,
                    if report.audited == 1 { "" } else { "s" },
                    report
                        .lowest_score
                        .map_or_else(|| "n/a".to_string(), |score| score.to_string()),
                    report.critical_count,
                    path.display()
                );
            }
            let code = report.exit_code(config.fail_on, config.fail_threshold);
            if code != EXIT_CODE_SUCCESS {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_audit error: {:#}", e);
            process::exit(EXIT_CODE_ERROR);
        }
    }
}
