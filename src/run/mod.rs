//! CLI driver.
//!
//! Reads the input named on the command line, audits every page, writes the
//! report and summarizes the run for the exit-code policy.

mod input;

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::audit::run_audit_with;
use crate::config::{Config, FailOn, EXIT_CODE_POLICY_FAILURE, EXIT_CODE_SUCCESS};
use crate::report::{open_output, write_report, AuditedPage};

/// Summary of a CLI run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of pages audited
    pub audited: usize,
    /// Lowest overall score across the audited pages
    pub lowest_score: Option<u8>,
    /// Total critical recommendations across the audited pages
    pub critical_count: usize,
    /// Report file, or `None` when the report went to stdout
    pub output: Option<PathBuf>,
}

impl AuditReport {
    /// Exit code implied by `--fail-on` for this run.
    pub fn exit_code(&self, fail_on: FailOn, fail_threshold: u8) -> i32 {
        let triggered = match fail_on {
            FailOn::Never => false,
            FailOn::Critical => self.critical_count > 0,
            FailOn::ScoreBelow => self
                .lowest_score
                .is_some_and(|score| score < fail_threshold),
        };
        if triggered {
            EXIT_CODE_POLICY_FAILURE
        } else {
            EXIT_CODE_SUCCESS
        }
    }
}

/// Runs the audit described by `config`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or if the report
/// cannot be written. Audits themselves never fail.
pub fn run_cli(config: &Config) -> Result<AuditReport> {
    let pages = input::load_pages(config)
        .with_context(|| format!("Failed to load input from {}", config.file.display()))?;
    let options = config.audit_options();

    info!("Auditing {} page(s) from {}", pages.len(), config.file.display());

    let audited: Vec<AuditedPage> = pages
        .iter()
        .map(|page| AuditedPage::new(page, run_audit_with(page, &options)))
        .collect();

    let mut writer = open_output(config.output.as_deref())?;
    write_report(&audited, config.format, &mut writer).context("Failed to write report")?;

    let report = AuditReport {
        audited: audited.len(),
        lowest_score: audited.iter().map(|page| page.result.scores.overall).min(),
        critical_count: audited
            .iter()
            .map(|page| page.result.critical_count())
            .sum(),
        output: config.output.clone(),
    };

    info!(
        "Audited {} page(s): lowest score {}, {} critical recommendation(s)",
        report.audited,
        report
            .lowest_score
            .map_or_else(|| "n/a".to_string(), |score| score.to_string()),
        report.critical_count
    );

    Ok(report)
}
