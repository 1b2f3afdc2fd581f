//! Configuration types and CLI options.
//!
//! [`Config`] doubles as the command-line definition of the `seo_audit`
//! binary; [`AuditOptions`] is the library-level configuration of one audit
//! and has no CLI dependencies.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report format written by the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (a single object, or an array for several audits)
    Json,
    /// One compact JSON object per audit per line
    Jsonl,
    /// Flat score rows (overall, meta, content, technical, on_page) with a header
    Csv,
}

/// How a page without any robots directive is scored.
///
/// Sites differ on whether a page without directives is acceptable, so the
/// choice is left to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RobotsPolicy {
    /// No directive means "index, follow": score 100, no findings
    #[default]
    Pass,
    /// No directive is an issue: score 0
    Fail,
}

/// When the CLI should exit with a failure code after a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 when the audit ran
    Never,
    /// Exit 2 if any audit produced a critical recommendation
    Critical,
    /// Exit 2 if any overall score is below `--fail-threshold`
    ScoreBelow,
}

/// Library configuration for a single audit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditOptions {
    /// Policy for pages without robots meta tag or `X-Robots-Tag` header
    pub robots_policy: RobotsPolicy,
    /// Links already known to be broken (reachability is checked elsewhere)
    pub broken_links: Vec<String>,
}

/// Command-line configuration of the `seo_audit` binary.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use seo_audit::config::{Config, OutputFormat};
///
/// let config = Config::try_parse_from([
///     "seo_audit", "page.html", "--url", "https://example.com/", "--format", "csv",
/// ]).unwrap();
/// assert_eq!(config.format, OutputFormat::Csv);
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_audit",
    version,
    about = "Audit a fetched web page for on-page SEO quality"
)]
pub struct Config {
    /// HTML document, or fetcher output (JSON / JSON Lines) with --scraped; "-" reads stdin
    pub file: PathBuf,

    /// Treat FILE as fetcher output ({html, statusCode, finalUrl, headers} per record)
    #[arg(long)]
    pub scraped: bool,

    /// Final URL of the page (required for HTML input)
    #[arg(long)]
    pub url: Option<String>,

    /// HTTP status code the page was served with
    #[arg(long, default_value_t = 200)]
    pub status: u16,

    /// Response header as NAME:VALUE (repeatable)
    #[arg(short = 'H', long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scoring of pages without robots directives
    #[arg(long, value_enum, default_value_t = RobotsPolicy::Pass)]
    pub robots_policy: RobotsPolicy,

    /// Exit-code policy
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Overall score threshold used by `--fail-on score-below`
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_threshold: u8,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("-"),
            scraped: false,
            url: None,
            status: 200,
            headers: Vec::new(),
            format: OutputFormat::Json,
            output: None,
            robots_policy: RobotsPolicy::Pass,
            fail_on: FailOn::Never,
            fail_threshold: 50,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Library options implied by the command line.
    pub fn audit_options(&self) -> AuditOptions {
        AuditOptions {
            robots_policy: self.robots_policy,
            broken_links: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.status, 200);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.robots_policy, RobotsPolicy::Pass);
        assert_eq!(config.fail_on, FailOn::Never);
        assert_eq!(config.fail_threshold, 50);
        assert!(!config.scraped);
    }

    #[test]
    fn test_audit_options_follow_robots_policy() {
        let config = Config {
            robots_policy: RobotsPolicy::Fail,
            ..Default::default()
        };
        assert_eq!(config.audit_options().robots_policy, RobotsPolicy::Fail);
        assert!(config.audit_options().broken_links.is_empty());
    }

    #[test]
    fn test_robots_policy_defaults_to_pass() {
        assert_eq!(RobotsPolicy::default(), RobotsPolicy::Pass);
        assert_eq!(AuditOptions::default().robots_policy, RobotsPolicy::Pass);
    }
}
