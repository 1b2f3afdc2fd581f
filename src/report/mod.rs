//! Report writers.
//!
//! Audits can be written as:
//! - `json`: pretty-printed, one object (or an array for several pages)
//! - `jsonl`: one compact object per line, for `jq` and log pipelines
//! - `csv`: flat score rows for spreadsheets and persistence

mod csv;
mod json;
mod pipe;
mod types;

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::config::OutputFormat;

pub use types::AuditedPage;

use pipe::IgnoreBrokenPipe;

/// Writes `pages` in `format` and returns the number of records written.
///
/// # Examples
///
/// ```
/// use seo_audit::config::OutputFormat;
/// use seo_audit::report::{write_report, AuditedPage};
/// use seo_audit::{run_audit, ScrapedContent};
///
/// let scraped = ScrapedContent::new("<title>Hello</title>", 200, "https://example.com/");
/// let page = AuditedPage::new(&scraped, run_audit(&scraped));
///
/// let mut out = Vec::new();
/// write_report(&[page], OutputFormat::Csv, &mut out).unwrap();
/// let csv = String::from_utf8(out).unwrap();
/// assert!(csv.starts_with("url,status_code,overall,meta,content,technical,on_page,recommendations"));
/// ```
pub fn write_report<W: Write>(
    pages: &[AuditedPage],
    format: OutputFormat,
    writer: &mut W,
) -> Result<usize> {
    let written = match format {
        OutputFormat::Json => json::write_json(pages, writer)?,
        OutputFormat::Jsonl => json::write_jsonl(pages, writer)?,
        OutputFormat::Csv => csv::write_csv(pages, writer)?,
    };
    writer.flush().context("Failed to flush report")?;
    Ok(written)
}

/// Opens the report destination: `path`, or stdout when `None`.
///
/// Stdout ignores broken pipes so that `seo_audit ... | head` exits cleanly.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(IgnoreBrokenPipe::new(io::stdout().lock()))),
    }
}
