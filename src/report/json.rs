//! JSON and JSON Lines report writers.

use anyhow::{Context, Result};
use std::io::Write;

use super::AuditedPage;

/// Writes pretty-printed JSON: a single object for one page, an array otherwise.
pub(crate) fn write_json<W: Write>(pages: &[AuditedPage], writer: &mut W) -> Result<usize> {
    let serialized = match pages {
        [page] => serde_json::to_writer_pretty(&mut *writer, page),
        _ => serde_json::to_writer_pretty(&mut *writer, pages),
    };
    serialized.context("Failed to serialize JSON report")?;
    writeln!(writer).context("Failed to write JSON report")?;
    Ok(pages.len())
}

/// Writes one compact JSON object per page per line.
pub(crate) fn write_jsonl<W: Write>(pages: &[AuditedPage], writer: &mut W) -> Result<usize> {
    for page in pages {
        serde_json::to_writer(&mut *writer, page)
            .with_context(|| format!("Failed to serialize audit of {}", page.url))?;
        writeln!(writer).context("Failed to write JSONL record")?;
    }
    Ok(pages.len())
}
