//! CSV report writer.
//!
//! One flattened [`ScoreRow`] per audited page: the five score columns plus
//! the ordered recommendation array as a JSON string.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::Write;

use crate::models::ScoreRow;

use super::AuditedPage;

pub(crate) fn write_csv<W: Write>(pages: &[AuditedPage], writer: &mut W) -> Result<usize> {
    let mut csv_writer = Writer::from_writer(writer);

    for page in pages {
        let row = ScoreRow::from_result(&page.url, page.status_code, &page.result)
            .with_context(|| format!("Failed to encode recommendations of {}", page.url))?;
        csv_writer
            .serialize(&row)
            .with_context(|| format!("Failed to write CSV row for {}", page.url))?;
    }

    if pages.is_empty() {
        // serialize() emits the header with the first row only
        csv_writer.write_record(SCORE_ROW_HEADER)?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(pages.len())
}

const SCORE_ROW_HEADER: [&str; 8] = [
    "url",
    "status_code",
    "overall",
    "meta",
    "content",
    "technical",
    "on_page",
    "recommendations",
];
