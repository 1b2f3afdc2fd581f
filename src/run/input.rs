//! Reading CLI input into [`ScrapedContent`] records.

use log::{debug, warn};
use std::io::Read;
use std::path::Path;

use crate::config::Config;
use crate::error_handling::InputError;
use crate::models::ScrapedContent;

/// Reads `path` (or stdin for `-`) as text.
///
/// Invalid UTF-8 is replaced rather than rejected; real-world HTML is not
/// always well encoded.
pub(crate) fn read_input(path: &Path) -> Result<String, InputError> {
    let label = path.display().to_string();

    let bytes = if path == Path::new("-") {
        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .map(|_| buffer)
    } else {
        std::fs::read(path)
    }
    .map_err(|source| InputError::Read {
        path: label.clone(),
        source,
    })?;

    debug!("Read {} bytes from {label}", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parses fetcher output: a JSON array, a single object, or a stream of
/// objects (JSON Lines or concatenated pretty-printed objects).
pub(crate) fn parse_scraped(
    content: &str,
    label: &str,
) -> Result<Vec<ScrapedContent>, InputError> {
    let malformed = |source: serde_json::Error| InputError::MalformedRecord {
        line: source.line(),
        source,
    };

    let pages: Vec<ScrapedContent> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content).map_err(malformed)?
    } else {
        serde_json::Deserializer::from_str(content)
            .into_iter::<ScrapedContent>()
            .collect::<Result<_, _>>()
            .map_err(malformed)?
    };

    if pages.is_empty() {
        return Err(InputError::Empty(label.to_string()));
    }
    Ok(pages)
}

/// Wraps a raw HTML document with the URL, status and headers from the
/// command line.
pub(crate) fn html_page(html: String, config: &Config) -> Result<ScrapedContent, InputError> {
    let url = config
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(InputError::MissingUrl)?;

    let mut page = ScrapedContent::new(html, config.status, url);
    for raw in &config.headers {
        let (name, value) = parse_header(raw)?;
        page = page.with_header(name, value);
    }
    Ok(page)
}

/// Splits a `NAME:VALUE` header argument.
pub(crate) fn parse_header(raw: &str) -> Result<(&str, &str), InputError> {
    raw.split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| InputError::InvalidHeader(raw.to_string()))
}

/// Loads every page the command line asks to audit.
pub(crate) fn load_pages(config: &Config) -> Result<Vec<ScrapedContent>, InputError> {
    let content = read_input(&config.file)?;
    let label = config.file.display().to_string();

    if !config.scraped {
        return Ok(vec![html_page(content, config)?]);
    }

    if config.url.is_some() || !config.headers.is_empty() {
        warn!("--url and --header are ignored with --scraped; records carry their own");
    }
    parse_scraped(&content, &label)
}
