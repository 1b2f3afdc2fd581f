//! CSS selector compilation for the document parser.

use scraper::Selector;

/// Compiles one of the parser's built-in selectors.
///
/// Selectors are compile-time constants, so a parse failure is a programming
/// error and panics with the offending selector and where it is used.
///
/// # Panics
///
/// Panics if `selector_str` is not valid CSS.
pub fn compile_selector(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_compile_selector_matches() {
        let selector = compile_selector("h1, h2", "test");
        let document = Html::parse_fragment("<h1>a</h1><h2>b</h2><h3>c</h3>");
        assert_eq!(document.select(&selector).count(), 2);
    }

    #[test]
    #[should_panic(expected = "programming error")]
    fn test_compile_selector_panics_on_invalid_css() {
        compile_selector("a[", "test");
    }
}
