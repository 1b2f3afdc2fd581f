//! Audit thresholds, penalties and priorities.
//!
//! Score weights live next to the aggregator in `score::weights`; everything
//! else that tunes the audit is defined here.

// HTTP status codes
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;
/// Any status at or above this is a server error
pub const HTTP_STATUS_SERVER_ERROR_MIN: u16 = 500;

// Every validator starts here and subtracts penalties
pub const MAX_SCORE: i32 = 100;

// Title
pub const TITLE_MIN_LENGTH: usize = 30;
pub const TITLE_MAX_LENGTH: usize = 60;
/// Titles between `TITLE_MIN_LENGTH` and this are acceptable but could be longer
pub const TITLE_IDEAL_MIN_LENGTH: usize = 50;
pub const TITLE_TOO_SHORT_PENALTY: i32 = 30;
pub const TITLE_TOO_LONG_PENALTY: i32 = 20;
pub const TITLE_SUBOPTIMAL_PENALTY: i32 = 10;
pub const TITLE_GENERIC_PENALTY: i32 = 15;
/// Compared case-insensitively against the whole trimmed title
pub const GENERIC_TITLES: &[&str] = &[
    "home",
    "home page",
    "homepage",
    "untitled",
    "untitled document",
    "welcome",
    "index",
    "new page",
    "page",
    "default",
];

// Meta description
pub const DESCRIPTION_MIN_LENGTH: usize = 120;
pub const DESCRIPTION_MAX_LENGTH: usize = 160;
pub const DESCRIPTION_IDEAL_MIN_LENGTH: usize = 150;
pub const DESCRIPTION_TOO_SHORT_PENALTY: i32 = 30;
pub const DESCRIPTION_TOO_LONG_PENALTY: i32 = 20;
pub const DESCRIPTION_SUBOPTIMAL_PENALTY: i32 = 10;

// URL
pub const URL_MAX_LENGTH: usize = 100;
pub const URL_TOO_LONG_PENALTY: i32 = 10;
pub const URL_QUERY_PENALTY: i32 = 5;
pub const URL_UNDERSCORE_PENALTY: i32 = 10;
pub const URL_UPPERCASE_PENALTY: i32 = 10;
pub const URL_SPECIAL_CHARS_PENALTY: i32 = 10;
/// Path characters allowed besides ASCII alphanumerics
pub const URL_PATH_ALLOWED_CHARS: &[char] = &['-', '/', '.', '_'];

// H1
pub const H1_MIN_LENGTH: usize = 10;
pub const H1_MAX_LENGTH: usize = 70;
pub const H1_MULTIPLE_PENALTY: i32 = 40;
pub const H1_TOO_LONG_PENALTY: i32 = 15;
pub const H1_TOO_SHORT_PENALTY: i32 = 10;

// Heading hierarchy
pub const HEADING_FIRST_NOT_H1_PENALTY: i32 = 15;
pub const HEADING_SKIP_PENALTY: i32 = 10;

// Images
pub const IMAGE_MISSING_ALT_PENALTY: i32 = 10;
pub const IMAGE_MISSING_ALT_MAX_PENALTY: i32 = 50;
pub const IMAGE_ALT_MAX_LENGTH: usize = 125;
pub const IMAGE_ALT_TOO_LONG_PENALTY: i32 = 5;

// Content length
pub const CONTENT_MIN_WORDS: usize = 300;
pub const CONTENT_CRITICAL_MIN_WORDS: usize = 100;
pub const CONTENT_THIN_PENALTY: i32 = 20;
pub const CONTENT_CRITICAL_PENALTY: i32 = 40;

// Canonical
pub const CANONICAL_MISSING_PENALTY: i32 = 15;
pub const CANONICAL_MALFORMED_PENALTY: i32 = 20;
pub const CANONICAL_MISMATCH_PENALTY: i32 = 10;

// Links
/// Fewer internal links than this is flagged by both the validator and the generator
pub const RECOMMENDED_MIN_INTERNAL_LINKS: usize = 3;
pub const LINKS_NO_INTERNAL_PENALTY: i32 = 20;
pub const LINKS_FEW_INTERNAL_PENALTY: i32 = 10;
pub const LINKS_NO_EXTERNAL_PENALTY: i32 = 10;
pub const LINKS_BROKEN_PENALTY: i32 = 10;

// Hreflang
pub const HREFLANG_X_DEFAULT: &str = "x-default";
pub const HREFLANG_MISSING_PENALTY: i32 = 20;
pub const HREFLANG_NO_X_DEFAULT_PENALTY: i32 = 15;
pub const HREFLANG_INCOMPLETE_PENALTY: i32 = 20;
pub const HREFLANG_INVALID_CODE_PENALTY: i32 = 20;
/// ISO 639 language with optional region or script subtag
pub const HREFLANG_CODE_PATTERN: &str = r"(?i)^[a-z]{2,3}(-[a-z0-9]{2,4})?$";

// Robots
pub const ROBOTS_HEADER: &str = "X-Robots-Tag";
pub const ROBOTS_NOINDEX_PENALTY: i32 = 50;
pub const ROBOTS_NOFOLLOW_PENALTY: i32 = 20;
pub const ROBOTS_UNKNOWN_DIRECTIVE_PENALTY: i32 = 5;
/// Directives that are understood but carry no penalty
pub const ROBOTS_KNOWN_DIRECTIVES: &[&str] = &[
    "all",
    "index",
    "follow",
    "noarchive",
    "nosnippet",
    "noimageindex",
    "notranslate",
    "indexifembedded",
    "max-snippet",
    "max-image-preview",
    "max-video-preview",
    "unavailable_after",
];

// Recommendation priorities (10 = most urgent)
pub const PRIORITY_HTTP_ERROR: u8 = 10;
pub const PRIORITY_CANONICAL_MISSING: u8 = 10;
pub const PRIORITY_ISSUE: u8 = 9;
pub const PRIORITY_WARNING: u8 = 5;
pub const PRIORITY_STRUCTURED_DATA_MISSING: u8 = 5;
pub const PRIORITY_FEW_INTERNAL_LINKS: u8 = 4;
pub const PRIORITY_NO_EXTERNAL_LINKS: u8 = 2;
pub const PRIORITY_OK: u8 = 1;
/// Minimum score for a clean check to earn an "OK" recommendation
pub const OK_SCORE_THRESHOLD: u8 = 80;

// Parsing
/// Subtrees whose text never counts as body copy
pub const NON_CONTENT_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "iframe", "frame", "object", "embed", "template",
];
/// Maximum characters of a JSON-LD block echoed into debug logs
pub const MAX_LOGGED_JSON_LD_CHARS: usize = 200;

// Process exit codes
pub const EXIT_CODE_SUCCESS: i32 = 0;
pub const EXIT_CODE_ERROR: i32 = 1;
/// The run succeeded but `--fail-on` was triggered
pub const EXIT_CODE_POLICY_FAILURE: i32 = 2;
