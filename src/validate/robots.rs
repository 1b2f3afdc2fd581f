//! Robots directive check.

use crate::config::{
    RobotsPolicy, ROBOTS_KNOWN_DIRECTIVES, ROBOTS_NOFOLLOW_PENALTY, ROBOTS_NOINDEX_PENALTY,
    ROBOTS_UNKNOWN_DIRECTIVE_PENALTY,
};
use crate::models::ValidationResult;

use super::scorecard::Scorecard;

/// Checks robots directives from the meta tag and/or `X-Robots-Tag` header.
///
/// `directives` is a comma-separated list such as `"noindex, nofollow"`.
/// Directives may carry a value (`max-snippet:50`) or be scoped to a crawler
/// (`googlebot: noindex`). Absent directives are scored by `policy`.
pub fn validate_robots(directives: Option<&str>, policy: RobotsPolicy) -> ValidationResult {
    let Some(directives) = directives.map(str::trim).filter(|d| !d.is_empty()) else {
        return match policy {
            RobotsPolicy::Pass => ValidationResult::perfect(),
            RobotsPolicy::Fail => {
                ValidationResult::failed("No robots directive found (meta tag or X-Robots-Tag)")
            }
        };
    };

    let mut card = Scorecard::new();
    let mut noindex = false;
    let mut nofollow = false;

    for raw in directives.split(',') {
        let directive = raw.trim().to_ascii_lowercase();
        if directive.is_empty() {
            continue;
        }
        match directive_name(&directive) {
            "noindex" => noindex = true,
            "nofollow" => nofollow = true,
            "none" => {
                noindex = true;
                nofollow = true;
            }
            name if ROBOTS_KNOWN_DIRECTIVES.contains(&name) => {}
            _ => card.warning(
                format!("Unknown robots directive \"{}\"", raw.trim()),
                ROBOTS_UNKNOWN_DIRECTIVE_PENALTY,
            ),
        }
    }

    if noindex {
        card.issue(
            "Page is blocked from search results (noindex)",
            ROBOTS_NOINDEX_PENALTY,
        );
    }
    if nofollow {
        card.warning(
            "Search engines will not follow links on this page (nofollow)",
            ROBOTS_NOFOLLOW_PENALTY,
        );
    }

    card.finish()
}

/// Name of a directive, dropping its value or crawler scope.
fn directive_name(directive: &str) -> &str {
    let Some((head, tail)) = directive.split_once(':') else {
        return directive;
    };
    let head = head.trim();
    if is_recognized(head) {
        return head;
    }
    // "googlebot: noindex"
    let tail = tail.trim();
    let scoped = tail.split_once(':').map_or(tail, |(name, _)| name.trim());
    if is_recognized(scoped) {
        scoped
    } else {
        head
    }
}

fn is_recognized(name: &str) -> bool {
    matches!(name, "noindex" | "nofollow" | "none") || ROBOTS_KNOWN_DIRECTIVES.contains(&name)
}
