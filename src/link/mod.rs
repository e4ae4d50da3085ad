//! Link classification: absolute/relative split and naive resolution
//!
//! Classification here is purely syntactic, for parity with the scanner's
//! historical behavior:
//!
//! - A href is "absolute" iff it starts with the literal prefix `http`.
//!   Nothing is parsed or validated, so `httpfoo` counts as absolute.
//! - A relative href resolves by appending it to the seed URL as-is.
//!   No path-segment handling, no slash fixing, no query/fragment logic.
//!
//! Both quirks are load-bearing: downstream sets match on exact strings,
//! and callers comparing runs rely on byte-identical resolution.

use std::fmt;

/// The three verdicts a discovered link can receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Same-domain link, reached through a relative href
    Internal,

    /// Other-domain link, reached through an absolute href
    External,

    /// Link that timed out or answered with HTTP status >= 400
    Dead,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            LinkKind::Internal => "inside",
            LinkKind::External => "outside",
            LinkKind::Dead => "dead",
        };
        write!(f, "{}", tag)
    }
}

/// Returns true iff the href begins with the literal prefix `http`
///
/// Syntactic check only. `http`, `httpfoo`, and `httpx://y` all count as
/// absolute; `/path`, `page.html`, and the empty string count as relative.
pub fn is_absolute(href: &str) -> bool {
    href.starts_with("http")
}

/// Resolves a relative href against a base URL by plain concatenation
///
/// `resolve("http://a.example", "/b")` is `http://a.example/b`, but so is
/// `resolve("http://a.example/", "b")` producing `http://a.example/b` only
/// by accident of the input strings. There is no normalization.
pub fn resolve(base: &str, href: &str) -> String {
    format!("{}{}", base, href)
}
