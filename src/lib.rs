//! Deadscan: a single-domain dead-link scanner
//!
//! This crate crawls one web domain starting from a seed URL, discovers the
//! hyperlinks reachable through anchor tags, and sorts every discovered link
//! into one of three sets: inside the domain, outside the domain, or dead
//! (timed out or answering with an HTTP error status).

pub mod crawler;
pub mod link;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for deadscan operations
///
/// Timeouts and HTTP error statuses are deliberately absent here: both are
/// classifications (a dead link), not errors. Only transport failures that
/// leave the scanner unable to trust the network end up as a `ScanError`.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Too many redirects from {url}")]
    RedirectLimit { url: String },

    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// A crawl that aborted mid-run
///
/// Carries everything classified before the failure, so callers can inspect
/// or report partial progress instead of losing it with the process.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct CrawlFailure {
    /// The transport failure that ended the run
    pub error: ScanError,

    /// All links classified before the failure
    pub partial: state::CrawlReport,
}

/// Result type alias for deadscan operations
pub type Result<T> = std::result::Result<T, ScanError>;

// Re-export commonly used types
pub use crawler::{crawl, Crawler};
pub use link::LinkKind;
pub use output::{ConsoleSink, DiscoveryEvent, EventSink};
pub use state::{CrawlReport, CrawlState, LinkSet};
