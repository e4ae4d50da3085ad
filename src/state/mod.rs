//! State module for tracking classification results during a scan
//!
//! # Components
//!
//! - `LinkSet`: an ordered, append-only, deduplicated set of URL strings
//! - `CrawlState`: the three link sets plus the immutable seed URL
//! - `CrawlReport`: the immutable snapshot handed to callers when a run ends

mod crawl_state;
mod link_set;

pub use crawl_state::{CrawlReport, CrawlState};
pub use link_set::LinkSet;
