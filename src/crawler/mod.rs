//! Crawler module for page fetching and link discovery
//!
//! This module contains the scanning core:
//! - HTTP fetching and liveness probing
//! - Anchor href extraction from HTML
//! - The frontier-driven crawl loop

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{
    build_page_client, build_probe_client, fetch_page, probe_liveness, FetchOutcome, Liveness,
    MAX_REDIRECTS, REQUEST_TIMEOUT,
};
pub use parser::extract_hrefs;

use crate::output::EventSink;
use crate::state::CrawlReport;
use crate::CrawlFailure;

/// Runs a complete scan of one domain
///
/// This is the main entry point. It will:
/// 1. Build the HTTP clients
/// 2. Fetch the seed page and classify its anchors
/// 3. Expand over inside-domain links until nothing new is found
/// 4. Return the three classified sets
///
/// # Arguments
///
/// * `seed` - The seed URL to scan from
/// * `sink` - Receives a discovery event for every newly classified link
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The completed classification
/// * `Err(CrawlFailure)` - A fatal failure, carrying partial results
pub async fn crawl(seed: &str, sink: &mut dyn EventSink) -> Result<CrawlReport, CrawlFailure> {
    let mut crawler = Crawler::new(seed).map_err(|error| CrawlFailure {
        error,
        partial: CrawlReport {
            seed: seed.to_string(),
            ..CrawlReport::default()
        },
    })?;
    crawler.run(sink).await
}
