//! Crawl coordinator - the frontier-driven discovery loop
//!
//! The loop works in two phases:
//!
//! - Seed phase: fetch the seed page once, classify every anchor on it.
//! - Expansion phase: pop inside-domain URLs off a FIFO frontier, fetch
//!   each exactly once, classify its anchors, and push any newly found
//!   inside-domain link back onto the frontier. The run ends when the
//!   frontier drains, which is exactly when a pass over the known pages
//!   surfaces no new inside or outside link.
//!
//! Relative hrefs always resolve against the ORIGINAL seed URL, never
//! against the page they were found on. Dead discoveries never enter the
//! frontier, so they cannot extend the run on their own.

use crate::crawler::fetcher::{
    build_page_client, build_probe_client, fetch_page, probe_liveness, FetchOutcome, Liveness,
};
use crate::crawler::parser::extract_hrefs;
use crate::link::{is_absolute, resolve, LinkKind};
use crate::output::{DiscoveryEvent, EventSink};
use crate::state::{CrawlReport, CrawlState};
use crate::{CrawlFailure, ScanError};
use reqwest::Client;
use std::collections::{HashSet, VecDeque};

/// Sequential single-domain crawler
///
/// Owns the two HTTP clients, the classification state, and the frontier
/// for one run. Everything happens on the caller's task: fetches and
/// probes are awaited one at a time, in discovery order.
pub struct Crawler {
    seed: String,
    page_client: Client,
    probe_client: Client,
    state: CrawlState,

    /// Inside-domain URLs waiting to have their pages scanned
    frontier: VecDeque<String>,

    /// URLs whose page content has already been fetched (or attempted)
    fetched: HashSet<String>,
}

impl Crawler {
    /// Creates a crawler for the given seed URL with default HTTP clients
    ///
    /// # Arguments
    ///
    /// * `seed` - The URL crawling starts from; also the base every
    ///   relative href resolves against
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(ScanError)` - HTTP client construction failed
    pub fn new(seed: impl Into<String>) -> Result<Self, ScanError> {
        let page_client = build_page_client()?;
        let probe_client = build_probe_client()?;
        Ok(Self::with_clients(seed, page_client, probe_client))
    }

    /// Creates a crawler with caller-supplied HTTP clients
    ///
    /// The page client fetches bodies; the probe client checks liveness.
    /// Injecting them lets callers adjust timeouts or TLS settings.
    pub fn with_clients(seed: impl Into<String>, page_client: Client, probe_client: Client) -> Self {
        let seed = seed.into();
        Self {
            state: CrawlState::new(seed.clone()),
            seed,
            page_client,
            probe_client,
            frontier: VecDeque::new(),
            fetched: HashSet::new(),
        }
    }

    /// Runs the crawl to completion
    ///
    /// Every new classification is reported through `sink` at the moment
    /// it happens, before the next network call.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The frontier drained; the three sets are final
    /// * `Err(CrawlFailure)` - A fatal transport failure, carrying all
    ///   links classified before it
    pub async fn run(&mut self, sink: &mut dyn EventSink) -> Result<CrawlReport, CrawlFailure> {
        match self.run_inner(sink).await {
            Ok(report) => Ok(report),
            Err(error) => Err(CrawlFailure {
                error,
                partial: self.state.report(),
            }),
        }
    }

    async fn run_inner(&mut self, sink: &mut dyn EventSink) -> Result<CrawlReport, ScanError> {
        tracing::info!("Starting scan from seed: {}", self.seed);

        // Seed phase. The seed never re-enters the frontier even if some
        // empty href resolves back to it.
        let seed = self.seed.clone();
        self.fetched.insert(seed.clone());
        let outcome = fetch_page(&self.page_client, &seed).await?;
        match outcome {
            FetchOutcome::Body(body) => self.scan_page(&body, sink).await?,
            FetchOutcome::TimedOut => {
                // A timeout is never fatal: the seed itself is classified
                // dead and there is nothing to expand.
                tracing::warn!("Seed page timed out: {}", seed);
                self.record(LinkKind::Dead, seed, sink);
                return Ok(self.state.report());
            }
        }

        // Expansion phase: scan every inside-domain page exactly once.
        while let Some(url) = self.frontier.pop_front() {
            if !self.fetched.insert(url.clone()) {
                continue;
            }
            tracing::debug!("Scanning page: {}", url);
            let outcome = fetch_page(&self.page_client, &url).await?;
            match outcome {
                FetchOutcome::Body(body) => self.scan_page(&body, sink).await?,
                FetchOutcome::TimedOut => {
                    // The link was alive when classified; it stays inside.
                    // Its page just contributes no anchors.
                    tracing::warn!("Page timed out, skipping its content: {}", url);
                }
            }
        }

        let report = self.state.report();
        tracing::info!(
            "Scan complete: {} inside, {} outside, {} dead",
            report.internal.len(),
            report.external.len(),
            report.dead.len()
        );
        Ok(report)
    }

    /// Classifies every anchor href on one page
    async fn scan_page(&mut self, body: &str, sink: &mut dyn EventSink) -> Result<(), ScanError> {
        for href in extract_hrefs(body) {
            let absolute = is_absolute(&href);
            let candidate = if absolute {
                href
            } else {
                resolve(&self.seed, &href)
            };

            // First classification wins: an already classified URL is
            // skipped outright, with no probe and no event.
            if self.state.contains(&candidate) {
                continue;
            }

            let verdict = probe_liveness(&self.probe_client, &candidate).await?;
            match verdict {
                Liveness::Dead => {
                    self.record(LinkKind::Dead, candidate, sink);
                }
                Liveness::Alive if absolute => {
                    self.record(LinkKind::External, candidate, sink);
                }
                Liveness::Alive => {
                    self.frontier.push_back(candidate.clone());
                    self.record(LinkKind::Internal, candidate, sink);
                }
            }
        }
        Ok(())
    }

    /// Appends a classification and emits its discovery event
    fn record(&mut self, kind: LinkKind, url: String, sink: &mut dyn EventSink) {
        if self.state.classify(kind, url.clone()) {
            sink.on_discovery(&DiscoveryEvent { kind, url });
        }
    }

    /// The seed URL this crawler scans from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Read access to the classification state accumulated so far
    pub fn state(&self) -> &CrawlState {
        &self.state
    }
}
