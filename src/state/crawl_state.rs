//! Crawl run state and the final report snapshot

use crate::link::LinkKind;
use crate::state::LinkSet;

/// Mutable classification state for one scan run
///
/// Owns the three link sets and the seed URL. Exclusive to the crawl loop
/// for the duration of a run; the loop converts it into a [`CrawlReport`]
/// when the run ends.
///
/// Invariant: a given URL string appears in at most one of the three sets.
/// The first classification wins and is never revisited, which is why every
/// insertion goes through [`CrawlState::classify`] after a
/// [`CrawlState::contains`] check.
#[derive(Debug)]
pub struct CrawlState {
    seed: String,
    internal: LinkSet,
    external: LinkSet,
    dead: LinkSet,
}

impl CrawlState {
    /// Creates an empty state for the given seed URL
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            internal: LinkSet::new(),
            external: LinkSet::new(),
            dead: LinkSet::new(),
        }
    }

    /// The seed URL this run started from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Returns true if the URL is already classified in any of the three sets
    pub fn contains(&self, url: &str) -> bool {
        self.internal.contains(url) || self.external.contains(url) || self.dead.contains(url)
    }

    /// Records a classification, appending the URL to the matching set
    ///
    /// Returns `true` if the URL was newly recorded. Returns `false` without
    /// touching any set when the URL is already classified somewhere, keeping
    /// the one-set-membership invariant even if the caller skipped its own
    /// `contains` check.
    pub fn classify(&mut self, kind: LinkKind, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.contains(&url) {
            return false;
        }
        match kind {
            LinkKind::Internal => self.internal.insert(url),
            LinkKind::External => self.external.insert(url),
            LinkKind::Dead => self.dead.insert(url),
        }
    }

    /// The inside-domain set
    pub fn internal(&self) -> &LinkSet {
        &self.internal
    }

    /// The outside-domain set
    pub fn external(&self) -> &LinkSet {
        &self.external
    }

    /// The dead set
    pub fn dead(&self) -> &LinkSet {
        &self.dead
    }

    /// Snapshots the current state into an immutable report
    pub fn report(&self) -> CrawlReport {
        CrawlReport {
            seed: self.seed.clone(),
            internal: self.internal.as_slice().to_vec(),
            external: self.external.as_slice().to_vec(),
            dead: self.dead.as_slice().to_vec(),
        }
    }
}

/// Immutable result of a scan run
///
/// Plain data: the seed plus the three classified sets in discovery order.
/// This is what a completed run returns, and what a failed run carries as
/// partial progress.
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// The seed URL the run started from
    pub seed: String,

    /// Links inside the domain, in discovery order
    pub internal: Vec<String>,

    /// Links outside the domain, in discovery order
    pub external: Vec<String>,

    /// Dead links, in discovery order
    pub dead: Vec<String>,
}

impl CrawlReport {
    /// Total number of classified links across all three sets
    pub fn total_links(&self) -> usize {
        self.internal.len() + self.external.len() + self.dead.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_routes_to_matching_set() {
        let mut state = CrawlState::new("http://seed.example");

        assert!(state.classify(LinkKind::Internal, "http://seed.example/a"));
        assert!(state.classify(LinkKind::External, "http://other.example/"));
        assert!(state.classify(LinkKind::Dead, "http://seed.example/gone"));

        assert_eq!(state.internal().len(), 1);
        assert_eq!(state.external().len(), 1);
        assert_eq!(state.dead().len(), 1);
    }

    #[test]
    fn test_first_classification_wins() {
        let mut state = CrawlState::new("http://seed.example");

        assert!(state.classify(LinkKind::Dead, "http://seed.example/x"));
        // A later sighting with a different verdict must not move or copy it
        assert!(!state.classify(LinkKind::Internal, "http://seed.example/x"));

        assert!(state.dead().contains("http://seed.example/x"));
        assert!(!state.internal().contains("http://seed.example/x"));
        assert_eq!(state.report().total_links(), 1);
    }

    #[test]
    fn test_url_in_at_most_one_set() {
        let mut state = CrawlState::new("http://seed.example");
        state.classify(LinkKind::Internal, "http://seed.example/a");
        state.classify(LinkKind::External, "http://seed.example/a");
        state.classify(LinkKind::Dead, "http://seed.example/a");

        let report = state.report();
        let memberships = [&report.internal, &report.external, &report.dead]
            .iter()
            .filter(|set| set.contains(&"http://seed.example/a".to_string()))
            .count();
        assert_eq!(memberships, 1);
    }

    #[test]
    fn test_report_snapshots_discovery_order() {
        let mut state = CrawlState::new("http://seed.example");
        state.classify(LinkKind::Internal, "http://seed.example/b");
        state.classify(LinkKind::Internal, "http://seed.example/a");

        let report = state.report();
        assert_eq!(
            report.internal,
            vec!["http://seed.example/b", "http://seed.example/a"]
        );
    }
}
