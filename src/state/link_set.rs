//! Ordered, append-only set of URL strings

use std::collections::HashSet;

/// An ordered sequence of URL strings, deduplicated by exact string equality
///
/// Insertion order is discovery order and is preserved for reporting.
/// Entries are never removed or rewritten within a run.
#[derive(Debug, Default, Clone)]
pub struct LinkSet {
    /// URLs in discovery order
    order: Vec<String>,

    /// Membership index for O(1) duplicate checks
    seen: HashSet<String>,
}

impl LinkSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a URL if it is not already present
    ///
    /// Returns `true` if the URL was newly added, `false` if it was a
    /// duplicate (in which case the set is unchanged).
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.order.push(url);
        true
    }

    /// Returns true if the exact URL string is in the set
    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    /// Number of URLs in the set
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the set holds no URLs
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates the URLs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The URLs in discovery order, as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// Consumes the set, yielding the URLs in discovery order
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}
