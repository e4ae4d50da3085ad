//! Discovery events and the sink trait they flow through

use crate::link::LinkKind;

/// One newly classified link
///
/// Emitted exactly once per URL, at the moment it first enters one of the
/// three result sets. Re-sightings of an already classified URL emit
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryEvent {
    /// Which set the URL entered
    pub kind: LinkKind,

    /// The fully qualified URL as recorded in the set
    pub url: String,
}

/// Observer for discovery events during a scan
///
/// The crawl loop calls [`EventSink::on_discovery`] synchronously for each
/// new classification; implementations decide what (if anything) to do
/// with it.
pub trait EventSink {
    /// Called once for each newly classified link, in discovery order
    fn on_discovery(&mut self, event: &DiscoveryEvent);
}

/// A sink that discards every event
///
/// Useful when only the final report matters.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_discovery(&mut self, _event: &DiscoveryEvent) {}
}

impl EventSink for Vec<DiscoveryEvent> {
    fn on_discovery(&mut self, event: &DiscoveryEvent) {
        self.push(event.clone());
    }
}
