//! Console presentation of events and the final report

use crate::output::{DiscoveryEvent, EventSink};
use crate::state::CrawlReport;

/// Sink that prints each discovery as a notification line
///
/// Produces the scanner's historical progress output, one line per newly
/// classified link:
///
/// ```text
/// Found new inside link -  http://seed.example/about
/// Found new outside link -  http://other.example/
/// Found new dead link -  http://seed.example/missing
/// ```
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn on_discovery(&mut self, event: &DiscoveryEvent) {
        println!("Found new {} link -  {}", event.kind, event.url);
    }
}

/// Prints the seed banner that opens a run's output
pub fn print_banner(seed: &str) {
    println!("\nStarting link:  {}\n", seed);
}

/// Prints the three enumerated result sections of a completed run
///
/// Entries are numbered from 1 within each section; dead entries carry a
/// `DEAD` marker.
pub fn print_report(report: &CrawlReport) {
    println!("\n\nLinks inside domain: ");
    for (i, url) in report.internal.iter().enumerate() {
        println!("{}  -  {}", i + 1, url);
    }

    println!("\nLinks outside domain: ");
    for (i, url) in report.external.iter().enumerate() {
        println!("{}  -  {}", i + 1, url);
    }

    println!("\nDead links: ");
    for (i, url) in report.dead.iter().enumerate() {
        println!("{}  -  DEAD -  {}", i + 1, url);
    }
}
