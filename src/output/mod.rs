//! Output module: discovery events and the final console report
//!
//! Classification emits structured [`DiscoveryEvent`]s through an
//! [`EventSink`] instead of printing inline, so presentation is decoupled
//! from the crawl itself. The console implementations here reproduce the
//! scanner's line-oriented output.

mod console;
mod events;

pub use console::{print_banner, print_report, ConsoleSink};
pub use events::{DiscoveryEvent, EventSink, NullSink};
