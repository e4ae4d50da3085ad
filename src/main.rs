//! Deadscan main entry point
//!
//! Command-line interface for the single-domain dead-link scanner.

use clap::Parser;
use deadscan::output::{print_banner, print_report, ConsoleSink};
use tracing_subscriber::EnvFilter;

/// Deadscan: scan a domain for inside, outside, and dead links
///
/// Crawls the given domain by following anchor tags, classifying every
/// discovered link as inside the domain, outside the domain, or dead,
/// and prints the three sets when the crawl finds nothing new.
#[derive(Parser, Debug)]
#[command(name = "deadscan")]
#[command(version)]
#[command(about = "Scans a domain for links and checks them", long_about = None)]
struct Cli {
    /// The seed URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging();

    print_banner(&cli.seed_url);

    let mut sink = ConsoleSink;
    match deadscan::crawl(&cli.seed_url, &mut sink).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(failure) => {
            // Accumulated partial results are discarded from the console
            // output; only their counts are surfaced with the error.
            tracing::error!(
                "Scan aborted after classifying {} links ({} inside, {} outside, {} dead): {}",
                failure.partial.total_links(),
                failure.partial.internal.len(),
                failure.partial.external.len(),
                failure.partial.dead.len(),
                failure.error
            );
            Err(failure.error.into())
        }
    }
}

/// Sets up the tracing subscriber with a fixed filter
///
/// The filter is hard-coded: the scanner consults no environment
/// variables.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("deadscan=info"))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
