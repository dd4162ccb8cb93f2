//! Crawler module: fetching, extraction, filtering, and scheduling
//!
//! The scheduler drives the other three components; everything above this
//! module only sees [`crawl`] and the resulting collection.

mod extractor;
mod fetcher;
mod filter;
mod scheduler;

pub use extractor::{extract, ExtractedPage};
pub use fetcher::{build_http_client, Fetched, Fetcher};
pub use filter::is_eligible;
pub use scheduler::Scheduler;

use crate::config::CrawlConfig;
use crate::record::DocumentCollection;
use crate::Result;

/// Runs a complete crawl and returns the ordered document collection
///
/// Per-page fetch failures are logged and skipped; reaching the page
/// ceiling is a normal stop. The only errors surfaced here are
/// construction-time ones (client build, malformed seed URLs).
pub async fn crawl(config: CrawlConfig) -> Result<DocumentCollection> {
    let scheduler = Scheduler::new(config)?;
    let collection = scheduler.run().await;

    tracing::info!("Crawl collected {} pages", collection.len());
    Ok(collection)
}
