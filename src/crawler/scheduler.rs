//! Crawl scheduling — the breadth-first engine
//!
//! The scheduler owns the frontier queue, the visited set, and the growing
//! result collection for exactly one crawl run. It drives the
//! fetch → extract → filter → enqueue cycle until the frontier is empty or
//! the page ceiling is reached; both terminations are normal, never errors.

use crate::config::CrawlConfig;
use crate::crawler::extractor::extract;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::filter::is_eligible;
use crate::record::DocumentCollection;
use crate::url::canonicalize;
use crate::Result;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Owns all mutable crawl state for one run
///
/// Nothing here is shared across runs or processes; running two schedulers
/// in one process gives two fully independent crawls.
pub struct Scheduler {
    config: CrawlConfig,
    fetcher: Fetcher,

    /// URLs pending visit, in discovery order
    frontier: VecDeque<Url>,

    /// Canonical URLs already fetched or enqueued; nothing in here is ever
    /// re-enqueued, even when rediscovered via another page
    visited: HashSet<String>,

    results: DocumentCollection,
}

impl Scheduler {
    /// Creates a scheduler with the frontier seeded from the start path and
    /// any additional paths
    ///
    /// Seed URLs are canonicalized and pre-inserted into the visited set so
    /// a page linking back to a seed never re-enqueues it.
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let fetcher = Fetcher::new(config.fetch_mode)?;

        let mut scheduler = Self {
            config,
            fetcher,
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            results: DocumentCollection::new(),
        };
        scheduler.seed()?;

        Ok(scheduler)
    }

    fn seed(&mut self) -> Result<()> {
        let mut paths = vec![self.config.start_path.clone()];
        paths.extend(self.config.additional_paths.iter().cloned());

        for path in paths {
            let seed = canonicalize(self.config.base_url.join(&path)?);
            if self.visited.insert(seed.as_str().to_string()) {
                self.frontier.push_back(seed);
            }
        }

        Ok(())
    }

    /// Runs the crawl to completion and returns the ordered collection
    ///
    /// The rendering engine, if one was launched, is torn down on every
    /// exit path, including the page-ceiling early stop.
    pub async fn run(mut self) -> DocumentCollection {
        self.crawl_loop().await;
        self.fetcher.shutdown().await;
        self.results
    }

    /// The core loop: dequeue, fetch, extract, record, enqueue, sleep
    async fn crawl_loop(&mut self) {
        while self.results.len() < self.config.max_pages {
            let Some(url) = self.frontier.pop_front() else {
                break;
            };

            self.visit(&url).await;

            // Politeness delay between two fetches. It is skipped when no
            // fetch follows (empty frontier or ceiling reached).
            if !self.frontier.is_empty() && self.results.len() < self.config.max_pages {
                tokio::time::sleep(self.config.delay).await;
            }
        }

        if self.frontier.is_empty() {
            tracing::info!("Frontier is empty, crawl complete");
        } else {
            tracing::info!(
                "Page ceiling of {} reached with {} URLs still queued",
                self.config.max_pages,
                self.frontier.len()
            );
        }
    }

    /// Processes a single URL
    ///
    /// Fetch errors skip the URL: it stays marked visited (never retried
    /// this run) and produces no record. Extraction cannot fail; a page
    /// with no usable content degrades to an empty-body record.
    async fn visit(&mut self, url: &Url) {
        let fetched = match self.fetcher.fetch(url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", url, e);
                return;
            }
        };

        let page = extract(&fetched.body, &self.config.selector, url);

        tracing::info!(
            "Saved page {}: {} ({})",
            self.results.len(),
            if page.title.is_empty() { url.as_str() } else { &page.title },
            url
        );
        self.results.push(url, page.title, page.body);

        for link in page.links {
            if is_eligible(&link, &self.config, &self.visited) {
                let canonical = canonicalize(link);
                self.visited.insert(canonical.as_str().to_string());
                self.frontier.push_back(canonical);
            }
        }
    }

    /// Returns the number of URLs awaiting fetch
    pub fn frontier_size(&self) -> usize {
        self.frontier.len()
    }

    /// Returns the number of pages accepted so far
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchMode;
    use std::path::PathBuf;
    use std::time::Duration;

    fn create_test_config() -> CrawlConfig {
        CrawlConfig {
            base_url: Url::parse("https://example.com").unwrap(),
            start_path: "/docs/".to_string(),
            additional_paths: vec![],
            selector: "main".to_string(),
            path_pattern: None,
            delay: Duration::from_millis(10),
            max_pages: 100,
            fetch_mode: FetchMode::Static,
            output_path: PathBuf::from("out.json"),
            debug: false,
        }
    }

    #[test]
    fn test_seeds_start_path() {
        let scheduler = Scheduler::new(create_test_config()).unwrap();
        assert_eq!(scheduler.frontier_size(), 1);
        assert_eq!(scheduler.result_count(), 0);
        assert!(scheduler.visited.contains("https://example.com/docs"));
    }

    #[test]
    fn test_seeds_additional_paths_in_order() {
        let mut config = create_test_config();
        config.additional_paths = vec!["/docs/models".to_string(), "/docs/quickstart".to_string()];

        let scheduler = Scheduler::new(config).unwrap();
        assert_eq!(scheduler.frontier_size(), 3);
        assert_eq!(
            scheduler.frontier[0].as_str(),
            "https://example.com/docs"
        );
        assert_eq!(
            scheduler.frontier[1].as_str(),
            "https://example.com/docs/models"
        );
        assert_eq!(
            scheduler.frontier[2].as_str(),
            "https://example.com/docs/quickstart"
        );
    }

    #[test]
    fn test_duplicate_seeds_enqueued_once() {
        let mut config = create_test_config();
        // Same page as the start path after canonicalization
        config.additional_paths = vec!["/docs".to_string()];

        let scheduler = Scheduler::new(config).unwrap();
        assert_eq!(scheduler.frontier_size(), 1);
    }

    // The full crawl cycle, including BFS ordering, the page ceiling, and
    // fetch-error recovery, is exercised against mock servers in
    // tests/crawl_tests.rs.
}
