//! Page records and the ordered document collection
//!
//! A [`PageRecord`] is created once per successfully crawled page and never
//! mutated. The [`DocumentCollection`] owns insertion order: `position` is
//! assigned at push time, so positions are contiguous from 0 by construction.

use serde::{Deserialize, Serialize};
use url::Url;

/// One crawled page: canonical URL, extracted title and body, and the order
/// in which it was accepted into the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub body: String,
    pub position: usize,
}

/// The final ordered sequence of page records for one crawl run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentCollection {
    records: Vec<PageRecord>,
}

impl DocumentCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, assigning it the next position
    pub fn push(&mut self, url: &Url, title: String, body: String) {
        let position = self.records.len();
        self.records.push(PageRecord {
            url: url.as_str().to_string(),
            title,
            body,
            position,
        });
    }

    /// Returns the records in insertion order
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// Looks up a record by its exact URL string
    ///
    /// This is the lookup primitive the read-only serving collaborators
    /// build on.
    pub fn get_by_url(&self, url: &str) -> Option<&PageRecord> {
        self.records.iter().find(|r| r.url == url)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
