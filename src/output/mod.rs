//! Document store: persisting and loading the crawled collection
//!
//! One crawl run produces one JSON file. Writing happens once, after the
//! crawl finishes; there is no streaming or partial persistence, so a crash
//! mid-crawl simply loses that run's in-memory progress.

mod json;

pub use json::{load_collection, write_collection};
