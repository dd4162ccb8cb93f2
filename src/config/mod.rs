//! Configuration module for docsweep
//!
//! A crawl is configured either from a named preset, from explicit CLI
//! flags, or from a preset with individual fields overridden by flags.
//! Validation runs before any crawling starts.

pub mod presets;
mod types;
pub mod validation;

// Re-export types
pub use types::{CrawlConfig, FetchMode};

// Re-export the preset resolver
pub use presets::{resolve, PRESET_NAMES};
pub use validation::validate;
