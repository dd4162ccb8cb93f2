//! URL handling module for docsweep
//!
//! Canonicalization and origin comparison are the identity primitives the
//! crawler deduplicates with.

mod canonical;

pub use canonical::{canonicalize, same_origin};
