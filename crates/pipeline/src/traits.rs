//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets independent entry
//! predicates be composed into a FilterPipeline.

use catalog::CatalogEntry;

/// A single inclusion predicate over catalog entries.
///
/// ## Design Note
/// - `Send + Sync` so a built pipeline can be shared behind an `Arc`
/// - `matches` must be total: missing data on the entry means "no match",
///   never a panic
/// - Filters borrow entries and return borrowed subsets; the catalog itself
///   is never copied or mutated
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether one entry passes this filter
    fn matches(&self, entry: &CatalogEntry) -> bool;

    /// Keep the entries that pass, preserving their order.
    fn apply<'a>(&self, entries: Vec<&'a CatalogEntry>) -> Vec<&'a CatalogEntry> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .collect()
    }
}
