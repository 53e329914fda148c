//! The FilterPipeline ANDs multiple filters together.
//!
//! This module provides the FilterPipeline builder plus the facet matcher
//! entry points (`matches`, `select`) that build a pipeline from a FilterSet.

use crate::filter_set::FilterSet;
use crate::filters::{CompetitorFilter, DifficultyFilter, FacetFilter, FormatFilter, SearchFilter};
use crate::traits::Filter;
use catalog::{CatalogEntry, FacetKind};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// An entry passes the pipeline when it passes every filter. An empty
/// pipeline passes everything.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(FacetFilter::new(FacetKind::Products, vec!["p-core".into()]))
///     .add_filter(FormatFilter::new(Format::Video));
///
/// let visible = pipeline.select(index.entries());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the pipeline that enforces every populated key of a FilterSet.
    ///
    /// Empty id lists, `all` choices and blank searches add no filter.
    pub fn from_filter_set(filters: &FilterSet) -> Self {
        let mut pipeline = Self::new();

        for kind in FacetKind::ALL {
            let ids = filters.ids(kind);
            if !ids.is_empty() {
                pipeline = pipeline.add_filter(FacetFilter::new(kind, ids.to_vec()));
            }
        }
        if let Some(&format) = filters.format.as_ref().and_then(|c| c.value()) {
            pipeline = pipeline.add_filter(FormatFilter::new(format));
        }
        if let Some(&difficulty) = filters.difficulty.as_ref().and_then(|c| c.value()) {
            pipeline = pipeline.add_filter(DifficultyFilter::new(difficulty));
        }
        if let Some(competitor) = filters.competitor.as_ref().and_then(|c| c.value()) {
            pipeline = pipeline.add_filter(CompetitorFilter::new(competitor.clone()));
        }
        if let Some(query) = filters.search_query() {
            pipeline = pipeline.add_filter(SearchFilter::new(query));
        }

        pipeline
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether one entry passes every filter
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        self.filters.iter().all(|filter| filter.matches(entry))
    }

    /// Apply all filters in sequence, preserving entry order.
    ///
    /// ## Algorithm
    /// 1. Start with the input entries
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the surviving entries
    pub fn apply<'a>(&self, entries: Vec<&'a CatalogEntry>) -> Vec<&'a CatalogEntry> {
        let mut current = entries;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Borrow the matching entries out of a catalog slice.
    pub fn select<'a>(&self, entries: &'a [CatalogEntry]) -> Vec<&'a CatalogEntry> {
        self.apply(entries.iter().collect())
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `entry` satisfies every populated key of `filters`.
///
/// AND across keys, OR within an array key. Never panics: missing data on
/// the entry just fails the keys that constrain it.
pub fn matches(entry: &CatalogEntry, filters: &FilterSet) -> bool {
    FilterPipeline::from_filter_set(filters).matches(entry)
}

/// The entries of `entries` that match `filters`, in their original order.
pub fn select<'a>(entries: &'a [CatalogEntry], filters: &FilterSet) -> Vec<&'a CatalogEntry> {
    FilterPipeline::from_filter_set(filters).select(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_set::Choice;
    use catalog::{Difficulty, FacetRef, Format};

    fn entry(id: &str, products: &[&str], teams: &[&str]) -> CatalogEntry {
        let mut entry = CatalogEntry::new(id, format!("Entry {}", id));
        entry.products = products.iter().map(|p| FacetRef::new(*p, *p)).collect();
        entry.teams = teams.iter().map(|t| FacetRef::new(*t, *t)).collect();
        entry
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let entries = vec![entry("1", &[], &[]), entry("2", &["A"], &[])];

        assert!(pipeline.is_empty());
        assert_eq!(pipeline.select(&entries).len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let entries = vec![entry("1", &["A"], &[]), entry("2", &["B"], &[])];
        let pipeline = FilterPipeline::new()
            .add_filter(FacetFilter::new(FacetKind::Products, vec!["B".into()]));

        let kept = pipeline.select(&entries);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "2");
    }

    #[test]
    fn test_from_filter_set_skips_unconstrained_keys() {
        let filters = FilterSet::new()
            .with_format(Choice::All)
            .with_search("  ")
            .with_ids(FacetKind::Teams, Vec::<String>::new());

        assert!(FilterPipeline::from_filter_set(&filters).is_empty());
    }

    #[test]
    fn test_and_across_keys_or_within() {
        let entries = vec![
            entry("1", &["A"], &["sales"]),
            entry("2", &["B"], &["sales"]),
            entry("3", &["A"], &["support"]),
            entry("4", &["C"], &["sales"]),
        ];
        let filters = FilterSet::new()
            .with_ids(FacetKind::Products, ["A", "B"])
            .with_ids(FacetKind::Teams, ["sales"]);

        let ids: Vec<&str> = select(&entries, &filters)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_scalar_keys() {
        let mut entry = entry("1", &[], &[]);
        entry.format = Some(Format::Video);
        entry.difficulty = Some(Difficulty::Beginner);

        assert!(matches(&entry, &FilterSet::new().with_format(Format::Video)));
        assert!(matches(&entry, &FilterSet::new().with_format(Choice::All)));
        assert!(!matches(&entry, &FilterSet::new().with_format(Format::Async)));
        assert!(!matches(
            &entry,
            &FilterSet::new()
                .with_format(Format::Video)
                .with_difficulty(Difficulty::Advanced)
        ));
        assert!(!matches(&entry, &FilterSet::new().with_competitor("acme")));
        assert!(matches(&entry, &FilterSet::new().with_competitor(Choice::All)));
    }

    #[test]
    fn test_empty_filter_set_matches_everything() {
        let bare = CatalogEntry::new("bare", "");
        assert!(matches(&bare, &FilterSet::new()));
    }
}
