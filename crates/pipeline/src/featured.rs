//! Splitting a featured band off the main list.
//!
//! Featured content is page-level curation: candidates come from the whole
//! catalog, not from what the user's filters left over. Whatever lands in
//! the featured band is then removed from the main list so nothing shows up
//! twice.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{FeaturedFlagFilter, RecencyFilter, UpcomingFilter};
use catalog::CatalogEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Secondary filter deciding which entries may be featured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturedFilter {
    /// Only entries marked `showInUpcoming`
    pub show_in_upcoming: bool,
    /// Only entries published within this many days of now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_recent: Option<u32>,
    /// Only entries an editor flagged `featured`
    pub featured_only: bool,
}

impl FeaturedFilter {
    /// The candidate predicate as a pipeline, evaluated against `now`.
    pub fn pipeline(&self, now: DateTime<Utc>) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if self.show_in_upcoming {
            pipeline = pipeline.add_filter(UpcomingFilter);
        }
        if let Some(days) = self.days_recent {
            pipeline = pipeline.add_filter(RecencyFilter::new(days, now));
        }
        if self.featured_only {
            pipeline = pipeline.add_filter(FeaturedFlagFilter);
        }
        pipeline
    }
}

/// The featured band and what is left of the main list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedSplit<'a> {
    pub featured: Vec<&'a CatalogEntry>,
    pub remainder: Vec<&'a CatalogEntry>,
}

/// Pick up to `count` featured entries from `all` and drop them from `main`.
///
/// ## Algorithm
/// 1. Walk `all` in order, keeping entries that pass `filter`
/// 2. Stop after `count` candidates (a plain prefix, no re-ranking)
/// 3. Build the featured id set once
/// 4. Remainder = `main` without those ids, order preserved
///
/// Callers sort `all` first if the featured order matters.
pub fn extract_featured<'a>(
    all: &[&'a CatalogEntry],
    main: &[&'a CatalogEntry],
    filter: &FeaturedFilter,
    count: usize,
    now: DateTime<Utc>,
) -> FeaturedSplit<'a> {
    let pipeline = filter.pipeline(now);

    let featured: Vec<&'a CatalogEntry> = all
        .iter()
        .copied()
        .filter(|entry| pipeline.matches(entry))
        .take(count)
        .collect();

    let featured_ids: HashSet<&str> = featured.iter().map(|e| e.id.as_str()).collect();
    let remainder: Vec<&'a CatalogEntry> = main
        .iter()
        .copied()
        .filter(|entry| !featured_ids.contains(entry.id.as_str()))
        .collect();

    tracing::debug!(
        "Featured band: {} entries, main list {} -> {}",
        featured.len(),
        main.len(),
        remainder.len()
    );

    FeaturedSplit {
        featured,
        remainder,
    }
}
