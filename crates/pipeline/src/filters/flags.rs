//! Filters on the editorial boolean flags of an entry.

use crate::traits::Filter;
use catalog::CatalogEntry;

/// Keeps entries marked `showInUpcoming`.
pub struct UpcomingFilter;

impl Filter for UpcomingFilter {
    fn name(&self) -> &str {
        "UpcomingFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        entry.show_in_upcoming
    }
}

/// Keeps entries an editor flagged as `featured`.
pub struct FeaturedFlagFilter;

impl Filter for FeaturedFlagFilter {
    fn name(&self) -> &str {
        "FeaturedFlagFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        entry.featured
    }
}
