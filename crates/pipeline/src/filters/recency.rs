//! Filter for recently published entries.
//!
//! Used by the featured band to surface what is new on a page.

use crate::traits::Filter;
use catalog::CatalogEntry;
use chrono::{DateTime, TimeDelta, Utc};

/// Keeps entries published no more than `days_recent` days before `now`.
///
/// ## Algorithm
/// 1. cutoff = now - days_recent days
/// 2. Keep entries with publish_date >= cutoff (inclusive)
/// 3. Entries without a publish date are dropped
///
/// The window is one-sided: it bounds how old an entry may be, not how far
/// ahead. Entries dated after `now` (scheduled sessions) always count as
/// recent, however far in the future.
pub struct RecencyFilter {
    cutoff: Option<DateTime<Utc>>,
}

impl RecencyFilter {
    /// Create a new RecencyFilter.
    ///
    /// # Arguments
    /// * `days_recent` - Size of the window in days
    /// * `now` - The reference instant, passed in so renders are reproducible
    pub fn new(days_recent: u32, now: DateTime<Utc>) -> Self {
        // A window too large to represent keeps every dated entry
        let cutoff = TimeDelta::try_days(i64::from(days_recent))
            .and_then(|window| now.checked_sub_signed(window));
        Self { cutoff }
    }
}

impl Filter for RecencyFilter {
    fn name(&self) -> &str {
        "RecencyFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        match (entry.publish_date, self.cutoff) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(published), Some(cutoff)) => published >= cutoff,
        }
    }
}
