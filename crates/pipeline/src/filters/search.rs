//! Free-text search over titles and descriptions.
//!
//! Plain case-insensitive substring matching. There is no ranking: an entry
//! either contains the query or it does not.

use crate::traits::Filter;
use catalog::CatalogEntry;

/// Keeps entries whose title or description contains the query.
pub struct SearchFilter {
    /// Trimmed, lowercased query; empty means "match everything"
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        entry.title.to_lowercase().contains(&self.needle)
            || entry.description.to_lowercase().contains(&self.needle)
    }
}
