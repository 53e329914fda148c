//! Filters for single-valued entry attributes: format, difficulty and
//! competitor.
//!
//! Each filter holds a `Choice`, so an `all` choice admits everything.
//! `FilterPipeline` leaves such filters out anyway.

use crate::filter_set::Choice;
use crate::traits::Filter;
use catalog::{CatalogEntry, Difficulty, FacetId, Format};

/// Keeps entries delivered in one format.
pub struct FormatFilter {
    format: Choice<Format>,
}

impl FormatFilter {
    pub fn new(format: impl Into<Choice<Format>>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Filter for FormatFilter {
    fn name(&self) -> &str {
        "FormatFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        self.format.admits(entry.format.as_ref())
    }
}

/// Keeps entries at one difficulty level.
pub struct DifficultyFilter {
    difficulty: Choice<Difficulty>,
}

impl DifficultyFilter {
    pub fn new(difficulty: impl Into<Choice<Difficulty>>) -> Self {
        Self {
            difficulty: difficulty.into(),
        }
    }
}

impl Filter for DifficultyFilter {
    fn name(&self) -> &str {
        "DifficultyFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        self.difficulty.admits(entry.difficulty.as_ref())
    }
}

/// Keeps entries (usually battle cards) about one competitor.
pub struct CompetitorFilter {
    competitor: Choice<FacetId>,
}

impl CompetitorFilter {
    pub fn new(competitor: impl Into<Choice<FacetId>>) -> Self {
        Self {
            competitor: competitor.into(),
        }
    }
}

impl Filter for CompetitorFilter {
    fn name(&self) -> &str {
        "CompetitorFilter"
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        match self.competitor.value() {
            None => true,
            Some(wanted) => entry.competitor_id() == Some(wanted.as_str()),
        }
    }
}
