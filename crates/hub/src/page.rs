//! Page configuration and per-interaction page state.
//!
//! `PageContext` is what the page builder hands us: defaults the user cannot
//! remove, layout, page size, sort order and the featured band. `PageState`
//! is the user's side: their filters and the page they are on. Both are
//! plain values; an interaction produces a new `PageState`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pipeline::{FeaturedFilter, FilterSet, SortKey};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// How the renderer lays entries out. Passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Grid,
    List,
    Carousel,
}

/// Featured band configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedConfig {
    pub filter: FeaturedFilter,
    pub count: usize,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            filter: FeaturedFilter::default(),
            count: DEFAULT_FEATURED_COUNT,
        }
    }
}

/// Rendering configuration for one hub page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageContext {
    /// Constraints the page is scoped to; never shown as removable chips
    pub defaults: FilterSet,
    pub layout: Layout,
    pub page_size: usize,
    pub sort: SortKey,
    /// No featured band when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<FeaturedConfig>,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            defaults: FilterSet::new(),
            layout: Layout::default(),
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
            featured: None,
        }
    }
}

impl PageContext {
    /// Read a page configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read page config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid page config {}", path.display()))
    }
}

/// The user's current filters and page, as an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageState {
    pub filters: FilterSet,
    /// 1-based
    pub page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            filters: FilterSet::new(),
            page: 1,
        }
    }
}

impl PageState {
    pub fn new(filters: FilterSet) -> Self {
        Self { filters, page: 1 }
    }

    /// New state with different filters. Always back on page 1: a page
    /// number from the old result set means nothing for the new one.
    pub fn with_filters(&self, filters: FilterSet) -> Self {
        Self { filters, page: 1 }
    }

    /// New state on another page with the same filters.
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            filters: self.filters.clone(),
            page,
        }
    }
}
