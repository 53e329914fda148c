//! # Content Hub
//!
//! Runs the full catalog view pipeline for one page render:
//! 1. Merge page defaults with the user's filters
//! 2. Select matching entries
//! 3. Sort them by the page's sort key
//! 4. Split off the featured band (from the whole catalog)
//! 5. Paginate the rest
//! 6. Summarise the user's active filters for chips
//!
//! Every render recomputes from scratch. Nothing is cached between renders,
//! so a newer render simply replaces the previous one.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use catalog::{CatalogEntry, CatalogIndex, FacetTaxonomy};
use pipeline::{
    count_active, describe_labeled, extract_featured, merge, paginate, select, sort, ActiveFilter,
    FilterSet, Page,
};

use crate::page::{Layout, PageContext, PageState};

/// Everything a renderer needs to draw one page
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub layout: Layout,
    /// Featured band, shown above the main list
    pub featured: Vec<&'a CatalogEntry>,
    /// Current page of the main list (featured entries removed)
    pub page: Page<&'a CatalogEntry>,
    /// Entries matching the effective filters, before featured removal
    pub total_matches: usize,
    /// Engaged user filter keys, for the "N filters" badge
    pub active_count: usize,
    /// Removable chips for the user's filters
    pub active_filters: Vec<ActiveFilter>,
    /// Defaults merged with user filters, as used for matching
    pub effective: FilterSet,
}

/// Entry point for rendering hub pages over a shared catalog
#[derive(Debug, Clone)]
pub struct ContentHub {
    index: Arc<CatalogIndex>,
    taxonomy: Arc<FacetTaxonomy>,
}

impl ContentHub {
    /// Create a hub over a loaded catalog. The facet taxonomy is built once
    /// here and shared by every render.
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        let taxonomy = Arc::new(index.taxonomy());
        Self { index, taxonomy }
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    /// Available facet values, for drawing filter panels
    pub fn taxonomy(&self) -> &FacetTaxonomy {
        &self.taxonomy
    }

    /// Render a page as of now.
    pub fn render(&self, ctx: &PageContext, state: &PageState) -> PageView<'_> {
        self.render_at(ctx, state, Utc::now())
    }

    /// Render a page with an explicit "now" for the recency window.
    pub fn render_at(&self, ctx: &PageContext, state: &PageState, now: DateTime<Utc>) -> PageView<'_> {
        let start_time = Instant::now();
        let entries = self.index.entries();

        let effective = merge(&ctx.defaults, &state.filters);
        debug!("Effective filters: {:?}", effective);

        let matched = select(entries, &effective);
        let total_matches = matched.len();
        let visible = sort(&matched, ctx.sort);

        let (featured, remainder) = match &ctx.featured {
            Some(config) if config.count > 0 => {
                let all: Vec<&CatalogEntry> = entries.iter().collect();
                let candidates = sort(&all, ctx.sort);
                let split = extract_featured(&candidates, &visible, &config.filter, config.count, now);
                (split.featured, split.remainder)
            }
            _ => (Vec::new(), visible),
        };

        let page = paginate(&remainder, ctx.page_size, state.page);
        let active_filters = describe_labeled(&state.filters, &self.taxonomy);
        let active_count = count_active(&state.filters);

        info!(
            "Rendered page {}/{}: {} of {} entries matched, {} featured, {} active filters in {:.2?}",
            page.page_number,
            page.total_pages,
            total_matches,
            entries.len(),
            featured.len(),
            active_count,
            start_time.elapsed()
        );

        PageView {
            layout: ctx.layout,
            featured,
            page,
            total_matches,
            active_count,
            active_filters,
            effective,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{FacetKind, FacetRef};
    use chrono::TimeZone;
    use pipeline::FeaturedFilter;

    use crate::page::FeaturedConfig;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn build_test_hub() -> ContentHub {
        let entries = (1..=6)
            .map(|n| {
                let mut entry = CatalogEntry::new(format!("e{}", n), format!("Entry {}", n));
                entry.products = vec![FacetRef::new(if n % 2 == 0 { "even" } else { "odd" }, "Parity")];
                entry.publish_date = Some(Utc.with_ymd_and_hms(2024, 1, n, 0, 0, 0).unwrap());
                entry.featured = n == 1 || n == 6;
                entry
            })
            .collect();
        ContentHub::new(Arc::new(CatalogIndex::from_entries(entries).unwrap()))
    }

    fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.clone()).collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_render_without_featured() {
        let hub = build_test_hub();
        let ctx = PageContext {
            page_size: 2,
            ..PageContext::default()
        };

        let view = hub.render_at(&ctx, &PageState::default(), now());
        assert!(view.featured.is_empty());
        assert_eq!(ids(&view.page.items), ["e6", "e5"]);
        assert_eq!(view.page.total_pages, 3);
        assert_eq!(view.total_matches, 6);
        assert_eq!(view.active_count, 0);
    }

    #[test]
    fn test_defaults_are_not_chips() {
        let hub = build_test_hub();
        let ctx = PageContext {
            defaults: FilterSet::new().with_ids(FacetKind::Products, ["even"]),
            ..PageContext::default()
        };

        let view = hub.render_at(&ctx, &PageState::default(), now());
        assert_eq!(ids(&view.page.items), ["e6", "e4", "e2"]);
        assert!(view.active_filters.is_empty());
        assert_eq!(view.effective.ids(FacetKind::Products), ["even"]);
    }

    #[test]
    fn test_featured_band_removed_from_main_list() {
        let hub = build_test_hub();
        let ctx = PageContext {
            featured: Some(FeaturedConfig {
                filter: FeaturedFilter {
                    featured_only: true,
                    ..FeaturedFilter::default()
                },
                count: 1,
            }),
            ..PageContext::default()
        };

        let view = hub.render_at(&ctx, &PageState::default(), now());
        // Candidates follow the page sort, so the newest flagged entry wins
        assert_eq!(ids(&view.featured), ["e6"]);
        assert_eq!(ids(&view.page.items), ["e5", "e4", "e3", "e2", "e1"]);
        assert_eq!(view.total_matches, 6);
    }

    #[test]
    fn test_out_of_range_page_renders_empty() {
        let hub = build_test_hub();
        let view = hub.render_at(&PageContext::default(), &PageState::default().with_page(40), now());

        assert!(view.page.items.is_empty());
        assert_eq!(view.page.total_pages, 1);
    }
}
