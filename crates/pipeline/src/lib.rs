//! Filtering and presentation engine for the content hub catalog.
//!
//! This crate provides:
//! - FilterSet, the sparse set of facet constraints
//! - Filter trait and implementations, composed by FilterPipeline
//! - merge for layering page defaults under user filters
//! - sort, extract_featured and paginate for shaping the visible list
//! - count_active / describe for the active-filter chips
//!
//! ## Architecture
//! A render runs these stages, each a pure function over borrowed entries:
//! 1. merge(defaults, user) gives the effective FilterSet
//! 2. select keeps the entries matching it (AND across keys, OR within)
//! 3. sort orders them by the page's sort key
//! 4. extract_featured splits off the featured band
//! 5. paginate slices the remainder
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{extract_featured, merge, paginate, select, sort, SortKey};
//!
//! let effective = merge(&page_defaults, &user_filters);
//! let visible = sort(&select(index.entries(), &effective), SortKey::DateDesc);
//! let all = sort(&index.entries().iter().collect::<Vec<_>>(), SortKey::DateDesc);
//! let split = extract_featured(&all, &visible, &featured_filter, 3, Utc::now());
//! let page = paginate(&split.remainder, 12, 1);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_set;
pub mod filter_pipeline;
pub mod merge;
pub mod sort;
pub mod featured;
pub mod paginate;
pub mod summary;

// Re-export main types
pub use traits::Filter;
pub use filter_set::{Choice, FilterSet};
pub use filter_pipeline::{matches, select, FilterPipeline};
pub use merge::merge;
pub use sort::{sort, SortKey};
pub use featured::{extract_featured, FeaturedFilter, FeaturedSplit};
pub use paginate::{clamp_page, paginate, Page};
pub use summary::{clear_all, count_active, describe, describe_labeled, ActiveFilter, FilterKey, RemoveAction};
