//! Filter implementations for the catalog pipeline.
//!
//! Each filter checks one concern. A FilterPipeline ANDs them together.

pub mod attribute;
pub mod facet;
pub mod flags;
pub mod recency;
pub mod search;

// Re-export for convenience
pub use attribute::{CompetitorFilter, DifficultyFilter, FormatFilter};
pub use facet::FacetFilter;
pub use flags::{FeaturedFlagFilter, UpcomingFilter};
pub use recency::RecencyFilter;
pub use search::SearchFilter;
