//! Hub crate for the content hub.
//!
//! This crate holds the page-level configuration and the ContentHub that
//! runs the catalog view pipeline for one render.

pub mod content_hub;
pub mod page;

pub use content_hub::{ContentHub, PageView};
pub use page::{FeaturedConfig, Layout, PageContext, PageState, DEFAULT_FEATURED_COUNT, DEFAULT_PAGE_SIZE};
