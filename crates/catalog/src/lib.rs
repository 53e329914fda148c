//! # Catalog Crate
//!
//! Loads and indexes the content hub catalog: training sessions, playbooks,
//! battle cards and articles exported from the CMS as JSON.
//!
//! ## Main Components
//!
//! - **types**: Domain types (CatalogEntry, FacetRef, FacetKind, CatalogIndex)
//! - **parser**: Parse catalog JSON files into entries
//! - **index**: Load a catalog directory into a CatalogIndex
//! - **taxonomy**: Available facet values with counts, for filter panels
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogIndex, FacetKind};
//! use std::path::Path;
//!
//! let index = CatalogIndex::load_from_dir(Path::new("data/catalog"))?;
//! let entry = index.get("t-onboarding").unwrap();
//! let taxonomy = index.taxonomy();
//!
//! for value in taxonomy.values(FacetKind::Products) {
//!     println!("{} ({})", value.facet.name, value.count);
//! }
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod taxonomy;

pub use error::{CatalogError, Result};
pub use taxonomy::{FacetTaxonomy, FacetValue};
pub use types::{
    // Type aliases
    EntryId,
    FacetId,
    // Core types
    CatalogEntry,
    CatalogIndex,
    FacetRef,
    // Enums
    Difficulty,
    EntryKind,
    FacetKind,
    Format,
    UnknownVariant,
    // Fallbacks
    DEFAULT_FACET_COLOR,
    DEFAULT_FACET_ORDER,
};
