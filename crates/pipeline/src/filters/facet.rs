//! Filter for one array-valued facet (products, teams, topics, ...).
//!
//! Selected ids within a facet are alternatives: an entry passes when it is
//! tagged with at least one of them.

use crate::traits::Filter;
use catalog::{CatalogEntry, FacetId, FacetKind};

/// Keeps entries tagged with at least one of the selected facet ids.
///
/// ## Algorithm
/// 1. Walk the entry's references for `kind`
/// 2. Pass on the first id that is in the selection
/// 3. An entry with no references for `kind` fails
pub struct FacetFilter {
    kind: FacetKind,
    ids: Vec<FacetId>,
    name: String,
}

impl FacetFilter {
    /// Create a new FacetFilter.
    ///
    /// # Arguments
    /// * `kind` - Which facet dimension to inspect
    /// * `ids` - The selected ids (OR semantics)
    pub fn new(kind: FacetKind, ids: Vec<FacetId>) -> Self {
        Self {
            kind,
            ids,
            name: format!("FacetFilter({})", kind.key()),
        }
    }
}

impl Filter for FacetFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        entry
            .facet_ids(self.kind)
            .any(|id| self.ids.iter().any(|wanted| wanted == id))
    }
}
