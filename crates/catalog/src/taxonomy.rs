//! Facet taxonomy derived from a catalog.
//!
//! Renderers need the list of available values per facet (with counts) to
//! draw filter panels. Matching never consults this; it only compares ids.

use crate::types::{CatalogEntry, CatalogIndex, FacetId, FacetKind, FacetRef};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One selectable facet value and how many entries carry it
#[derive(Debug, Clone, PartialEq)]
pub struct FacetValue {
    pub facet: FacetRef,
    pub count: usize,
}

/// Available facet values per kind, sorted for display.
#[derive(Debug, Clone, Default)]
pub struct FacetTaxonomy {
    facets: BTreeMap<FacetKind, Vec<FacetValue>>,
    competitors: Vec<FacetValue>,
}

impl FacetTaxonomy {
    /// Collect the distinct values of every facet kind.
    ///
    /// The first reference seen for an id is the one kept for display.
    /// Each kind is counted on its own Rayon task.
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let facets: BTreeMap<FacetKind, Vec<FacetValue>> = FacetKind::ALL
            .par_iter()
            .map(|&kind| (kind, count_values(entries.iter().map(|e| e.facet_refs(kind)))))
            .collect();

        let competitors = count_values(entries.iter().map(|e| e.competitor.as_slice()));

        Self {
            facets,
            competitors,
        }
    }

    /// Values of one facet kind, ordered by `order()` then name
    pub fn values(&self, kind: FacetKind) -> &[FacetValue] {
        self.facets.get(&kind).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn competitors(&self) -> &[FacetValue] {
        &self.competitors
    }

    /// Display name for a facet id, if the catalog knows it
    pub fn name_of(&self, kind: FacetKind, id: &str) -> Option<&str> {
        find_name(self.values(kind), id)
    }

    pub fn competitor_name(&self, id: &str) -> Option<&str> {
        find_name(&self.competitors, id)
    }
}

impl CatalogIndex {
    /// Taxonomy of the facet values present in this catalog
    pub fn taxonomy(&self) -> FacetTaxonomy {
        FacetTaxonomy::from_entries(self.entries())
    }
}

fn find_name<'a>(values: &'a [FacetValue], id: &str) -> Option<&'a str> {
    values
        .iter()
        .find(|value| value.facet.id == id)
        .map(|value| value.facet.name.as_str())
}

/// Count entries per facet id. An entry that lists the same id twice is
/// counted once.
fn count_values<'a>(per_entry: impl Iterator<Item = &'a [FacetRef]>) -> Vec<FacetValue> {
    let mut seen: HashMap<&'a FacetId, usize> = HashMap::new();
    let mut values: Vec<FacetValue> = Vec::new();

    for refs in per_entry {
        let mut in_entry: HashSet<&FacetId> = HashSet::new();
        for facet in refs {
            if !in_entry.insert(&facet.id) {
                continue;
            }
            match seen.get(&facet.id) {
                Some(&pos) => values[pos].count += 1,
                None => {
                    seen.insert(&facet.id, values.len());
                    values.push(FacetValue {
                        facet: facet.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal (order, name) pairs
    values.sort_by(|a, b| {
        a.facet
            .order()
            .cmp(&b.facet.order())
            .then_with(|| a.facet.name.to_lowercase().cmp(&b.facet.name.to_lowercase()))
    });
    values
}
