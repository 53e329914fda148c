//! Active-filter summary: counts and removable chips.
//!
//! The count is per engaged key, not per selected id: three selected
//! products are one active filter.

use crate::filter_set::{Choice, FilterSet};
use catalog::{FacetId, FacetKind, FacetTaxonomy};
use serde::Serialize;
use std::fmt;

/// Which key of a FilterSet a chip belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    Facet(FacetKind),
    Format,
    Difficulty,
    Competitor,
    Search,
}

impl FilterKey {
    pub fn key(self) -> &'static str {
        match self {
            FilterKey::Facet(kind) => kind.key(),
            FilterKey::Format => "format",
            FilterKey::Difficulty => "difficulty",
            FilterKey::Competitor => "competitor",
            FilterKey::Search => "search",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What clicking a chip's remove button does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RemoveAction {
    /// Drop one id from an array facet, keeping the others
    RemoveId { kind: FacetKind, id: FacetId },
    /// Clear a key entirely
    Clear(FilterKey),
}

impl RemoveAction {
    /// A new FilterSet with this removal applied. The input is not touched.
    pub fn apply(&self, filters: &FilterSet) -> FilterSet {
        let mut next = filters.clone();
        match self {
            RemoveAction::RemoveId { kind, id } => {
                next.ids_mut(*kind).retain(|selected| selected != id);
            }
            RemoveAction::Clear(FilterKey::Facet(kind)) => next.ids_mut(*kind).clear(),
            RemoveAction::Clear(FilterKey::Format) => next.format = None,
            RemoveAction::Clear(FilterKey::Difficulty) => next.difficulty = None,
            RemoveAction::Clear(FilterKey::Competitor) => next.competitor = None,
            RemoveAction::Clear(FilterKey::Search) => next.search = None,
        }
        next
    }
}

/// One removable chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilter {
    pub key: FilterKey,
    /// Raw value (facet id, enum string, search text)
    pub value: String,
    /// What to show on the chip
    pub label: String,
    pub remove: RemoveAction,
}

/// Number of engaged keys. `all` choices and blank searches do not count.
pub fn count_active(filters: &FilterSet) -> usize {
    let facets = FacetKind::ALL
        .iter()
        .filter(|&&kind| !filters.ids(kind).is_empty())
        .count();
    let scalars = [
        is_concrete(&filters.format),
        is_concrete(&filters.difficulty),
        is_concrete(&filters.competitor),
        filters.search_query().is_some(),
    ];

    facets + scalars.iter().filter(|&&active| active).count()
}

/// Chips for every active constraint, labelled with raw values.
pub fn describe(filters: &FilterSet) -> Vec<ActiveFilter> {
    build_chips(filters, |_, id| id.to_string())
}

/// Chips labelled with display names from the taxonomy, falling back to
/// the raw id when the catalog does not know it.
pub fn describe_labeled(filters: &FilterSet, taxonomy: &FacetTaxonomy) -> Vec<ActiveFilter> {
    build_chips(filters, |key, id| {
        let name = match key {
            FilterKey::Facet(kind) => taxonomy.name_of(kind, id),
            FilterKey::Competitor => taxonomy.competitor_name(id),
            _ => None,
        };
        name.unwrap_or(id).to_string()
    })
}

/// The empty set, for a "clear all" control.
pub fn clear_all() -> FilterSet {
    FilterSet::new()
}

fn is_concrete<T>(choice: &Option<Choice<T>>) -> bool {
    choice.as_ref().is_some_and(|c| !c.is_all())
}

fn build_chips(filters: &FilterSet, label: impl Fn(FilterKey, &str) -> String) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    for kind in FacetKind::ALL {
        let key = FilterKey::Facet(kind);
        for id in filters.ids(kind) {
            chips.push(ActiveFilter {
                key,
                value: id.clone(),
                label: label(key, id),
                remove: RemoveAction::RemoveId {
                    kind,
                    id: id.clone(),
                },
            });
        }
    }

    let mut scalar = |key: FilterKey, value: String, text: String| {
        chips.push(ActiveFilter {
            key,
            value,
            label: text,
            remove: RemoveAction::Clear(key),
        });
    };

    if let Some(format) = filters.format.as_ref().and_then(Choice::value) {
        scalar(FilterKey::Format, format.to_string(), format.to_string());
    }
    if let Some(difficulty) = filters.difficulty.as_ref().and_then(Choice::value) {
        scalar(FilterKey::Difficulty, difficulty.to_string(), difficulty.to_string());
    }
    if let Some(competitor) = filters.competitor.as_ref().and_then(Choice::value) {
        let text = label(FilterKey::Competitor, competitor);
        scalar(FilterKey::Competitor, competitor.clone(), text);
    }
    if let Some(query) = filters.search_query() {
        scalar(FilterKey::Search, query.to_string(), format!("\"{}\"", query));
    }

    chips
}
