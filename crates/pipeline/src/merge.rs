//! Combining page defaults with user-chosen filters.
//!
//! Page defaults scope a page ("this product's resources") and cannot be
//! removed by the user. On the same array key, default and user ids are
//! unioned into one OR-list; keys constrained only by defaults stay
//! independent AND constraints.

use crate::filter_set::FilterSet;
use catalog::FacetKind;

/// Merge page defaults and user filters into the effective filter set.
///
/// - Array keys: union, defaults first, duplicates removed
/// - Scalar keys: the user's value wins when both are present
///
/// Neither input is modified.
pub fn merge(defaults: &FilterSet, user: &FilterSet) -> FilterSet {
    let mut effective = FilterSet::new();

    for kind in FacetKind::ALL {
        let merged = effective.ids_mut(kind);
        for id in defaults.ids(kind).iter().chain(user.ids(kind)) {
            if !merged.contains(id) {
                merged.push(id.clone());
            }
        }
    }

    effective.format = user.format.clone().or_else(|| defaults.format.clone());
    effective.difficulty = user
        .difficulty
        .clone()
        .or_else(|| defaults.difficulty.clone());
    effective.competitor = user
        .competitor
        .clone()
        .or_else(|| defaults.competitor.clone());
    effective.search = user.search.clone().or_else(|| defaults.search.clone());

    effective
}
