//! The sparse set of facet constraints applied to a catalog.
//!
//! A `FilterSet` is a value. Every change (checkbox toggle, search keystroke,
//! chip removal) produces a new set; nothing patches one in place.

use catalog::{Difficulty, FacetId, FacetKind, Format};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Sentinel string meaning "no constraint" for scalar facets
pub const ALL: &str = "all";

/// A scalar facet constraint: either the `all` sentinel or one value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Choice<T> {
    /// The concrete value, if this choice constrains anything
    pub fn value(&self) -> Option<&T> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: PartialEq> Choice<T> {
    /// Whether an entry with `actual` passes this constraint.
    ///
    /// An entry without a value never passes a concrete constraint.
    pub fn admits(&self, actual: Option<&T>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => actual == Some(wanted),
        }
    }
}

impl<T> From<T> for Choice<T> {
    fn from(value: T) -> Self {
        Choice::Only(value)
    }
}

impl From<&str> for Choice<FacetId> {
    fn from(value: &str) -> Self {
        Choice::Only(value.to_string())
    }
}

impl<T: FromStr> FromStr for Choice<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL) {
            Ok(Choice::All)
        } else {
            trimmed.parse().map(Choice::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str(ALL),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Choice<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Stored filter sets may name a format or difficulty this build does not
/// know. Such a value is dropped with a warning rather than failing the load.
fn known_choice<'de, D, T>(deserializer: D) -> Result<Option<Choice<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(choice) => Ok(Some(choice)),
        Err(err) => {
            tracing::warn!("Ignoring filter value {:?}: {}", raw, err);
            Ok(None)
        }
    }
}

/// Active facet constraints. Absent keys (empty lists, `None`) constrain
/// nothing; unrecognized keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<FacetId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teams: Vec<FacetId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<FacetId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub journey_stages: Vec<FacetId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industries: Vec<FacetId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audiences: Vec<FacetId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_types: Vec<FacetId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enablement_category: Vec<FacetId>,

    #[serde(deserialize_with = "known_choice", skip_serializing_if = "Option::is_none")]
    pub format: Option<Choice<Format>>,
    #[serde(deserialize_with = "known_choice", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Choice<Difficulty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor: Option<Choice<FacetId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterSet {
    /// The empty set: matches every entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids for one facet kind
    pub fn ids(&self, kind: FacetKind) -> &[FacetId] {
        match kind {
            FacetKind::Products => &self.products,
            FacetKind::Teams => &self.teams,
            FacetKind::Topics => &self.topics,
            FacetKind::JourneyStages => &self.journey_stages,
            FacetKind::Industries => &self.industries,
            FacetKind::Audiences => &self.audiences,
            FacetKind::ContentTypes => &self.content_types,
            FacetKind::EnablementCategory => &self.enablement_category,
        }
    }

    pub(crate) fn ids_mut(&mut self, kind: FacetKind) -> &mut Vec<FacetId> {
        match kind {
            FacetKind::Products => &mut self.products,
            FacetKind::Teams => &mut self.teams,
            FacetKind::Topics => &mut self.topics,
            FacetKind::JourneyStages => &mut self.journey_stages,
            FacetKind::Industries => &mut self.industries,
            FacetKind::Audiences => &mut self.audiences,
            FacetKind::ContentTypes => &mut self.content_types,
            FacetKind::EnablementCategory => &mut self.enablement_category,
        }
    }

    /// Replace the selection for one facet kind. Duplicate ids are dropped.
    pub fn with_ids<I, S>(mut self, kind: FacetKind, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FacetId>,
    {
        let mut selected: Vec<FacetId> = Vec::new();
        for id in ids {
            let id = id.into();
            if !selected.contains(&id) {
                selected.push(id);
            }
        }
        *self.ids_mut(kind) = selected;
        self
    }

    /// A copy with `id` toggled on or off for one facet kind.
    pub fn toggled(&self, kind: FacetKind, id: &str) -> Self {
        let mut next = self.clone();
        let ids = next.ids_mut(kind);
        match ids.iter().position(|selected| selected == id) {
            Some(pos) => {
                ids.remove(pos);
            }
            None => ids.push(id.to_string()),
        }
        next
    }

    pub fn with_format(mut self, format: impl Into<Choice<Format>>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<Choice<Difficulty>>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_competitor(mut self, competitor: impl Into<Choice<FacetId>>) -> Self {
        self.competitor = Some(competitor.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// The search text that actually constrains matching, if any
    pub fn search_query(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|query| !query.is_empty())
    }

    /// True when no key constrains anything
    pub fn is_empty(&self) -> bool {
        FacetKind::ALL.iter().all(|&kind| self.ids(kind).is_empty())
            && self.format.as_ref().is_none_or(Choice::is_all)
            && self.difficulty.as_ref().is_none_or(Choice::is_all)
            && self.competitor.as_ref().is_none_or(Choice::is_all)
            && self.search_query().is_none()
    }
}
