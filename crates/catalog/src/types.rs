//! Core domain types for the content catalog.
//!
//! Entries arrive from the CMS with their facet references already resolved
//! into `FacetRef` objects, so nothing here needs a second lookup. JSON field
//! names are camelCase to match the CMS export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a catalog entry
pub type EntryId = String;

/// Unique identifier for a facet value (a product, a team, a topic, ...)
pub type FacetId = String;

/// Fallback swatch for facet values without a color
pub const DEFAULT_FACET_COLOR: &str = "#6B7280";

/// Fallback sort position for facet values without an explicit order
pub const DEFAULT_FACET_ORDER: u32 = 50;

// =============================================================================
// Facets
// =============================================================================

/// A lightweight reference to one facet value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetRef {
    pub id: FacetId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl FacetRef {
    pub fn new(id: impl Into<FacetId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
            icon: None,
            order: None,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Display color, falling back to a neutral grey.
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_FACET_COLOR)
    }

    /// Sort position among sibling values; lower comes first.
    pub fn order(&self) -> u32 {
        self.order.unwrap_or(DEFAULT_FACET_ORDER)
    }
}

/// The array-valued facet dimensions an entry can be tagged with.
///
/// `ContentTypes` is array-valued on the filter side only: an entry carries
/// at most one content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetKind {
    Products,
    Teams,
    Topics,
    JourneyStages,
    Industries,
    Audiences,
    ContentTypes,
    EnablementCategory,
}

impl FacetKind {
    /// Every facet kind, in display order.
    pub const ALL: [FacetKind; 8] = [
        FacetKind::Products,
        FacetKind::Teams,
        FacetKind::Topics,
        FacetKind::JourneyStages,
        FacetKind::Industries,
        FacetKind::Audiences,
        FacetKind::ContentTypes,
        FacetKind::EnablementCategory,
    ];

    /// Stable key used in filter sets and query strings
    pub fn key(self) -> &'static str {
        match self {
            FacetKind::Products => "products",
            FacetKind::Teams => "teams",
            FacetKind::Topics => "topics",
            FacetKind::JourneyStages => "journeyStages",
            FacetKind::Industries => "industries",
            FacetKind::Audiences => "audiences",
            FacetKind::ContentTypes => "contentTypes",
            FacetKind::EnablementCategory => "enablementCategory",
        }
    }

    /// Human-readable heading for filter panels
    pub fn label(self) -> &'static str {
        match self {
            FacetKind::Products => "Products",
            FacetKind::Teams => "Teams",
            FacetKind::Topics => "Topics",
            FacetKind::JourneyStages => "Journey Stages",
            FacetKind::Industries => "Industries",
            FacetKind::Audiences => "Audiences",
            FacetKind::ContentTypes => "Content Types",
            FacetKind::EnablementCategory => "Enablement Categories",
        }
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// Which CMS collection an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    Training,
    Playbook,
    BattleCard,
    /// Also catches collections this build does not know about
    #[default]
    #[serde(other)]
    Article,
}

/// Delivery format of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    LiveReplay,
    Async,
    Document,
    Video,
    Interactive,
    /// Any format string this build does not know about
    #[serde(other)]
    Other,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::LiveReplay => "live-replay",
            Format::Async => "async",
            Format::Document => "document",
            Format::Video => "video",
            Format::Interactive => "interactive",
            Format::Other => "other",
        }
    }
}

impl FromStr for Format {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live-replay" => Ok(Format::LiveReplay),
            "async" => Ok(Format::Async),
            "document" => Ok(Format::Document),
            "video" => Ok(Format::Video),
            "interactive" => Ok(Format::Interactive),
            "other" => Ok(Format::Other),
            _ => Err(UnknownVariant {
                field: "format",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How demanding an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(UnknownVariant {
                field: "difficulty",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known enum variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field}: {value}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// One piece of content: a training session, playbook, battle card or article.
///
/// Missing or `null` facet arrays deserialize as empty, so a sparse CMS
/// record never fails to load; it simply fails to match filters on those
/// facets. Scalar fields the loader cannot make sense of, such as an
/// unknown difficulty or an unreadable date, come through as `None` for the
/// same reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: EntryId,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub kind: EntryKind,
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub products: Vec<FacetRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub teams: Vec<FacetRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub topics: Vec<FacetRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub journey_stages: Vec<FacetRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub industries: Vec<FacetRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub audiences: Vec<FacetRef>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub enablement_categories: Vec<FacetRef>,

    #[serde(default)]
    pub content_type: Option<FacetRef>,
    #[serde(default)]
    pub competitor: Option<FacetRef>,

    #[serde(default)]
    pub format: Option<Format>,
    #[serde(default, deserialize_with = "lenient::known")]
    pub difficulty: Option<Difficulty>,
    /// Length in minutes
    #[serde(default, deserialize_with = "lenient::minutes")]
    pub duration: Option<u32>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub publish_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::whole_number")]
    pub priority: Option<i64>,

    /// Editorially flagged for the featured band
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub featured: bool,
    /// Eligible for the "upcoming" featured band
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub show_in_upcoming: bool,
}

impl CatalogEntry {
    /// Minimal entry with every optional field empty.
    pub fn new(id: impl Into<EntryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: EntryKind::default(),
            title: title.into(),
            description: String::new(),
            products: Vec::new(),
            teams: Vec::new(),
            topics: Vec::new(),
            journey_stages: Vec::new(),
            industries: Vec::new(),
            audiences: Vec::new(),
            enablement_categories: Vec::new(),
            content_type: None,
            competitor: None,
            format: None,
            difficulty: None,
            duration: None,
            publish_date: None,
            priority: None,
            featured: false,
            show_in_upcoming: false,
        }
    }

    /// The facet references this entry carries for one facet kind.
    pub fn facet_refs(&self, kind: FacetKind) -> &[FacetRef] {
        match kind {
            FacetKind::Products => &self.products,
            FacetKind::Teams => &self.teams,
            FacetKind::Topics => &self.topics,
            FacetKind::JourneyStages => &self.journey_stages,
            FacetKind::Industries => &self.industries,
            FacetKind::Audiences => &self.audiences,
            FacetKind::ContentTypes => self.content_type.as_slice(),
            FacetKind::EnablementCategory => &self.enablement_categories,
        }
    }

    /// Ids of the facet values this entry carries for one facet kind.
    pub fn facet_ids(&self, kind: FacetKind) -> impl Iterator<Item = &str> {
        self.facet_refs(kind).iter().map(|facet| facet.id.as_str())
    }

    pub fn competitor_id(&self) -> Option<&str> {
        self.competitor.as_ref().map(|c| c.id.as_str())
    }
}

// =============================================================================
// CatalogIndex - The In-Memory Entry Store
// =============================================================================

/// Holds every loaded entry in load order, with an id lookup on the side.
///
/// Entries are never mutated through the index once a render has started;
/// the engine borrows `&CatalogEntry` and produces new sequences.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    pub(crate) entries: Vec<CatalogEntry>,
    pub(crate) by_id: HashMap<EntryId, usize>,
}

impl CatalogIndex {
    /// Creates a new, empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries, in load order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Get an entry by id
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry. An entry with the same id is replaced in place so
    /// load order stays stable.
    pub fn insert(&mut self, entry: CatalogEntry) {
        match self.by_id.get(&entry.id) {
            Some(&pos) => self.entries[pos] = entry,
            None => {
                self.by_id.insert(entry.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}

// =============================================================================
// Lenient field decoding
// =============================================================================

/// Field decoders for CMS values that are plausible but not clean. Each one
/// turns a value it cannot use into the field's empty state instead of an
/// error, so one odd record never rejects its whole file.
mod lenient {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    type DeResult<T, E> = std::result::Result<T, E>;

    /// `null` decodes like a missing field.
    pub fn or_default<'de, D, T>(deserializer: D) -> DeResult<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
    }

    /// A string parsed with `FromStr`; anything unrecognized is `None`.
    pub fn known<'de, D, T>(deserializer: D) -> DeResult<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(raw)) => {
                let parsed = raw.parse().ok();
                if parsed.is_none() {
                    tracing::debug!(value = %raw, "Ignoring unrecognized value");
                }
                parsed
            }
            _ => None,
        })
    }

    /// Whole minutes. Fractions are rounded; negative or non-numeric values
    /// are `None`.
    pub fn minutes<'de, D>(deserializer: D) -> DeResult<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = number(Option::<Value>::deserialize(deserializer)?);
        Ok(value
            .filter(|minutes| *minutes >= 0.0)
            .map(|minutes| minutes.round() as u32))
    }

    /// An integer, rounding fractional input.
    pub fn whole_number<'de, D>(deserializer: D) -> DeResult<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = number(Option::<Value>::deserialize(deserializer)?);
        Ok(value.map(|n| n.round() as i64))
    }

    /// RFC 3339 timestamps, or bare `YYYY-MM-DD` dates taken as midnight UTC.
    pub fn date<'de, D>(deserializer: D) -> DeResult<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(Value::String(raw)) = Option::<Value>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        let parsed = DateTime::parse_from_rfc3339(raw)
            .map(|date| date.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|midnight| midnight.and_utc())
            });
        if parsed.is_none() {
            tracing::debug!(value = raw, "Ignoring unreadable date");
        }
        Ok(parsed)
    }

    fn number(value: Option<Value>) -> Option<f64> {
        let n: f64 = match value? {
            Value::Number(n) => n.as_f64()?,
            Value::String(raw) => raw.trim().parse().ok()?,
            _ => return None,
        };
        n.is_finite().then_some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_ref_fallbacks() {
        let plain = FacetRef::new("p1", "Platform");
        assert_eq!(plain.color(), DEFAULT_FACET_COLOR);
        assert_eq!(plain.order(), 50);

        let styled = FacetRef {
            color: Some("#FF0000".to_string()),
            ..FacetRef::new("p2", "Payments").with_order(3)
        };
        assert_eq!(styled.color(), "#FF0000");
        assert_eq!(styled.order(), 3);
    }

    #[test]
    fn test_content_type_is_a_facet_slice() {
        let mut entry = CatalogEntry::new("e1", "Intro");
        assert_eq!(entry.facet_ids(FacetKind::ContentTypes).count(), 0);

        entry.content_type = Some(FacetRef::new("ct-guide", "Guide"));
        let ids: Vec<&str> = entry.facet_ids(FacetKind::ContentTypes).collect();
        assert_eq!(ids, vec!["ct-guide"]);
    }

    #[test]
    fn test_sparse_json_entry() {
        let json = r#"{
            "id": "e1",
            "title": "Discovery Calls",
            "format": "live-replay",
            "journeyStages": [{"id": "js-1", "name": "Discover"}],
            "someCmsField": 42
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.kind, EntryKind::Article);
        assert_eq!(entry.format, Some(Format::LiveReplay));
        assert!(entry.products.is_empty());
        assert_eq!(entry.journey_stages.len(), 1);
        assert!(!entry.featured);
    }

    #[test]
    fn test_unknown_format_maps_to_other() {
        let json = r#"{"id": "e1", "title": "T", "format": "podcast"}"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.format, Some(Format::Other));
    }

    #[test]
    fn test_untidy_cms_values_degrade() {
        let json = r#"{
            "id": "e1",
            "kind": "webinar",
            "title": "T",
            "description": null,
            "products": null,
            "difficulty": "expert",
            "duration": 7.5,
            "publishDate": "2024-03-01",
            "priority": "4",
            "featured": null,
            "showInUpcoming": null
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.kind, EntryKind::Article);
        assert!(entry.description.is_empty());
        assert!(entry.products.is_empty());
        assert_eq!(entry.difficulty, None);
        assert_eq!(entry.duration, Some(8));
        assert_eq!(
            entry.publish_date.map(|d| d.to_rfc3339()),
            Some("2024-03-01T00:00:00+00:00".to_string())
        );
        assert_eq!(entry.priority, Some(4));
        assert!(!entry.featured);
        assert!(!entry.show_in_upcoming);
    }

    #[test]
    fn test_unreadable_scalars_are_none() {
        let json = r#"{
            "id": "e1",
            "title": "T",
            "difficulty": 3,
            "duration": -10,
            "publishDate": "next tuesday",
            "priority": true
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.difficulty, None);
        assert_eq!(entry.duration, None);
        assert_eq!(entry.publish_date, None);
        assert_eq!(entry.priority, None);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("Video".parse::<Format>().unwrap(), Format::Video);
        assert_eq!(" advanced ".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut index = CatalogIndex::new();
        index.insert(CatalogEntry::new("a", "First"));
        index.insert(CatalogEntry::new("b", "Second"));
        index.insert(CatalogEntry::new("a", "First, revised"));

        assert_eq!(index.len(), 2);
        assert_eq!(index.entries()[0].title, "First, revised");
        assert_eq!(index.get("b").unwrap().title, "Second");
        assert!(index.get("zzz").is_none());
    }
}
