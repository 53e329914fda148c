//! Ordering catalog entries.
//!
//! Every key is a total order with a fixed rule for missing values, and the
//! sort is stable, so equal entries keep their input order.

use catalog::CatalogEntry;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Supported sort orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Newest first; undated entries last
    #[default]
    DateDesc,
    /// Oldest first; undated entries last
    DateAsc,
    /// A to Z, ignoring case
    Title,
    /// Highest priority first; missing priority counts as 0
    Priority,
    /// Shortest first; missing duration last
    Duration,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::Title,
        SortKey::Priority,
        SortKey::Duration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::Title => "title",
            SortKey::Priority => "priority",
            SortKey::Duration => "duration",
        }
    }

    fn compare(self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortKey::DateDesc => missing_last(a.publish_date, b.publish_date, |x, y| y.cmp(&x)),
            SortKey::DateAsc => missing_last(a.publish_date, b.publish_date, |x, y| x.cmp(&y)),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Priority => b.priority.unwrap_or(0).cmp(&a.priority.unwrap_or(0)),
            SortKey::Duration => missing_last(a.duration, b.duration, |x, y| x.cmp(&y)),
        }
    }
}

/// Unknown keys fall back to `date-desc` instead of failing.
impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let parsed = SortKey::ALL.into_iter().find(|k| k.as_str() == key);
        Ok(parsed.unwrap_or_else(|| {
            tracing::warn!("Unknown sort key {:?}, falling back to date-desc", s);
            SortKey::default()
        }))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let Ok(key) = raw.parse::<SortKey>();
        Ok(key)
    }
}

fn missing_last<T>(a: Option<T>, b: Option<T>, present: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => present(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Return a new, stably sorted sequence. The input is left untouched.
pub fn sort<'a>(entries: &[&'a CatalogEntry], key: SortKey) -> Vec<&'a CatalogEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ids(entries: &[&CatalogEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.clone()).collect()
    }

    fn dated(id: &str, day: Option<u32>) -> CatalogEntry {
        let mut entry = CatalogEntry::new(id, id);
        entry.publish_date = day.map(|d| Utc.with_ymd_and_hms(2024, 1, d, 12, 0, 0).unwrap());
        entry
    }

    #[test]
    fn test_dates_undated_last_both_ways() {
        let entries = vec![dated("b", Some(2)), dated("none", None), dated("c", Some(3)), dated("a", Some(1))];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();

        assert_eq!(ids(&sort(&refs, SortKey::DateDesc)), ["c", "b", "a", "none"]);
        assert_eq!(ids(&sort(&refs, SortKey::DateAsc)), ["a", "b", "c", "none"]);
        // Input order is untouched
        assert_eq!(ids(&refs), ["b", "none", "c", "a"]);
    }

    #[test]
    fn test_title_ignores_case() {
        let entries = vec![
            CatalogEntry::new("1", "banana"),
            CatalogEntry::new("2", "Apple"),
            CatalogEntry::new("3", "cherry"),
        ];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();
        assert_eq!(ids(&sort(&refs, SortKey::Title)), ["2", "1", "3"]);
    }

    #[test]
    fn test_priority_is_stable_and_defaults_to_zero() {
        let mut entries: Vec<CatalogEntry> = ["first", "second", "third", "fourth"]
            .iter()
            .map(|id| CatalogEntry::new(*id, *id))
            .collect();
        entries[0].priority = Some(5);
        entries[1].priority = Some(5);
        entries[2].priority = None;
        entries[3].priority = Some(-1);
        let refs: Vec<&CatalogEntry> = entries.iter().collect();

        assert_eq!(
            ids(&sort(&refs, SortKey::Priority)),
            ["first", "second", "third", "fourth"]
        );
    }

    #[test]
    fn test_duration_missing_last() {
        let mut short = CatalogEntry::new("short", "short");
        short.duration = Some(10);
        let mut long = CatalogEntry::new("long", "long");
        long.duration = Some(90);
        let open = CatalogEntry::new("open", "open");

        let refs = vec![&open, &long, &short];
        assert_eq!(ids(&sort(&refs, SortKey::Duration)), ["short", "long", "open"]);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!("popularity".parse::<SortKey>(), Ok(SortKey::DateDesc));
        assert_eq!("Title".parse::<SortKey>(), Ok(SortKey::Title));

        let key: SortKey = serde_json::from_str("\"relevance\"").unwrap();
        assert_eq!(key, SortKey::DateDesc);
        assert_eq!(serde_json::to_string(&SortKey::DateAsc).unwrap(), "\"date-asc\"");
    }
}
