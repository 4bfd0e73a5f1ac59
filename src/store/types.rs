//! Value types shared by the document store wire contract
//!
//! Timestamps on a write are either caller-supplied or deferred to the store
//! (`WriteTime`), and tenant references travel as collection paths (`DocRef`).
//! Keeping these explicit makes every write contract total: a document can be
//! built and inspected without a live store.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel key the HTTP store understands as "assign the timestamp server-side"
const SERVER_TIMESTAMP_KEY: &str = "$serverTimestamp";

// ---------------------------------------------------------------------------
// WriteTime
// ---------------------------------------------------------------------------

/// A point in time carried by a write: fixed by the caller, or assigned by
/// the store when the document is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTime {
    /// Resolved by the store at commit time
    ServerTime,
    /// Fixed instant supplied by the caller
    At(DateTime<Utc>),
}

impl WriteTime {
    /// Parse an inbound ISO-8601 query parameter, falling back to
    /// [`WriteTime::ServerTime`] when the value is absent or malformed.
    pub fn from_iso(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return WriteTime::ServerTime;
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return WriteTime::ServerTime;
        }
        match parse_rfc3339_lenient(raw) {
            Some(dt) => WriteTime::At(dt),
            None => WriteTime::ServerTime,
        }
    }

    /// Resolve to a concrete instant, substituting `now` for the sentinel
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            WriteTime::ServerTime => now,
            WriteTime::At(dt) => *dt,
        }
    }
}

/// Query-string decoding turns an encoded `+` in a timezone offset into a
/// space; retry with the offset restored before giving up.
fn parse_rfc3339_lenient(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(&raw.replace(' ', "+")))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

impl Serialize for WriteTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WriteTime::At(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            WriteTime::ServerTime => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(SERVER_TIMESTAMP_KEY, &true)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for WriteTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Fixed(String),
            Sentinel(std::collections::HashMap<String, bool>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Fixed(s) => parse_rfc3339_lenient(&s)
                .map(WriteTime::At)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", s))),
            Repr::Sentinel(map) if map.get(SERVER_TIMESTAMP_KEY) == Some(&true) => {
                Ok(WriteTime::ServerTime)
            }
            Repr::Sentinel(_) => Err(de::Error::custom("unknown timestamp sentinel")),
        }
    }
}

// ---------------------------------------------------------------------------
// DocRef
// ---------------------------------------------------------------------------

/// Reference to a document in another collection, serialized as the path
/// string `<collection>/<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRef {
    collection: String,
    id: String,
}

impl DocRef {
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Reference into the `school` collection scoping a record to a tenant
    pub fn school(id: &SchoolId) -> Self {
        Self::new("school", id.as_str())
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> String {
        format!("{}/{}", self.collection, self.id)
    }
}

impl Serialize for DocRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

impl<'de> Deserialize<'de> for DocRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        let (collection, id) = path
            .split_once('/')
            .ok_or_else(|| de::Error::custom(format!("invalid document path: {}", path)))?;
        if collection.is_empty() || id.is_empty() {
            return Err(de::Error::custom(format!("invalid document path: {}", path)));
        }
        Ok(DocRef::new(collection, id))
    }
}

// ---------------------------------------------------------------------------
// SchoolId
// ---------------------------------------------------------------------------

/// Tenant scope identifier, supplied explicitly to every write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolId(String);

impl SchoolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_iso_with_offset() {
        let wt = WriteTime::from_iso(Some("2025-10-25T13:22:28+05:30"));
        let expected = Utc.with_ymd_and_hms(2025, 10, 25, 7, 52, 28).unwrap();
        assert_eq!(wt, WriteTime::At(expected));
    }

    #[test]
    fn test_from_iso_decoded_plus_becomes_space() {
        // "+05:30" arrives as " 05:30" when the QR URL was not percent-encoded
        let wt = WriteTime::from_iso(Some("2025-10-25T13:22:28 05:30"));
        let expected = Utc.with_ymd_and_hms(2025, 10, 25, 7, 52, 28).unwrap();
        assert_eq!(wt, WriteTime::At(expected));
    }

    #[test]
    fn test_from_iso_fallbacks() {
        assert_eq!(WriteTime::from_iso(None), WriteTime::ServerTime);
        assert_eq!(WriteTime::from_iso(Some("")), WriteTime::ServerTime);
        assert_eq!(WriteTime::from_iso(Some("not-a-date")), WriteTime::ServerTime);
    }

    #[test]
    fn test_resolve() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let fixed = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(WriteTime::ServerTime.resolve(now), now);
        assert_eq!(WriteTime::At(fixed).resolve(now), fixed);
    }

    #[test]
    fn test_write_time_serde() {
        let fixed = WriteTime::from_iso(Some("2025-10-25T13:22:28+05:30"));
        let json = serde_json::to_string(&fixed).unwrap();
        assert_eq!(json, "\"2025-10-25T07:52:28+00:00\"");

        let sentinel = serde_json::to_string(&WriteTime::ServerTime).unwrap();
        assert_eq!(sentinel, "{\"$serverTimestamp\":true}");

        let back: WriteTime = serde_json::from_str(&sentinel).unwrap();
        assert_eq!(back, WriteTime::ServerTime);
        let back: WriteTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fixed);
    }

    #[test]
    fn test_doc_ref_path() {
        let school = SchoolId::new("cihir4BLjVvYNTVBdmqF");
        let doc_ref = DocRef::school(&school);
        assert_eq!(doc_ref.path(), "school/cihir4BLjVvYNTVBdmqF");
        assert_eq!(doc_ref.collection(), "school");
        assert_eq!(doc_ref.id(), "cihir4BLjVvYNTVBdmqF");
    }

    #[test]
    fn test_doc_ref_serde() {
        let doc_ref = DocRef::new("school", "abc");
        let json = serde_json::to_string(&doc_ref).unwrap();
        assert_eq!(json, "\"school/abc\"");
        let back: DocRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc_ref);

        assert!(serde_json::from_str::<DocRef>("\"no-slash\"").is_err());
        assert!(serde_json::from_str::<DocRef>("\"/missing\"").is_err());
    }
}
