use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validate;

/// A single shopping-list entry.
///
/// Serialized with camelCase keys so the on-disk file and the HTTP bodies
/// share one shape: `{ "id", "text", "createdAt" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub text: String,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: jiff::Timestamp,
}

impl Item {
    /// Build a new item stamped at `now`.
    ///
    /// `now` is truncated to milliseconds; the id is that instant in Unix
    /// milliseconds, so two items created within the same millisecond collide.
    pub fn new(text: &str, now: jiff::Timestamp) -> Result<Self, CoreError> {
        let text = validate::validate_text(text)?;
        let created_at = jiff::Timestamp::from_millisecond(now.as_millisecond()).unwrap_or(now);
        Ok(Self {
            id: id_for(created_at),
            text,
            created_at,
        })
    }
}

/// RFC 3339 with exactly three fractional digits, e.g. `2024-03-01T10:00:00.500Z`.
fn serialize_millis<S>(ts: &jiff::Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&format_args!("{ts:.3}"))
}

/// Id derived from a creation instant.
pub fn id_for(now: jiff::Timestamp) -> String {
    now.as_millisecond().to_string()
}

/// Body the client sends to the create endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub text: String,
}

/// Body returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> jiff::Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn new_trims_text_and_derives_id_from_millis() {
        let now = ts("2024-03-01T10:00:00.123Z");
        let item = Item::new("  milk \n", now).unwrap();

        assert_eq!(item.text, "milk");
        assert_eq!(item.id, now.as_millisecond().to_string());
        assert_eq!(item.created_at, now);
    }

    #[test]
    fn new_truncates_created_at_to_the_id_millisecond() {
        let now = ts("2026-10-19T09:03:27.198297118Z");
        let item = Item::new("milk", now).unwrap();

        assert_eq!(item.id, "1792400607198");
        assert_eq!(item.created_at, ts("2026-10-19T09:03:27.198Z"));
        assert_eq!(item.created_at.as_millisecond().to_string(), item.id);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["createdAt"], "2026-10-19T09:03:27.198Z");
    }

    #[test]
    fn new_rejects_blank_text() {
        let now = ts("2024-03-01T10:00:00Z");
        assert!(matches!(Item::new("   ", now), Err(CoreError::InvalidText)));
        assert!(matches!(Item::new("", now), Err(CoreError::InvalidText)));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let item = Item::new("bread", ts("2024-03-01T10:00:00.500Z")).unwrap();
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], "1709287200500");
        assert_eq!(json["text"], "bread");
        assert_eq!(json["createdAt"], "2024-03-01T10:00:00.500Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn deserializes_iso_timestamps_with_millis() {
        let raw = r#"{"id":"1","text":"eggs","createdAt":"2024-03-01T10:00:00.000Z"}"#;
        let item: Item = serde_json::from_str(raw).unwrap();

        assert_eq!(item.text, "eggs");
        assert_eq!(item.created_at, ts("2024-03-01T10:00:00Z"));
    }
}
