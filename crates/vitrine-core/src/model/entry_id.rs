// ── Core identity type ──
//
// Contentful entry identifiers are opaque CMS-assigned strings, not
// UUIDs. EntryId keeps them behind a newtype so entry ids never mix
// with other strings in signatures, while serializing as a plain
// string at the JSON boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical identifier for a CMS entry (`sys.id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_round_trips_through_str() {
        let id: EntryId = "2Kv9tZpXc0YGCkMQab12cd".parse().unwrap();
        assert_eq!(id.as_str(), "2Kv9tZpXc0YGCkMQab12cd");
        assert_eq!(id.to_string(), "2Kv9tZpXc0YGCkMQab12cd");
    }

    #[test]
    fn entry_id_serializes_as_plain_string() {
        let id = EntryId::from("abc123");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("abc123"));
    }
}
