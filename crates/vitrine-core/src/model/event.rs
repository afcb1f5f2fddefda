use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Image;
use super::entry_id::EntryId;

/// A dated happening, optionally tied to a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EntryId,
    pub title: String,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<Image>,
}

impl Event {
    /// Venue label, with the documented fallback for events without one.
    pub fn location_or_default(&self) -> &str {
        self.location.as_deref().unwrap_or("Not set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(location: Option<&str>) -> Event {
        Event {
            id: EntryId::from("e1"),
            title: "Launch".into(),
            date: None,
            location: location.map(str::to_owned),
            description: None,
            image: None,
        }
    }

    #[test]
    fn location_falls_back_when_absent() {
        assert_eq!(event(None).location_or_default(), "Not set");
    }

    #[test]
    fn location_passes_through_when_present() {
        assert_eq!(event(Some("Berlin")).location_or_default(), "Berlin");
    }
}
