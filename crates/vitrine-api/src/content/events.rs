//! Event entries: dated happenings with an optional venue.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ContentClient;
use crate::collect::collect_entries;
use crate::error::Error;
use crate::types::{Collection, ImageDto, Sys};

const EVENT_QUERY: &str = r"
query Event($id: String!, $preview: Boolean!) {
  event(id: $id, preview: $preview) {
    sys { id }
    title
    date
    location
    description
    image { url title description width height }
  }
}";

const EVENTS_QUERY: &str = r"
query Events($preview: Boolean!) {
  eventCollection(preview: $preview) {
    items {
      sys { id }
      title
      date
      location
      description
      image { url title description width height }
    }
  }
}";

/// An event as delivered by the CMS. The date comes back as an ISO 8601
/// timestamp; an unparseable value fails validation for that entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub sys: Sys,
    pub title: String,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageDto>,
}

#[derive(Debug, Deserialize)]
struct EventData {
    event: Option<EventDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventCollectionData {
    event_collection: Collection<Value>,
}

impl ContentClient {
    /// Fetch a single event by entry id.
    pub async fn event_by_id(&self, id: &str, preview: bool) -> Result<EventDto, Error> {
        debug!(id, preview, "fetching event");
        let data: EventData = self
            .query(EVENT_QUERY, json!({ "id": id, "preview": preview }), preview)
            .await?;
        data.event.ok_or_else(|| Error::NotFound {
            content_type: "event",
            id: id.to_owned(),
        })
    }

    /// Fetch every event, in the order the CMS returns them.
    pub async fn events_all(&self, preview: bool) -> Result<Vec<EventDto>, Error> {
        debug!(preview, "fetching all events");
        let data: EventCollectionData = self
            .query(EVENTS_QUERY, json!({ "preview": preview }), preview)
            .await?;
        Ok(collect_entries(data.event_collection.items, "event"))
    }
}
