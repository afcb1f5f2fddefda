//! Accordion entries: collapsible FAQ-style sections with nested items.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ContentClient;
use crate::collect::collect_entries;
use crate::error::Error;
use crate::types::{Collection, Sys};

const ACCORDION_QUERY: &str = r"
query Accordion($id: String!, $preview: Boolean!) {
  accordion(id: $id, preview: $preview) {
    sys { id }
    heading
    itemsCollection {
      items { title body }
    }
  }
}";

const ACCORDIONS_QUERY: &str = r"
query Accordions($preview: Boolean!) {
  accordionCollection(preview: $preview) {
    items {
      sys { id }
      heading
      itemsCollection {
        items { title body }
      }
    }
  }
}";

/// An accordion section as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionDto {
    pub sys: Sys,
    pub heading: Option<String>,
    pub items_collection: Collection<AccordionItemDto>,
}

/// One collapsible row inside an accordion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItemDto {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
struct AccordionData {
    accordion: Option<AccordionDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccordionCollectionData {
    accordion_collection: Collection<Value>,
}

impl ContentClient {
    /// Fetch a single accordion by entry id.
    pub async fn accordion_by_id(&self, id: &str, preview: bool) -> Result<AccordionDto, Error> {
        debug!(id, preview, "fetching accordion");
        let data: AccordionData = self
            .query(
                ACCORDION_QUERY,
                json!({ "id": id, "preview": preview }),
                preview,
            )
            .await?;
        data.accordion.ok_or_else(|| Error::NotFound {
            content_type: "accordion",
            id: id.to_owned(),
        })
    }

    /// Fetch every accordion, in the order the CMS returns them.
    pub async fn accordions_all(&self, preview: bool) -> Result<Vec<AccordionDto>, Error> {
        debug!(preview, "fetching all accordions");
        let data: AccordionCollectionData = self
            .query(ACCORDIONS_QUERY, json!({ "preview": preview }), preview)
            .await?;
        Ok(collect_entries(data.accordion_collection.items, "accordion"))
    }
}
