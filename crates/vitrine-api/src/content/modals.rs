//! Modal entries: site-wide announcement dialogs gated by an enabled flag.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ContentClient;
use crate::collect::collect_entries;
use crate::error::Error;
use crate::types::{Collection, CtaDto, Sys};

const MODAL_QUERY: &str = r"
query Modal($id: String!, $preview: Boolean!) {
  modal(id: $id, preview: $preview) {
    sys { id }
    title
    body
    enabled
    cta { label url }
  }
}";

const MODALS_QUERY: &str = r"
query Modals($preview: Boolean!) {
  modalCollection(preview: $preview) {
    items {
      sys { id }
      title
      body
      enabled
      cta { label url }
    }
  }
}";

/// An announcement modal as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalDto {
    pub sys: Sys,
    pub title: String,
    pub body: Option<String>,
    pub enabled: Option<bool>,
    pub cta: Option<CtaDto>,
}

#[derive(Debug, Deserialize)]
struct ModalData {
    modal: Option<ModalDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModalCollectionData {
    modal_collection: Collection<Value>,
}

impl ContentClient {
    /// Fetch a single modal by entry id.
    pub async fn modal_by_id(&self, id: &str, preview: bool) -> Result<ModalDto, Error> {
        debug!(id, preview, "fetching modal");
        let data: ModalData = self
            .query(MODAL_QUERY, json!({ "id": id, "preview": preview }), preview)
            .await?;
        data.modal.ok_or_else(|| Error::NotFound {
            content_type: "modal",
            id: id.to_owned(),
        })
    }

    /// Fetch every modal, in the order the CMS returns them.
    pub async fn modals_all(&self, preview: bool) -> Result<Vec<ModalDto>, Error> {
        debug!(preview, "fetching all modals");
        let data: ModalCollectionData = self
            .query(MODALS_QUERY, json!({ "preview": preview }), preview)
            .await?;
        Ok(collect_entries(data.modal_collection.items, "modal"))
    }
}
