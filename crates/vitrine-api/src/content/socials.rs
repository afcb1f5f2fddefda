//! Social link entries: platform name plus profile URL and icon.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ContentClient;
use crate::collect::collect_entries;
use crate::error::Error;
use crate::types::{Collection, ImageDto, Sys};

const SOCIAL_QUERY: &str = r"
query Social($id: String!, $preview: Boolean!) {
  social(id: $id, preview: $preview) {
    sys { id }
    platform
    url
    icon { url title description width height }
  }
}";

const SOCIALS_QUERY: &str = r"
query Socials($preview: Boolean!) {
  socialCollection(preview: $preview) {
    items {
      sys { id }
      platform
      url
      icon { url title description width height }
    }
  }
}";

/// A social profile link as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialDto {
    pub sys: Sys,
    pub platform: String,
    pub url: String,
    pub icon: Option<ImageDto>,
}

#[derive(Debug, Deserialize)]
struct SocialData {
    social: Option<SocialDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SocialCollectionData {
    social_collection: Collection<Value>,
}

impl ContentClient {
    /// Fetch a single social link by entry id.
    pub async fn social_by_id(&self, id: &str, preview: bool) -> Result<SocialDto, Error> {
        debug!(id, preview, "fetching social link");
        let data: SocialData = self
            .query(SOCIAL_QUERY, json!({ "id": id, "preview": preview }), preview)
            .await?;
        data.social.ok_or_else(|| Error::NotFound {
            content_type: "social",
            id: id.to_owned(),
        })
    }

    /// Fetch every social link, in the order the CMS returns them.
    pub async fn socials_all(&self, preview: bool) -> Result<Vec<SocialDto>, Error> {
        debug!(preview, "fetching all social links");
        let data: SocialCollectionData = self
            .query(SOCIALS_QUERY, json!({ "preview": preview }), preview)
            .await?;
        Ok(collect_entries(data.social_collection.items, "social"))
    }
}
