//! Banner entries: the hero slot rendered at the top of a page.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ContentClient;
use crate::collect::collect_entries;
use crate::error::Error;
use crate::types::{Collection, CtaDto, ImageDto, Sys};

const BANNER_QUERY: &str = r"
query Banner($id: String!, $preview: Boolean!) {
  banner(id: $id, preview: $preview) {
    sys { id }
    title
    subtitle
    image { url title description width height }
    cta { label url }
  }
}";

const BANNERS_QUERY: &str = r"
query Banners($preview: Boolean!) {
  bannerCollection(preview: $preview) {
    items {
      sys { id }
      title
      subtitle
      image { url title description width height }
      cta { label url }
    }
  }
}";

/// A hero banner as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    pub sys: Sys,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<ImageDto>,
    pub cta: Option<CtaDto>,
}

#[derive(Debug, Deserialize)]
struct BannerData {
    banner: Option<BannerDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BannerCollectionData {
    banner_collection: Collection<Value>,
}

impl ContentClient {
    /// Fetch a single banner by entry id.
    pub async fn banner_by_id(&self, id: &str, preview: bool) -> Result<BannerDto, Error> {
        debug!(id, preview, "fetching banner");
        let data: BannerData = self
            .query(BANNER_QUERY, json!({ "id": id, "preview": preview }), preview)
            .await?;
        data.banner.ok_or_else(|| Error::NotFound {
            content_type: "banner",
            id: id.to_owned(),
        })
    }

    /// Fetch every banner, in the order the CMS returns them.
    pub async fn banners_all(&self, preview: bool) -> Result<Vec<BannerDto>, Error> {
        debug!(preview, "fetching all banners");
        let data: BannerCollectionData = self
            .query(BANNERS_QUERY, json!({ "preview": preview }), preview)
            .await?;
        Ok(collect_entries(data.banner_collection.items, "banner"))
    }
}
