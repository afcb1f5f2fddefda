//! Testimonial entries: a quote attributed to a customer.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::client::ContentClient;
use crate::collect::collect_entries;
use crate::error::Error;
use crate::types::{Collection, ImageDto, Sys};

const TESTIMONIAL_QUERY: &str = r"
query Testimonial($id: String!, $preview: Boolean!) {
  testimonial(id: $id, preview: $preview) {
    sys { id }
    quote
    author
    role
    avatar { url title description width height }
  }
}";

const TESTIMONIALS_QUERY: &str = r"
query Testimonials($preview: Boolean!) {
  testimonialCollection(preview: $preview) {
    items {
      sys { id }
      quote
      author
      role
      avatar { url title description width height }
    }
  }
}";

/// A customer testimonial as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDto {
    pub sys: Sys,
    pub quote: String,
    pub author: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<ImageDto>,
}

#[derive(Debug, Deserialize)]
struct TestimonialData {
    testimonial: Option<TestimonialDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestimonialCollectionData {
    testimonial_collection: Collection<Value>,
}

impl ContentClient {
    /// Fetch a single testimonial by entry id.
    pub async fn testimonial_by_id(
        &self,
        id: &str,
        preview: bool,
    ) -> Result<TestimonialDto, Error> {
        debug!(id, preview, "fetching testimonial");
        let data: TestimonialData = self
            .query(
                TESTIMONIAL_QUERY,
                json!({ "id": id, "preview": preview }),
                preview,
            )
            .await?;
        data.testimonial.ok_or_else(|| Error::NotFound {
            content_type: "testimonial",
            id: id.to_owned(),
        })
    }

    /// Fetch every testimonial, in the order the CMS returns them.
    pub async fn testimonials_all(&self, preview: bool) -> Result<Vec<TestimonialDto>, Error> {
        debug!(preview, "fetching all testimonials");
        let data: TestimonialCollectionData = self
            .query(TESTIMONIALS_QUERY, json!({ "preview": preview }), preview)
            .await?;
        Ok(collect_entries(
            data.testimonial_collection.items,
            "testimonial",
        ))
    }
}
