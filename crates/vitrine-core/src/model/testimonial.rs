use serde::{Deserialize, Serialize};

use super::common::Image;
use super::entry_id::EntryId;

/// A customer quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: EntryId,
    pub quote: String,
    pub author: Option<String>,
    pub role: Option<String>,
    pub avatar: Option<Image>,
}
