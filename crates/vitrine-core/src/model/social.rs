use serde::{Deserialize, Serialize};

use super::common::Image;
use super::entry_id::EntryId;

/// A social profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    pub id: EntryId,
    pub platform: String,
    pub url: String,
    pub icon: Option<Image>,
}
