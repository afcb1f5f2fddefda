use serde::{Deserialize, Serialize};

use super::common::Cta;
use super::entry_id::EntryId;

/// Site-wide announcement dialog. Disabled modals are delivered too;
/// whether to show them is the client's call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modal {
    pub id: EntryId,
    pub title: String,
    pub body: Option<String>,
    pub enabled: bool,
    pub cta: Option<Cta>,
}
