use serde::{Deserialize, Serialize};

use super::common::{Cta, Image};
use super::entry_id::EntryId;

/// Hero banner rendered at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: EntryId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<Image>,
    pub cta: Option<Cta>,
}
