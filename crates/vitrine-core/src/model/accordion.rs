use serde::{Deserialize, Serialize};

use super::entry_id::EntryId;

/// Collapsible FAQ-style section. Items keep author order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accordion {
    pub id: EntryId,
    pub heading: Option<String>,
    pub items: Vec<AccordionItem>,
}

/// One collapsible row inside an accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionItem {
    pub title: String,
    pub body: String,
}
