// ── Page shell navigation types ──
//
// Header and footer are singleton entries. The CMS nests their link
// lists in `*Collection { items }` wrappers; the domain model flattens
// those to plain `Vec`s. Menu entries keep the `__typename` tag on the
// wire so clients discriminate them the same way the CMS does.

use serde::{Deserialize, Serialize};

use super::common::Image;
use super::entry_id::EntryId;
use super::social::Social;

/// Site header with its ordered menu slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub id: EntryId,
    pub site_title: String,
    pub logo: Option<Image>,
    pub menu: Vec<MenuEntry>,
}

/// One slot in the header menu: a plain link or a mega menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum MenuEntry {
    MenuItem(MenuItem),
    MegaMenu(MegaMenu),
}

/// A plain navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub label: String,
    pub url: String,
}

/// A multi-column dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MegaMenu {
    pub title: String,
    pub columns: Vec<MenuColumn>,
}

/// One column of links inside a mega menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuColumn {
    pub heading: Option<String>,
    pub links: Vec<MenuItem>,
}

/// Site footer with link list and social profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub id: EntryId,
    pub tagline: Option<String>,
    pub links: Vec<MenuItem>,
    pub socials: Vec<Social>,
}
