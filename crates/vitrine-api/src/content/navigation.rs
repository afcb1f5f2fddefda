//! Header and footer entries: the page shell around every route.
//!
//! The header's menu slot is polymorphic. Each slot entry is either a plain
//! `MenuItem` link or a `MegaMenu` of link columns, and the GraphQL layer
//! discriminates them by `__typename`. An entry carrying any other typename
//! fails validation for the whole header; the shell is all-or-nothing.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::client::ContentClient;
use crate::error::Error;
use crate::types::{Collection, ImageDto, Sys};

use super::socials::SocialDto;

const HEADER_QUERY: &str = r"
query Header($id: String!, $preview: Boolean!) {
  header(id: $id, preview: $preview) {
    sys { id }
    siteTitle
    logo { url title description width height }
    menuItemsCollection {
      items {
        __typename
        ... on MenuItem {
          label
          url
        }
        ... on MegaMenu {
          title
          columnsCollection {
            items {
              heading
              linksCollection {
                items { label url }
              }
            }
          }
        }
      }
    }
  }
}";

const FOOTER_QUERY: &str = r"
query Footer($id: String!, $preview: Boolean!) {
  footer(id: $id, preview: $preview) {
    sys { id }
    tagline
    linksCollection {
      items { label url }
    }
    socialsCollection {
      items {
        sys { id }
        platform
        url
        icon { url title description width height }
      }
    }
  }
}";

/// The site header as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderDto {
    pub sys: Sys,
    pub site_title: String,
    pub logo: Option<ImageDto>,
    pub menu_items_collection: Collection<MenuEntryDto>,
}

/// One entry in the header's menu slot, discriminated by `__typename`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "__typename")]
pub enum MenuEntryDto {
    MenuItem(MenuItemDto),
    MegaMenu(MegaMenuDto),
}

/// A plain navigation link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub label: String,
    pub url: String,
}

/// A multi-column dropdown menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MegaMenuDto {
    pub title: String,
    pub columns_collection: Collection<MenuColumnDto>,
}

/// One column of links inside a mega menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuColumnDto {
    pub heading: Option<String>,
    pub links_collection: Collection<MenuItemDto>,
}

/// The site footer as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterDto {
    pub sys: Sys,
    pub tagline: Option<String>,
    pub links_collection: Collection<MenuItemDto>,
    pub socials_collection: Collection<SocialDto>,
}

#[derive(Debug, Deserialize)]
struct HeaderData {
    header: Option<HeaderDto>,
}

#[derive(Debug, Deserialize)]
struct FooterData {
    footer: Option<FooterDto>,
}

impl ContentClient {
    /// Fetch the site header by entry id.
    pub async fn header_by_id(&self, id: &str, preview: bool) -> Result<HeaderDto, Error> {
        debug!(id, preview, "fetching header");
        let data: HeaderData = self
            .query(HEADER_QUERY, json!({ "id": id, "preview": preview }), preview)
            .await?;
        data.header.ok_or_else(|| Error::NotFound {
            content_type: "header",
            id: id.to_owned(),
        })
    }

    /// Fetch the site footer by entry id.
    pub async fn footer_by_id(&self, id: &str, preview: bool) -> Result<FooterDto, Error> {
        debug!(id, preview, "fetching footer");
        let data: FooterData = self
            .query(FOOTER_QUERY, json!({ "id": id, "preview": preview }), preview)
            .await?;
        data.footer.ok_or_else(|| Error::NotFound {
            content_type: "footer",
            id: id.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn menu_entry_discriminates_on_typename() {
        let raw = serde_json::json!({
            "__typename": "MenuItem",
            "label": "Pricing",
            "url": "/pricing",
        });
        let entry: MenuEntryDto = serde_json::from_value(raw).unwrap();
        assert_eq!(
            entry,
            MenuEntryDto::MenuItem(MenuItemDto {
                label: "Pricing".into(),
                url: "/pricing".into(),
            })
        );
    }

    #[test]
    fn mega_menu_carries_columns() {
        let raw = serde_json::json!({
            "__typename": "MegaMenu",
            "title": "Products",
            "columnsCollection": {
                "items": [{
                    "heading": "Apps",
                    "linksCollection": { "items": [{ "label": "Web", "url": "/web" }] },
                }],
            },
        });
        let entry: MenuEntryDto = serde_json::from_value(raw).unwrap();
        let MenuEntryDto::MegaMenu(mega) = entry else {
            panic!("expected a mega menu");
        };
        assert_eq!(mega.title, "Products");
        assert_eq!(mega.columns_collection.items.len(), 1);
        assert_eq!(
            mega.columns_collection.items[0].links_collection.items[0].label,
            "Web"
        );
    }

    #[test]
    fn unknown_typename_is_rejected() {
        let raw = serde_json::json!({
            "__typename": "CarouselMenu",
            "label": "x",
            "url": "/x",
        });
        let err = serde_json::from_value::<MenuEntryDto>(raw).unwrap_err();
        assert!(err.to_string().contains("CarouselMenu"));
    }
}
