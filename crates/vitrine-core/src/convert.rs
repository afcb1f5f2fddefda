// ── API-to-domain type conversions ──
//
// Bridges raw `vitrine_api` response DTOs into canonical
// `vitrine_core::model` domain types. Present fields pass through
// unchanged; nested `*Collection { items }` wrappers flatten to `Vec`s;
// documented defaults (modal `enabled`) are applied here, never in the
// decode layer.

use vitrine_api::content::accordions::{AccordionDto, AccordionItemDto};
use vitrine_api::content::banners::BannerDto;
use vitrine_api::content::events::EventDto;
use vitrine_api::content::modals::ModalDto;
use vitrine_api::content::navigation::{
    FooterDto, HeaderDto, MegaMenuDto, MenuColumnDto, MenuEntryDto, MenuItemDto,
};
use vitrine_api::content::socials::SocialDto;
use vitrine_api::content::testimonials::TestimonialDto;
use vitrine_api::types::{CtaDto, ImageDto};

use crate::model::{
    Accordion, AccordionItem, Banner, Cta, Event, Footer, Header, Image, MegaMenu, MenuColumn,
    MenuEntry, MenuItem, Modal, Social, Testimonial,
};

// ── Building blocks ─────────────────────────────────────────────────

impl From<ImageDto> for Image {
    fn from(i: ImageDto) -> Self {
        Image {
            url: i.url,
            title: i.title,
            description: i.description,
            // Asset dimensions are non-negative in the domain; out-of-range
            // raw values degrade to None.
            width: i.width.and_then(|w| w.try_into().ok()),
            height: i.height.and_then(|h| h.try_into().ok()),
        }
    }
}

impl From<CtaDto> for Cta {
    fn from(c: CtaDto) -> Self {
        Cta {
            label: c.label,
            url: c.url,
        }
    }
}

// ── Block types ─────────────────────────────────────────────────────

impl From<BannerDto> for Banner {
    fn from(b: BannerDto) -> Self {
        Banner {
            id: b.sys.id.into(),
            title: b.title,
            subtitle: b.subtitle,
            image: b.image.map(Into::into),
            cta: b.cta.map(Into::into),
        }
    }
}

impl From<AccordionItemDto> for AccordionItem {
    fn from(i: AccordionItemDto) -> Self {
        AccordionItem {
            title: i.title,
            body: i.body,
        }
    }
}

impl From<AccordionDto> for Accordion {
    fn from(a: AccordionDto) -> Self {
        Accordion {
            id: a.sys.id.into(),
            heading: a.heading,
            items: a
                .items_collection
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<EventDto> for Event {
    fn from(e: EventDto) -> Self {
        Event {
            id: e.sys.id.into(),
            title: e.title,
            date: e.date,
            location: e.location,
            description: e.description,
            image: e.image.map(Into::into),
        }
    }
}

impl From<ModalDto> for Modal {
    fn from(m: ModalDto) -> Self {
        Modal {
            id: m.sys.id.into(),
            title: m.title,
            body: m.body,
            // A modal without the flag is delivered as disabled.
            enabled: m.enabled.unwrap_or(false),
            cta: m.cta.map(Into::into),
        }
    }
}

impl From<SocialDto> for Social {
    fn from(s: SocialDto) -> Self {
        Social {
            id: s.sys.id.into(),
            platform: s.platform,
            url: s.url,
            icon: s.icon.map(Into::into),
        }
    }
}

impl From<TestimonialDto> for Testimonial {
    fn from(t: TestimonialDto) -> Self {
        Testimonial {
            id: t.sys.id.into(),
            quote: t.quote,
            author: t.author,
            role: t.role,
            avatar: t.avatar.map(Into::into),
        }
    }
}

// ── Navigation ──────────────────────────────────────────────────────

impl From<MenuItemDto> for MenuItem {
    fn from(m: MenuItemDto) -> Self {
        MenuItem {
            label: m.label,
            url: m.url,
        }
    }
}

impl From<MenuColumnDto> for MenuColumn {
    fn from(c: MenuColumnDto) -> Self {
        MenuColumn {
            heading: c.heading,
            links: c
                .links_collection
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<MegaMenuDto> for MegaMenu {
    fn from(m: MegaMenuDto) -> Self {
        MegaMenu {
            title: m.title,
            columns: m
                .columns_collection
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<MenuEntryDto> for MenuEntry {
    fn from(e: MenuEntryDto) -> Self {
        match e {
            MenuEntryDto::MenuItem(item) => MenuEntry::MenuItem(item.into()),
            MenuEntryDto::MegaMenu(mega) => MenuEntry::MegaMenu(mega.into()),
        }
    }
}

impl From<HeaderDto> for Header {
    fn from(h: HeaderDto) -> Self {
        Header {
            id: h.sys.id.into(),
            site_title: h.site_title,
            logo: h.logo.map(Into::into),
            menu: h
                .menu_items_collection
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<FooterDto> for Footer {
    fn from(f: FooterDto) -> Self {
        Footer {
            id: f.sys.id.into(),
            tagline: f.tagline,
            links: f
                .links_collection
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
            socials: f
                .socials_collection
                .items
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vitrine_api::types::{Collection, Sys};

    use super::*;
    use crate::model::EntryId;

    fn sys(id: &str) -> Sys {
        Sys { id: id.to_owned() }
    }

    #[test]
    fn banner_conversion_is_lossless_on_present_fields() {
        let dto = BannerDto {
            sys: sys("b1"),
            title: "Welcome".into(),
            subtitle: Some("Look closer".into()),
            image: Some(ImageDto {
                url: "https://images.example/hero.png".into(),
                title: Some("Hero".into()),
                description: None,
                width: Some(1920),
                height: Some(600),
            }),
            cta: Some(CtaDto {
                label: "Start".into(),
                url: "/start".into(),
            }),
        };

        let banner: Banner = dto.into();

        assert_eq!(
            banner,
            Banner {
                id: EntryId::from("b1"),
                title: "Welcome".into(),
                subtitle: Some("Look closer".into()),
                image: Some(Image {
                    url: "https://images.example/hero.png".into(),
                    title: Some("Hero".into()),
                    description: None,
                    width: Some(1920),
                    height: Some(600),
                }),
                cta: Some(Cta {
                    label: "Start".into(),
                    url: "/start".into(),
                }),
            }
        );
    }

    #[test]
    fn negative_image_dimensions_degrade_to_none() {
        let image: Image = ImageDto {
            url: "https://images.example/x.png".into(),
            title: None,
            description: None,
            width: Some(-1),
            height: Some(600),
        }
        .into();

        assert_eq!(image.width, None);
        assert_eq!(image.height, Some(600));
    }

    #[test]
    fn modal_without_flag_converts_as_disabled() {
        let modal: Modal = ModalDto {
            sys: sys("m1"),
            title: "Sale".into(),
            body: None,
            enabled: None,
            cta: None,
        }
        .into();

        assert!(!modal.enabled);
    }

    #[test]
    fn accordion_flattens_nested_collection() {
        let accordion: Accordion = AccordionDto {
            sys: sys("a1"),
            heading: Some("FAQ".into()),
            items_collection: Collection {
                items: vec![
                    AccordionItemDto {
                        title: "Shipping?".into(),
                        body: "Worldwide.".into(),
                    },
                    AccordionItemDto {
                        title: "Returns?".into(),
                        body: "Within 30 days.".into(),
                    },
                ],
            },
        }
        .into();

        assert_eq!(accordion.items.len(), 2);
        assert_eq!(accordion.items[0].title, "Shipping?");
        assert_eq!(accordion.items[1].body, "Within 30 days.");
    }

    #[test]
    fn header_flattens_menu_and_keeps_entry_order() {
        let header: Header = HeaderDto {
            sys: sys("hdr"),
            site_title: "Vitrine".into(),
            logo: None,
            menu_items_collection: Collection {
                items: vec![
                    MenuEntryDto::MenuItem(MenuItemDto {
                        label: "Home".into(),
                        url: "/".into(),
                    }),
                    MenuEntryDto::MegaMenu(MegaMenuDto {
                        title: "Products".into(),
                        columns_collection: Collection {
                            items: vec![MenuColumnDto {
                                heading: Some("Apps".into()),
                                links_collection: Collection {
                                    items: vec![MenuItemDto {
                                        label: "Web".into(),
                                        url: "/web".into(),
                                    }],
                                },
                            }],
                        },
                    }),
                ],
            },
        }
        .into();

        assert_eq!(header.menu.len(), 2);
        assert!(matches!(header.menu[0], MenuEntry::MenuItem(_)));
        let MenuEntry::MegaMenu(ref mega) = header.menu[1] else {
            panic!("expected mega menu in slot 1");
        };
        assert_eq!(mega.columns[0].links[0].url, "/web");
    }
}
