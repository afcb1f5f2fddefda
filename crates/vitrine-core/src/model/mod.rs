// ── Canonical content model ──
//
// Every type in this module is the canonical representation of a CMS
// entity. Raw `vitrine_api` DTOs are converted into these via
// `crate::convert` before anything downstream sees them; consumers
// (the HTTP gateway) never touch raw CMS JSON.

pub mod common;
pub mod entry_id;

pub mod accordion;
pub mod banner;
pub mod event;
pub mod modal;
pub mod navigation;
pub mod social;
pub mod testimonial;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use vitrine_core::model::*` gives you everything.

pub use entry_id::EntryId;

pub use common::{Cta, Image};

pub use accordion::{Accordion, AccordionItem};
pub use banner::Banner;
pub use event::Event;
pub use modal::Modal;
pub use navigation::{Footer, Header, MegaMenu, MenuColumn, MenuEntry, MenuItem};
pub use social::Social;
pub use testimonial::Testimonial;
