// Per-content-type fetch operations.
//
// Each module declares the GraphQL documents and response DTOs for one
// content type, and implements the fetch methods as inherent methods on
// `ContentClient`. Block types support by-id and fetch-all; the header
// and footer shell entries are by-id only.

pub mod accordions;
pub mod banners;
pub mod events;
pub mod modals;
pub mod navigation;
pub mod socials;
pub mod testimonials;
