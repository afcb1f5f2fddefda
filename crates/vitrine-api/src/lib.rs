//! Async client for the Contentful GraphQL content APIs.
//!
//! [`ContentClient`] speaks to one space/environment pair and holds both the
//! delivery and preview tokens; every fetch method takes a `preview` flag that
//! selects the token for that request. Responses are validated into typed DTOs
//! before they leave this crate, so callers never see raw JSON.
//!
//! ```no_run
//! use vitrine_api::{ClientConfig, ContentClient};
//!
//! # async fn demo() -> Result<(), vitrine_api::Error> {
//! let client = ContentClient::new(&ClientConfig {
//!     space_id: "cfexampleapi".into(),
//!     environment: "master".into(),
//!     delivery_token: "b4c0n73n7fu1".to_string().into(),
//!     preview_token: "e5e5m0t1f1ed".to_string().into(),
//!     timeout: std::time::Duration::from_secs(30),
//! })?;
//!
//! for banner in client.banners_all(false).await? {
//!     println!("{} ({})", banner.title, banner.sys.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
mod collect;
pub mod content;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{ClientConfig, ContentClient};
pub use error::Error;
