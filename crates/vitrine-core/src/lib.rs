// vitrine-core: canonical content model between vitrine-api and the HTTP gateway.

pub mod convert;
pub mod error;
pub mod model;
pub mod service;

// ── Primary re-exports ──────────────────────────────────────────────

pub use error::CoreError;
pub use service::{ContentService, PageShell, ShellDefaults};
