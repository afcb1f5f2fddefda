//! Route modules for the gateway surface.
//!
//! Each module exposes a `router()` merged into the application router
//! in `build_router`. Content routes accept a `?preview=` query flag;
//! when absent, the configured default applies.

pub mod checkout;
pub mod components;
pub mod health;
pub mod shell;
pub mod site;
pub mod well_known;

use serde::Deserialize;

/// Query parameters shared by every content route.
#[derive(Debug, Default, Deserialize)]
pub struct PreviewParams {
    /// Read draft content through the preview API instead of published
    /// content.
    pub preview: Option<bool>,
}

impl PreviewParams {
    /// An explicit `?preview=` beats the configured default.
    pub fn resolve(&self, default: bool) -> bool {
        self.preview.unwrap_or(default)
    }
}
