//! Shared request state.

use serde::Serialize;
use url::Url;

use vitrine_api::ContentClient;
use vitrine_config::Config;
use vitrine_core::ContentService;

/// Public site metadata served verbatim on `/api/site`.
///
/// These are the environment-driven values the site's client bundle needs:
/// the canonical site URL and the analytics key, never the CMS tokens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    pub site_url: Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
}

/// State shared by all route handlers.
///
/// Cheap to clone: the content service holds its client behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub service: ContentService,
    pub preview_default: bool,
    pub site: SiteMeta,
}

impl AppState {
    pub fn new(service: ContentService, preview_default: bool, site: SiteMeta) -> Self {
        Self {
            service,
            preview_default,
            site,
        }
    }

    /// Build the full state from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self, vitrine_api::Error> {
        let client = ContentClient::new(&config.client_config())?;
        let service = ContentService::new(client, config.shell_defaults());
        Ok(Self::new(
            service,
            config.preview_default,
            SiteMeta {
                site_url: config.site_url.clone(),
                analytics_id: config.analytics_id.clone(),
            },
        ))
    }
}
