//! Layered configuration for the vitrine gateway.
//!
//! Resolution order (later wins): built-in defaults, a TOML file
//! (`vitrine.toml` by default), `CONTENTFUL_*` environment aliases, and
//! finally `VITRINE_*` environment variables. The canonical Contentful
//! variable names (`CONTENTFUL_SPACE_ID`, `CONTENTFUL_ACCESS_TOKEN`,
//! `CONTENTFUL_PREVIEW_ACCESS_TOKEN`, `CONTENTFUL_ENVIRONMENT`) are
//! accepted so a space shared with other tooling needs no renaming.
//!
//! Tokens come out as [`SecretString`]; the validated [`Config`]
//! translates into `vitrine_api::ClientConfig` and
//! `vitrine_core::ShellDefaults` for the layers that consume it.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use vitrine_api::ClientConfig;
use vitrine_core::ShellDefaults;
use vitrine_core::model::EntryId;

/// Default config file name, resolved relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "vitrine.toml";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required config value: {field}")]
    MissingField { field: &'static str },

    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Raw (pre-validation) config ─────────────────────────────────────

/// Config exactly as merged from defaults, file, and environment.
///
/// Tokens stay plain strings here so the defaults layer can be fed back
/// through serde; [`RawConfig::validate`] wraps them in `SecretString`
/// and is the only place they cross into the typed config.
#[derive(Debug, Deserialize, Serialize)]
pub struct RawConfig {
    /// Contentful space identifier.
    pub space_id: Option<String>,

    /// Contentful environment name.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Delivery API token (published content).
    pub delivery_token: Option<String>,

    /// Preview API token (draft content).
    pub preview_token: Option<String>,

    /// Serve draft content when a request doesn't say otherwise.
    #[serde(default)]
    pub preview_default: bool,

    /// Entry id of the site header singleton.
    pub header_id: Option<String>,

    /// Entry id of the site footer singleton.
    pub footer_id: Option<String>,

    /// Public base URL of the site, exposed at `/api/site`.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Analytics property id, exposed at `/api/site` (optional).
    pub analytics_id: Option<String>,

    /// CMS request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Gateway listen address.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            space_id: None,
            environment: default_environment(),
            delivery_token: None,
            preview_token: None,
            preview_default: false,
            header_id: None,
            footer_id: None,
            site_url: default_site_url(),
            analytics_id: None,
            timeout_secs: default_timeout_secs(),
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_environment() -> String {
    "master".into()
}
fn default_site_url() -> String {
    "http://localhost:8080".into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

// ── Validated config ────────────────────────────────────────────────

/// Fully validated gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub space_id: String,
    pub environment: String,
    pub delivery_token: SecretString,
    pub preview_token: SecretString,
    pub preview_default: bool,
    pub header_id: EntryId,
    pub footer_id: EntryId,
    pub site_url: Url,
    pub analytics_id: Option<String>,
    pub timeout: Duration,
    pub listen_addr: SocketAddr,
}

impl RawConfig {
    /// Check required fields and parse the strongly typed ones.
    pub fn validate(self) -> Result<Config, ConfigError> {
        let space_id = require("space_id", self.space_id)?;
        let delivery_token = require("delivery_token", self.delivery_token)?;
        let preview_token = require("preview_token", self.preview_token)?;
        let header_id = require("header_id", self.header_id)?;
        let footer_id = require("footer_id", self.footer_id)?;

        let site_url: Url = self
            .site_url
            .parse()
            .map_err(|e: url::ParseError| ConfigError::Validation {
                field: "site_url",
                reason: e.to_string(),
            })?;

        let listen_addr: SocketAddr =
            self.listen_addr
                .parse()
                .map_err(|_| ConfigError::Validation {
                    field: "listen_addr",
                    reason: format!("expected host:port, got '{}'", self.listen_addr),
                })?;

        Ok(Config {
            space_id,
            environment: self.environment,
            delivery_token: delivery_token.into(),
            preview_token: preview_token.into(),
            preview_default: self.preview_default,
            header_id: header_id.into(),
            footer_id: footer_id.into(),
            site_url,
            analytics_id: self.analytics_id.filter(|v| !v.is_empty()),
            timeout: Duration::from_secs(self.timeout_secs),
            listen_addr,
        })
    }
}

fn require(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingField { field })
}

// ── Loading ─────────────────────────────────────────────────────────

/// The `CONTENTFUL_*` environment aliases, mapped onto canonical keys.
fn contentful_aliases() -> Env {
    Env::prefixed("CONTENTFUL_")
        .map(|key| {
            let k = key.as_str();
            if k.eq_ignore_ascii_case("access_token") {
                "delivery_token".into()
            } else if k.eq_ignore_ascii_case("preview_access_token") {
                "preview_token".into()
            } else {
                k.to_ascii_lowercase().into()
            }
        })
        .only(&["space_id", "environment", "delivery_token", "preview_token"])
}

/// Load and validate the config from file + environment.
///
/// `path` overrides the default `vitrine.toml`; a missing file is fine
/// (environment-only deployments are the common case).
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);

    let raw: RawConfig = Figment::new()
        .merge(Serialized::defaults(RawConfig::default()))
        .merge(Toml::file(&file))
        .merge(contentful_aliases())
        .merge(Env::prefixed("VITRINE_"))
        .extract()?;

    raw.validate()
}

// ── Translation to consumer types ───────────────────────────────────

impl Config {
    /// Client settings for `vitrine_api::ContentClient::new`.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            space_id: self.space_id.clone(),
            environment: self.environment.clone(),
            delivery_token: self.delivery_token.clone(),
            preview_token: self.preview_token.clone(),
            timeout: self.timeout,
        }
    }

    /// Shell entry ids for `vitrine_core::ContentService`.
    pub fn shell_defaults(&self) -> ShellDefaults {
        ShellDefaults {
            header_id: self.header_id.clone(),
            footer_id: self.footer_id.clone(),
        }
    }
}
