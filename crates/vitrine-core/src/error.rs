// ── Core error types ──
//
// User-facing errors from vitrine-core. These are NOT transport-specific --
// consumers never see raw response bodies or reqwest internals directly.
// The `From<vitrine_api::Error>` impl translates API-layer errors into
// domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Content failed validation: {message}")]
    Invalid { message: String },

    // ── Upstream errors ──────────────────────────────────────────────
    #[error("CMS unreachable: {reason}")]
    Unavailable { reason: String },

    #[error("CMS rejected the query: {message}")]
    Cms { message: String },

    #[error("CMS access denied (check the configured tokens)")]
    AccessDenied,

    #[error("CMS rate limit hit -- retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Whether this error means the requested entry does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Conversion from API-layer errors ─────────────────────────────────

impl From<vitrine_api::Error> for CoreError {
    fn from(err: vitrine_api::Error) -> Self {
        match err {
            vitrine_api::Error::Network(e) => CoreError::Unavailable {
                reason: e.to_string(),
            },
            vitrine_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid endpoint URL: {e}"),
            },
            vitrine_api::Error::InvalidAccessToken => CoreError::AccessDenied,
            vitrine_api::Error::RateLimited { retry_after_secs } => {
                CoreError::RateLimited { retry_after_secs }
            }
            vitrine_api::Error::Cms { message } => CoreError::Cms { message },
            // Raw bodies stay at the API layer; only the decode message crosses.
            vitrine_api::Error::Validation { message, body: _ } => CoreError::Invalid { message },
            vitrine_api::Error::NotFound { content_type, id } => CoreError::NotFound {
                entity: content_type.to_owned(),
                id,
            },
        }
    }
}
