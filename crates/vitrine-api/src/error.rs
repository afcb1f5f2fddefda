use thiserror::Error;

/// Top-level error type for the `vitrine-api` crate.
///
/// Distinguishes the three failure layers of a content fetch: transport
/// (no usable response), CMS (response received, query rejected), and
/// validation (response received, shape mismatch). `vitrine-core` maps
/// these into consumer-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── CMS ─────────────────────────────────────────────────────────
    /// Access token rejected by the CMS (HTTP 401).
    #[error("Invalid access token")]
    InvalidAccessToken,

    /// Rate limited by the CMS. Includes the reset interval in seconds.
    #[error("Rate limited -- retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The CMS answered with a query-level error envelope.
    #[error("CMS query error: {message}")]
    Cms { message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// Response did not match the expected shape, with the raw body
    /// for debugging.
    #[error("Validation error: {message}")]
    Validation { message: String, body: String },

    /// A single-entry query came back with null data for the entry.
    #[error("{content_type} '{id}' not found")]
    NotFound {
        content_type: &'static str,
        id: String,
    },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The gateway itself never retries; this exists for callers that
    /// embed the client in a job runner or warm-up path.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::RateLimited { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
