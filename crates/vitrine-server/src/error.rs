//! HTTP error mapping for the gateway.
//!
//! Maps `CoreError` into responses with a flat `{"error": "..."}` JSON body.
//! Raw CMS and validation detail is logged server-side and never forwarded
//! verbatim to clients.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vitrine_core::CoreError;

/// JSON body returned for every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors produced by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested entry does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The `{kind}` path segment names no known content type (400).
    #[error("unknown content kind '{0}'")]
    UnknownKind(String),

    /// Header and footer are singleton shell entries with no collection
    /// endpoint (400).
    #[error("'{0}' has no collection endpoint; fetch it via /api/shell")]
    SingletonKind(String),

    /// Checkout is deliberately unimplemented (501).
    #[error("checkout is not implemented")]
    CheckoutUnsupported,

    /// Anything else (500). The message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnknownKind(_) | Self::SingletonKind(_) => StatusCode::BAD_REQUEST,
            Self::CheckoutUnsupported => StatusCode::NOT_IMPLEMENTED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Never expose upstream error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "request failed"),
            Self::CheckoutUnsupported => tracing::info!("checkout route hit"),
            _ => {}
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

// ── CoreError → ApiError mapping ─────────────────────────────────────

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_parts(err: ApiError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::UnknownKind("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::SingletonKind("header".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::CheckoutUnsupported.status(),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn not_found_passes_its_message_through() {
        let (status, body) = response_parts(ApiError::NotFound("banner not found: b1".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "banner not found: b1");
    }

    #[tokio::test]
    async fn internal_error_is_sanitized() {
        let (status, body) =
            response_parts(ApiError::Internal("token leaked-secret rejected".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "An internal error occurred");
        assert!(!body.error.contains("leaked-secret"));
    }

    #[tokio::test]
    async fn checkout_body_carries_the_fixed_message() {
        let (status, body) = response_parts(ApiError::CheckoutUnsupported).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body.error, "checkout is not implemented");
    }

    #[test]
    fn core_not_found_maps_to_404() {
        let core = CoreError::NotFound {
            entity: "banner".into(),
            id: "b1".into(),
        };
        let api = ApiError::from(core);
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert!(api.to_string().contains("b1"));
    }

    #[test]
    fn core_cms_error_maps_to_internal() {
        let core = CoreError::Cms {
            message: "Query cannot be executed".into(),
        };
        let api = ApiError::from(core);
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
