//! Checkout stub.
//!
//! The site links into a hosted store for purchases; the local checkout
//! flow was never built. The route answers with a fixed `501` for any
//! request body so clients get a deliberate signal instead of a 404.

use axum::Router;
use axum::routing::post;

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/checkout/step3", post(step3))
}

/// POST /api/checkout/step3 — always `501`, body ignored.
async fn step3() -> ApiError {
    ApiError::CheckoutUnsupported
}
