//! HTTP gateway for the vitrine marketing site.
//!
//! Serves validated CMS content as JSON: per-kind component routes, the
//! page shell, public site metadata, and the fixed short-circuit routes
//! (`/api/checkout/step3`, `/.well-known/*`). [`build_router`] assembles
//! the surface; the binary adds config loading and listener setup.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use error::{ApiError, ErrorBody};
pub use state::{AppState, SiteMeta};

/// Assemble the application router with tracing and CORS applied.
///
/// Every request runs inside a span carrying a fresh correlation id;
/// sanitized error responses log their full detail into that span.
pub fn build_router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %Uuid::new_v4(),
        )
    });

    Router::new()
        .merge(routes::components::router())
        .merge(routes::shell::router())
        .merge(routes::checkout::router())
        .merge(routes::well_known::router())
        .merge(routes::site::router())
        .merge(routes::health::router())
        .layer(CorsLayer::permissive())
        .layer(trace)
        .with_state(state)
}
