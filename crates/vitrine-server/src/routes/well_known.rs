//! `.well-known` short-circuits.
//!
//! Browsers and tooling probe these paths on every origin. None of them
//! are CMS content, so they are answered locally: the Chrome devtools
//! probe gets an empty JSON object, everything else a fixed 404. Neither
//! touches the CMS.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/.well-known/appspecific/com.chrome.devtools.json",
            get(devtools),
        )
        .route("/.well-known/{*rest}", get(fallthrough))
}

/// GET /.well-known/appspecific/com.chrome.devtools.json — always `200 {}`.
async fn devtools() -> Json<Value> {
    Json(json!({}))
}

/// Any other well-known path — fixed 404 JSON.
async fn fallthrough() -> ApiError {
    ApiError::NotFound("not found".into())
}
