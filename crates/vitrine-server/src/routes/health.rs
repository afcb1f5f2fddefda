//! Liveness probe.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}

/// GET /healthz — `200` whenever the process is serving. The gateway is
/// stateless, so there is no deeper readiness to check.
async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
