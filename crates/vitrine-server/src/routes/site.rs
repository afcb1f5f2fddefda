//! Public site metadata route.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::get;

use crate::state::{AppState, SiteMeta};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/site", get(site))
}

/// GET /api/site — the config values the client bundle is allowed to see.
async fn site(State(state): State<AppState>) -> Json<SiteMeta> {
    Json(state.site.clone())
}
