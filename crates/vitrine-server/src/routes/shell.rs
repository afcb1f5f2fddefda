//! Page shell route.
//!
//! `GET /api/shell` returns the header and footer as one payload. The
//! two entries are fetched concurrently and both must resolve; a missing
//! half fails the whole response.

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::routing::get;

use vitrine_core::PageShell;

use crate::error::ApiError;
use crate::routes::PreviewParams;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/shell", get(shell))
}

/// GET /api/shell — `{ "header": ..., "footer": ... }`.
async fn shell(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
) -> Result<Json<PageShell>, ApiError> {
    let preview = params.resolve(state.preview_default);
    let shell = state.service.shell(preview).await?;
    Ok(Json(shell))
}
