//! Content component routes.
//!
//! `GET /api/components/{kind}/all` returns every entry of a block kind
//! as `{ "<kind>s": [...] }`. `GET /api/components/{kind}/{id}` returns
//! a single entry. Header and footer are singleton shell entries: they
//! are served by id here but have no collection endpoint.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use strum::{Display, EnumString};

use vitrine_core::model::EntryId;

use crate::error::ApiError;
use crate::routes::PreviewParams;
use crate::state::AppState;

/// Content kinds addressable through the `{kind}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    Banner,
    Accordion,
    Event,
    Modal,
    Social,
    Testimonial,
    Header,
    Footer,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/components/{kind}/all", get(collection))
        .route("/api/components/{kind}/{id}", get(entry))
}

/// GET /api/components/{kind}/all — every entry of one block kind.
async fn collection(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<PreviewParams>,
) -> Result<Response, ApiError> {
    let kind: ContentKind = kind
        .parse()
        .map_err(|_| ApiError::UnknownKind(kind.clone()))?;
    let preview = params.resolve(state.preview_default);

    let response = match kind {
        ContentKind::Banner => {
            let items = state.service.banners(preview).await?;
            Json(json!({ "banners": items })).into_response()
        }
        ContentKind::Accordion => {
            let items = state.service.accordions(preview).await?;
            Json(json!({ "accordions": items })).into_response()
        }
        ContentKind::Event => {
            let items = state.service.events(preview).await?;
            Json(json!({ "events": items })).into_response()
        }
        ContentKind::Modal => {
            let items = state.service.modals(preview).await?;
            Json(json!({ "modals": items })).into_response()
        }
        ContentKind::Social => {
            let items = state.service.socials(preview).await?;
            Json(json!({ "socials": items })).into_response()
        }
        ContentKind::Testimonial => {
            let items = state.service.testimonials(preview).await?;
            Json(json!({ "testimonials": items })).into_response()
        }
        ContentKind::Header | ContentKind::Footer => {
            return Err(ApiError::SingletonKind(kind.to_string()));
        }
    };

    Ok(response)
}

/// GET /api/components/{kind}/{id} — one entry by its `sys.id`.
async fn entry(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    Query(params): Query<PreviewParams>,
) -> Result<Response, ApiError> {
    let kind: ContentKind = kind
        .parse()
        .map_err(|_| ApiError::UnknownKind(kind.clone()))?;
    let preview = params.resolve(state.preview_default);
    let id = EntryId::from(id);

    let response = match kind {
        ContentKind::Banner => Json(state.service.banner(&id, preview).await?).into_response(),
        ContentKind::Accordion => {
            Json(state.service.accordion(&id, preview).await?).into_response()
        }
        ContentKind::Event => Json(state.service.event(&id, preview).await?).into_response(),
        ContentKind::Modal => Json(state.service.modal(&id, preview).await?).into_response(),
        ContentKind::Social => Json(state.service.social(&id, preview).await?).into_response(),
        ContentKind::Testimonial => {
            Json(state.service.testimonial(&id, preview).await?).into_response()
        }
        ContentKind::Header => Json(state.service.header(&id, preview).await?).into_response(),
        ContentKind::Footer => Json(state.service.footer(&id, preview).await?).into_response(),
    };

    Ok(response)
}
