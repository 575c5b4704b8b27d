use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::domain::{ItemId, Occasion, Season};
use super::repository::{ClosetRepository, RepositoryError};
use super::service::{NewClosetItem, WardrobeService, WardrobeServiceError};

/// Router builder exposing HTTP endpoints for closet CRUD, wear logging,
/// outfit suggestions, and analytics.
pub fn closet_router<R>(service: Arc<WardrobeService<R>>) -> Router
where
    R: ClosetRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/closet/:owner/items",
            post(add_item_handler::<R>).get(list_items_handler::<R>),
        )
        .route(
            "/api/v1/closet/:owner/items/:item_id/wear",
            post(log_wear_handler::<R>),
        )
        .route("/api/v1/closet/:owner/outfits", post(suggest_handler::<R>))
        .route(
            "/api/v1/closet/:owner/analytics",
            get(analytics_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OutfitRequest {
    pub(crate) occasion: Occasion,
    #[serde(default)]
    pub(crate) season: Option<Season>,
}

pub(crate) async fn add_item_handler<R>(
    State(service): State<Arc<WardrobeService<R>>>,
    Path(owner): Path<String>,
    axum::Json(attributes): axum::Json<NewClosetItem>,
) -> Response
where
    R: ClosetRepository + 'static,
{
    match service.add_item(&owner, attributes) {
        Ok(item) => (StatusCode::CREATED, axum::Json(item)).into_response(),
        Err(WardrobeServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "item already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_items_handler<R>(
    State(service): State<Arc<WardrobeService<R>>>,
    Path(owner): Path<String>,
) -> Response
where
    R: ClosetRepository + 'static,
{
    match service.items(&owner) {
        Ok(items) => (StatusCode::OK, axum::Json(items)).into_response(),
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn log_wear_handler<R>(
    State(service): State<Arc<WardrobeService<R>>>,
    Path((_owner, item_id)): Path<(String, String)>,
) -> Response
where
    R: ClosetRepository + 'static,
{
    let id = ItemId(item_id);
    match service.log_wear(&id, Utc::now()) {
        Ok(item) => (StatusCode::OK, axum::Json(item)).into_response(),
        Err(WardrobeServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "item not found", "item_id": id.0 });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn suggest_handler<R>(
    State(service): State<Arc<WardrobeService<R>>>,
    Path(owner): Path<String>,
    axum::Json(request): axum::Json<OutfitRequest>,
) -> Response
where
    R: ClosetRepository + 'static,
{
    match service.suggest_outfits(&owner, request.occasion, request.season) {
        Ok(matches) => (StatusCode::OK, axum::Json(matches)).into_response(),
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn analytics_handler<R>(
    State(service): State<Arc<WardrobeService<R>>>,
    Path(owner): Path<String>,
) -> Response
where
    R: ClosetRepository + 'static,
{
    match service.analytics(&owner, Utc::now()) {
        Ok(analytics) => (StatusCode::OK, axum::Json(analytics)).into_response(),
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
