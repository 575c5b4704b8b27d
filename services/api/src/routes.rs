use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use wardrobe::closet::{
    calculate_closet_analytics, closet_router, ClosetAnalytics, ClosetItem, ClosetRepository,
    MatchEngine, MatchPolicy, Occasion, OutfitMatch, Season, WardrobeService,
};

#[derive(Debug, Deserialize)]
pub(crate) struct OutfitMatchRequest {
    pub(crate) items: Vec<ClosetItem>,
    pub(crate) occasion: Occasion,
    #[serde(default)]
    pub(crate) season: Option<Season>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OutfitMatchResponse {
    pub(crate) occasion: Occasion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) season: Option<Season>,
    pub(crate) evaluated_items: usize,
    pub(crate) matches: Vec<OutfitMatch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClosetReportRequest {
    pub(crate) items: Vec<ClosetItem>,
    #[serde(default)]
    pub(crate) now: Option<DateTime<Utc>>,
}

pub(crate) fn with_closet_routes<R>(service: Arc<WardrobeService<R>>) -> axum::Router
where
    R: ClosetRepository + 'static,
{
    closet_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/outfits/match",
            axum::routing::post(outfit_match_endpoint),
        )
        .route(
            "/api/v1/closet/report",
            axum::routing::post(closet_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless matching: score a caller-supplied closet without touching the
/// repository. Useful for previews and for callers that own their storage.
pub(crate) async fn outfit_match_endpoint(
    Json(payload): Json<OutfitMatchRequest>,
) -> Json<OutfitMatchResponse> {
    let OutfitMatchRequest {
        items,
        occasion,
        season,
    } = payload;

    let engine = MatchEngine::new(MatchPolicy::standard());
    let matches = engine.generate_matches(&items, occasion, season);

    Json(OutfitMatchResponse {
        occasion,
        season,
        evaluated_items: items.len(),
        matches,
    })
}

pub(crate) async fn closet_report_endpoint(
    Json(payload): Json<ClosetReportRequest>,
) -> Json<ClosetAnalytics> {
    let ClosetReportRequest { items, now } = payload;
    let now = now.unwrap_or_else(Utc::now);
    Json(calculate_closet_analytics(&items, now))
}
