use crate::cli::ServeArgs;
use crate::infra::{default_match_policy, AppState, InMemoryClosetRepository};
use crate::routes::with_closet_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use wardrobe::closet::WardrobeService;
use wardrobe::config::AppConfig;
use wardrobe::error::AppError;
use wardrobe::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryClosetRepository::default());
    let wardrobe_service = Arc::new(WardrobeService::new(repository, default_match_policy()));

    let app = with_closet_routes(wardrobe_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "wardrobe service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
