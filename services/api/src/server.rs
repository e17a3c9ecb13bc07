use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_footprint_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use footprint_quiz::config::AppConfig;
use footprint_quiz::error::AppError;
use footprint_quiz::quiz::FootprintService;
use footprint_quiz::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.catalog_csv.take() {
        config.footprint.catalog_csv = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(config.footprint.catalog_csv.as_deref())?;
    let service = Arc::new(FootprintService::new(
        catalog,
        config.footprint.scoring.clone(),
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let questions = service.catalog().len();
    let app = with_footprint_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, questions, "footprint quiz service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
