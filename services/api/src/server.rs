use crate::cli::ServeArgs;
use crate::infra::{catalog_path, AppState};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nutrisync::catalog::FoodCatalog;
use nutrisync::config::AppConfig;
use nutrisync::error::AppError;
use nutrisync::nutrition::NutritionService;
use nutrisync::telemetry;
use std::sync::atomic::Ordering;
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
    config.catalog.path = catalog_path(&config.catalog, args.catalog.take());

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // A missing or unreadable catalog degrades to an empty one.
    let catalog = Arc::new(FoodCatalog::load_or_empty(&config.catalog.path));
    let foods = catalog.len();
    let service = Arc::new(NutritionService::new(catalog));

    let app = with_operational_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, foods, "nutrisync api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
