use crate::cli::ServeArgs;
use crate::infra::{sample_leads, AppState, InMemoryLeadStore};
use crate::routes::{cors_layer, with_service_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use leasing_ai::config::AppConfig;
use leasing_ai::error::AppError;
use leasing_ai::telemetry;
use leasing_ai::workflows::leads::{CsvLeadStore, LeadIntelligenceService, LeadStore};
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

    telemetry::init(&config.telemetry)?;

    match config.store.csv_path.clone() {
        Some(path) => {
            info!(path = %path.display(), "reading lead history from csv export");
            serve(config, Arc::new(CsvLeadStore::new(path))).await
        }
        None => {
            let store = if config.store.seed_sample {
                InMemoryLeadStore::seeded(&sample_leads())
            } else {
                InMemoryLeadStore::default()
            };
            info!(seeded = config.store.seed_sample, "using in-memory lead history");
            serve(config, Arc::new(store)).await
        }
    }
}

async fn serve<S>(config: AppConfig, store: Arc<S>) -> Result<(), AppError>
where
    S: LeadStore + 'static,
{
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(LeadIntelligenceService::new(store, config.scoring.clone()));

    let app = with_service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors_layer(&config.server.allowed_origins));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, origins = config.server.allowed_origins.len(), "lead scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
