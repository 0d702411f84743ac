use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_advisory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use milreg::config::AppConfig;
use milreg::error::AppError;
use milreg::records::AdvisoryService;
use milreg::telemetry;
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

    telemetry::init(&config.telemetry)?;

    // An unusable catalog stops startup before the listener is bound.
    let catalog = config.advisor.catalog()?;
    let advisory_service = Arc::new(AdvisoryService::new(catalog));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_advisory_routes(advisory_service.clone())
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        revision = advisory_service.engine().catalog().revision(),
        "registration advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
