use crate::cli::ServeArgs;
use crate::infra::{build_profile_service, AppState};
use crate::routes::with_applicant_routes;
use applicant_portal::config::AppConfig;
use applicant_portal::error::AppError;
use applicant_portal::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let profile_service = Arc::new(build_profile_service(&config, args.seed.as_deref())?);

    let app = with_applicant_routes(profile_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        list_experiences = config.profiles.list_experiences,
        list_extra_documents = config.profiles.list_extra_documents,
        "applicant portal ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
