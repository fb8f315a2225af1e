//! Observability wiring for the console service.
//!
//! # Purpose
//! Initializes tracing and the Prometheus metrics endpoint with defaults
//! suitable for both local and production usage.
//!
//! # Notes
//! Initialization is guarded by `OnceLock` to keep startup idempotent in tests.
use metrics_exporter_prometheus::PrometheusBuilder;
use metrics_exporter_prometheus::PrometheusHandle;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static METRICS_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();
static OBS_INIT: OnceLock<()> = OnceLock::new();

pub fn init_observability(service_name: &str) -> anyhow::Result<PrometheusHandle> {
    OBS_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer();
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
    tracing::debug!(service = service_name, "observability initialized");

    install_metrics_recorder()
}

pub async fn serve_metrics(handle: PrometheusHandle, addr: SocketAddr) -> std::io::Result<()> {
    serve_metrics_with_shutdown(handle, addr, std::future::pending()).await
}

async fn serve_metrics_with_shutdown<F>(
    handle: PrometheusHandle,
    addr: SocketAddr,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_metrics_with_listener(handle, listener, shutdown).await
}

async fn serve_metrics_with_listener<F>(
    handle: PrometheusHandle,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = axum::Router::new().route(
        "/metrics",
        axum::routing::get(move || async move { handle.render() }),
    );
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
}

fn install_metrics_recorder() -> anyhow::Result<PrometheusHandle> {
    // Only the first caller installs; the global recorder can be set once.
    METRICS_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "failed to install metrics recorder");
                None
            }
        })
        .clone()
        .ok_or_else(|| anyhow::anyhow!("metrics recorder unavailable"))
}
