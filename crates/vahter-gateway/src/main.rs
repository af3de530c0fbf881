//! vahter gateway binary.
//!
//! - Attendance page: GET/POST /
//! - Prometheus metrics: /metrics
//! - Liveness/readiness: /healthz, /readyz
//! - Graceful shutdown on Ctrl+C / SIGTERM

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use vahter_core::error::{Result, VahterError};
use vahter_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(code = e.client_code().as_str(), error = %e, "vahter-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("VAHTER_CONFIG")
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| VahterError::Internal(format!("bind {listen} failed: {e}")))?;

    let port = listen.port();
    tracing::info!(%listen, "vahter-gateway starting");
    tracing::info!("page    -> http://localhost:{port}");
    tracing::info!("metrics -> http://localhost:{port}/metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| VahterError::Internal(format!("server failed: {e}")))?;

    tracing::info!("vahter-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.metrics().set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
