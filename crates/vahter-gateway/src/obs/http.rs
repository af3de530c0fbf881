//! Per-request metrics middleware.
//!
//! Installed with `Router::layer`. Routed requests carry `MatchedPath`, so the
//! `path` label is the route template rather than the raw URI; requests that
//! fall through to the 404 fallback are labeled `unmatched`.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;
use crate::obs::metrics::{duration_micros, GatewayMetrics};

/// Label value for requests no route matched.
pub const UNMATCHED_PATH: &str = "unmatched";

/// Holds one unit of `vahter_http_requests_in_flight` until dropped, so a
/// request future cancelled mid-flight still releases it.
pub struct InFlightGuard {
    metrics: Arc<GatewayMetrics>,
    method: String,
    path: String,
}

impl InFlightGuard {
    pub fn enter(metrics: Arc<GatewayMetrics>, method: &str, path: &str) -> Self {
        metrics
            .http_in_flight
            .inc(&[("method", method), ("path", path)]);
        Self {
            metrics,
            method: method.to_owned(),
            path: path.to_owned(),
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.metrics
            .http_in_flight
            .dec(&[("method", self.method.as_str()), ("path", self.path.as_str())]);
    }
}

pub async fn track(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_PATH.to_owned());

    let metrics = state.metrics();
    let guard = InFlightGuard::enter(Arc::clone(&metrics), &method, &path);
    let started = Instant::now();
    let resp = next.run(req).await;
    let elapsed = started.elapsed();
    drop(guard);

    let status = resp.status().as_u16().to_string();
    metrics.http_requests.inc(&[
        ("method", method.as_str()),
        ("path", path.as_str()),
        ("status", status.as_str()),
    ]);
    metrics
        .http_duration
        .observe(&[("method", method.as_str()), ("path", path.as_str())], elapsed);

    tracing::debug!(%method, %path, %status, micros = duration_micros(elapsed), "request served");
    resp
}
