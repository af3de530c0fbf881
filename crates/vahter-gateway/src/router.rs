//! Axum router wiring.
//!
//! `/` serves the attendance page (GET) and accepts submissions (POST);
//! `/metrics`, `/healthz` and `/readyz` are operational. Everything else,
//! including unmatched paths, passes through the request metrics layer.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, attendance, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(attendance::index).post(attendance::submit))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .fallback(ops::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), obs::http::track))
        .with_state(state)
}
