//! Shared application state for the vahter gateway.
//!
//! The record store is constructed here and handed to handlers through axum
//! state; there is no process-global list.

use std::sync::Arc;

use vahter_core::{Clock, LocalClock, RecordStore};

use crate::config::VahterConfig;
use crate::obs::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: VahterConfig,
    store: RecordStore,
    metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Build state on the local wall clock.
    pub fn new(cfg: VahterConfig) -> Self {
        Self::with_clock(cfg, Arc::new(LocalClock))
    }

    pub fn with_clock(cfg: VahterConfig, clock: Arc<dyn Clock>) -> Self {
        let metrics = Arc::new(GatewayMetrics::new());
        let store = RecordStore::with_parts(clock, metrics.clone());
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                metrics,
            }),
        }
    }

    pub fn cfg(&self) -> &VahterConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &RecordStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.inner.metrics)
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    /// Gauges sampled at scrape time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("vahter_records_stored", self.inner.store.len() as u64)]
    }
}
