//! Lightweight in-process metrics.
//!
//! Counters, gauges and histograms are atomics keyed by label sets and
//! rendered as Prometheus text by the `/metrics` handler. `http` holds the
//! middleware that feeds the per-request series.

pub mod http;
pub mod metrics;

pub use metrics::GatewayMetrics;
