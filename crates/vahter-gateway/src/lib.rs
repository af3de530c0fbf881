//! vahter gateway library entry.
//!
//! Wires the record store, the attendance page, metrics and operational
//! endpoints into one axum router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod attendance;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
