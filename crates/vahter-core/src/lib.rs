//! vahter core: the attendance record store and its collaborator seams.
//!
//! This crate owns the only stateful piece of the system: an in-memory,
//! process-lifetime list of attendance records. It knows nothing about HTTP,
//! templates or metric exposition; those live in `vahter-gateway` and plug in
//! through the [`Clock`] and [`OutcomeListener`] traits.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod record;
pub mod store;

/// Shared result type.
pub use error::{Result, VahterError};

pub use clock::{Clock, LocalClock};
pub use record::{Outcome, Record, Submission, Timestamp};
pub use store::{NoopListener, OutcomeListener, RecordStore};
