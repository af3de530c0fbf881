//! Top-level facade crate for vahter.
//!
//! Re-exports the record store and the web gateway so users can depend on a single crate.

pub mod core {
    pub use vahter_core::*;
}

pub mod gateway {
    pub use vahter_gateway::*;
}
