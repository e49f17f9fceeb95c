//! Adapter implementations of the port traits.
//!
//! `live` adapters touch the real world (system clock, HTTP estimation
//! service). `fixed` adapters are deterministic doubles for tests and for
//! consumers that need reproducible verdicts.

pub mod fixed;
pub mod live;
