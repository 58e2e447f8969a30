//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus
//! configuration and tracing setup.

pub mod clock;
pub mod config;
pub mod ports;
pub mod telemetry;
