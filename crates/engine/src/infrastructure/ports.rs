//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Randomness (sampling and draw ids)
//! - Clock (draw timestamps)
//! - Delay (the animation pause before results are revealed)
//!
//! All three are injected so tests can run deterministic, instant draws.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniformly chosen index in `0..upper`. `upper` is never zero.
    fn gen_index(&self, upper: usize) -> usize;
    fn gen_uuid(&self) -> Uuid;
}

// =============================================================================
// Scheduling Port
// =============================================================================

/// Suspension point used while a draw is animating.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DelayPort: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
