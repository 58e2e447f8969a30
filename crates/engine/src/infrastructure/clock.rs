//! Clock, random and delay implementations.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::infrastructure::ports::{ClockPort, DelayPort, RandomPort};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses the thread-local RNG.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Seeded random - reproducible sequence of draws for a given seed.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock still holds a usable RNG state.
        let mut guard = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl RandomPort for SeededRandom {
    fn gen_index(&self, upper: usize) -> usize {
        self.with_rng(|rng| rng.gen_range(0..upper))
    }

    fn gen_uuid(&self) -> Uuid {
        let bytes: [u8; 16] = self.with_rng(|rng| rng.gen());
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// Tokio timer - real pause between draw trigger and reveal.
pub struct TokioDelay;

impl TokioDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioDelay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DelayPort for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// No delay - resolves immediately, keeps the animating transition.
pub struct NoDelay;

#[async_trait]
impl DelayPort for NoDelay {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scripted random for testing: returns the queued indices in order
/// (each reduced modulo the bound), then zero.
#[cfg(test)]
pub struct ScriptedRandom {
    indices: Mutex<std::collections::VecDeque<usize>>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: Mutex::new(indices.into_iter().collect()),
        }
    }
}

#[cfg(test)]
impl RandomPort for ScriptedRandom {
    fn gen_index(&self, upper: usize) -> usize {
        let next = self.indices.lock().unwrap().pop_front().unwrap_or(0);
        next % upper
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_random_stays_in_bounds() {
        let random = SystemRandom::new();
        for upper in 1..50 {
            assert!(random.gen_index(upper) < upper);
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(2024);
        let b = SeededRandom::new(2024);
        let seq_a: Vec<usize> = (0..20).map(|_| a.gen_index(33)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.gen_index(33)).collect();
        assert_eq!(seq_a, seq_b);
        assert_eq!(a.gen_uuid(), b.gen_uuid());
    }

    #[test]
    fn test_scripted_random_wraps_to_bound() {
        let random = ScriptedRandom::new([7, 1]);
        assert_eq!(random.gen_index(5), 2);
        assert_eq!(random.gen_index(5), 1);
        assert_eq!(random.gen_index(5), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_waits_for_duration() {
        let start = tokio::time::Instant::now();
        TokioDelay::new().sleep(Duration::from_millis(1000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        NoDelay.sleep(Duration::from_secs(3600)).await;
    }
}
