//! Application state and composition.

use std::sync::Arc;

use luckydraw_domain::LotteryCatalog;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom, TokioDelay},
    config::DrawConfig,
    ports::{ClockPort, DelayPort, RandomPort},
    telemetry,
};
use crate::use_cases::draw::{DrawError, DrawPorts, LotterySession};

/// Main application state.
///
/// Holds the catalog, configuration and ports shared by every session.
/// Each user gets its own `LotterySession` from `new_session`.
pub struct App {
    pub catalog: Arc<LotteryCatalog>,
    pub config: DrawConfig,
    pub ports: DrawPorts,
}

impl App {
    /// Create a new App, checking the configured initial lottery type exists.
    pub fn new(
        config: DrawConfig,
        catalog: LotteryCatalog,
        ports: DrawPorts,
    ) -> Result<Self, DrawError> {
        if !catalog.contains(&config.initial_lottery_type) {
            return Err(DrawError::UnknownLotteryType(
                config.initial_lottery_type.clone(),
            ));
        }

        tracing::info!(
            lottery_types = catalog.len(),
            initial_lottery_type = %config.initial_lottery_type,
            animation_delay_ms = config.animation_delay.as_millis() as u64,
            "LuckyDraw engine configured"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            config,
            ports,
        })
    }

    /// Production wiring: environment config, tracing, built-in catalog and
    /// system ports.
    pub fn from_env() -> Result<Self, DrawError> {
        let config = DrawConfig::from_env();
        telemetry::init_tracing(&config.log_filter);
        Self::new(config, LotteryCatalog::new(), system_ports())
    }

    /// Start a fresh session on the configured initial lottery type.
    pub fn new_session(&self) -> Result<LotterySession, DrawError> {
        LotterySession::new(
            Arc::clone(&self.catalog),
            &self.config.initial_lottery_type,
            self.ports.clone(),
            self.config.animation_delay,
        )
    }
}

/// Ports backed by the thread RNG, wall clock and tokio timers.
pub fn system_ports() -> DrawPorts {
    let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::new());
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let delay: Arc<dyn DelayPort> = Arc::new(TokioDelay::new());
    DrawPorts {
        random,
        clock,
        delay,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use luckydraw_domain::{LotteryTypeId, Zone, SUPER_LOTTO};

    use super::*;
    use crate::infrastructure::clock::{NoDelay, SeededRandom};

    fn test_ports() -> DrawPorts {
        DrawPorts {
            random: Arc::new(SeededRandom::new(42)),
            clock: Arc::new(SystemClock::new()),
            delay: Arc::new(NoDelay),
        }
    }

    #[test]
    fn test_rejects_unknown_initial_type() {
        let config = DrawConfig::default().with_initial_lottery_type(LotteryTypeId::from("KENO"));
        let result = App::new(config, LotteryCatalog::new(), test_ports());
        assert!(matches!(result, Err(DrawError::UnknownLotteryType(id)) if id == "KENO"));
    }

    #[test]
    fn test_rejects_default_type_missing_from_empty_catalog() {
        let result = App::new(DrawConfig::default(), LotteryCatalog::empty(), test_ports());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_sessions_start_on_configured_type_and_are_independent() {
        let config = DrawConfig::default()
            .with_initial_lottery_type(LotteryTypeId::from(SUPER_LOTTO))
            .with_animation_delay(Duration::ZERO);
        let app = App::new(config, LotteryCatalog::new(), test_ports()).unwrap();

        let mut first = app.new_session().unwrap();
        let second = app.new_session().unwrap();
        assert_eq!(first.current_type_id(), &LotteryTypeId::from(SUPER_LOTTO));

        first.pick_numbers().await.unwrap();

        assert_eq!(first.selected_numbers(Zone::Primary).len(), 5);
        assert!(second.selected_numbers(Zone::Primary).is_empty());
    }

    #[test]
    fn test_system_ports_are_usable() {
        let ports = system_ports();
        assert!(ports.random.gen_index(10) < 10);
        assert!(!ports.random.gen_uuid().is_nil());
    }
}
