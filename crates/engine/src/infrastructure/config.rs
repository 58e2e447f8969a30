//! Engine configuration loaded from the environment.

use std::time::Duration;

use luckydraw_domain::{LotteryTypeId, DOUBLE_COLOR_BALL};

pub const ENV_ANIMATION_DELAY_MS: &str = "LUCKYDRAW_ANIMATION_DELAY_MS";
pub const ENV_INITIAL_LOTTERY_TYPE: &str = "LUCKYDRAW_INITIAL_LOTTERY_TYPE";
pub const ENV_LOG: &str = "LUCKYDRAW_LOG";

const DEFAULT_ANIMATION_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_FILTER: &str = "luckydraw_engine=info";

/// Settings for a draw session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawConfig {
    /// Pause between triggering a draw and revealing the results
    pub animation_delay: Duration,
    /// Lottery type selected when a session starts
    pub initial_lottery_type: LotteryTypeId,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            animation_delay: Duration::from_millis(DEFAULT_ANIMATION_DELAY_MS),
            initial_lottery_type: LotteryTypeId::from(DOUBLE_COLOR_BALL),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DrawConfig {
    /// Load from the process environment, reading a `.env` file first if present.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to load .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing or unparseable values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let animation_delay = match lookup(ENV_ANIMATION_DELAY_MS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(
                        key = ENV_ANIMATION_DELAY_MS,
                        value = %raw,
                        "Invalid animation delay, using default"
                    );
                    defaults.animation_delay
                }
            },
            None => defaults.animation_delay,
        };

        let initial_lottery_type = lookup(ENV_INITIAL_LOTTERY_TYPE)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(LotteryTypeId::from)
            .unwrap_or(defaults.initial_lottery_type);

        let log_filter = lookup(ENV_LOG)
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            animation_delay,
            initial_lottery_type,
            log_filter,
        }
    }

    pub fn with_animation_delay(mut self, delay: Duration) -> Self {
        self.animation_delay = delay;
        self
    }

    pub fn with_initial_lottery_type(mut self, id: impl Into<LotteryTypeId>) -> Self {
        self.initial_lottery_type = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DrawConfig::from_lookup(|_| None);
        assert_eq!(config, DrawConfig::default());
        assert_eq!(config.animation_delay, Duration::from_millis(1000));
        assert_eq!(config.initial_lottery_type, DOUBLE_COLOR_BALL);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = DrawConfig::from_lookup(lookup_from(&[
            (ENV_ANIMATION_DELAY_MS, "250"),
            (ENV_INITIAL_LOTTERY_TYPE, " SUPER_LOTTO "),
            (ENV_LOG, "luckydraw_engine=debug"),
        ]));
        assert_eq!(config.animation_delay, Duration::from_millis(250));
        assert_eq!(config.initial_lottery_type, "SUPER_LOTTO");
        assert_eq!(config.log_filter, "luckydraw_engine=debug");
    }

    #[test]
    fn test_invalid_delay_falls_back() {
        let config = DrawConfig::from_lookup(lookup_from(&[(ENV_ANIMATION_DELAY_MS, "soon")]));
        assert_eq!(config.animation_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_blank_type_falls_back() {
        let config = DrawConfig::from_lookup(lookup_from(&[(ENV_INITIAL_LOTTERY_TYPE, "  ")]));
        assert_eq!(config.initial_lottery_type, DOUBLE_COLOR_BALL);
    }

    #[test]
    fn test_builders() {
        let config = DrawConfig::default()
            .with_animation_delay(Duration::ZERO)
            .with_initial_lottery_type("SUPER_LOTTO");
        assert_eq!(config.animation_delay, Duration::ZERO);
        assert_eq!(config.initial_lottery_type, "SUPER_LOTTO");
    }
}
