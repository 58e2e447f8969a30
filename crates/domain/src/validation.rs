//! Pick-count validation
//!
//! Counts are checked zone by zone, primary first, and the first failure is
//! reported. The pool-size check always uses the zone's default range span,
//! even when a custom pool is active; the actual pool is re-checked at draw
//! time.

use thiserror::Error;

use crate::catalog::{LotteryCatalog, LotteryTypeDefinition};
use crate::error::DomainError;
use crate::zone::{Zone, ZoneConfig, ZonePair};

/// Error when a resolved pick count is not allowed for its zone
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountValidationError {
    #[error("{zone_name} requires at least {min} numbers")]
    BelowMinimum {
        zone: Zone,
        zone_name: String,
        min: u32,
        requested: i64,
    },
    #[error("{zone_name} allows at most {max} numbers")]
    AboveMaximum {
        zone: Zone,
        zone_name: String,
        max: u32,
        requested: i64,
    },
    #[error("{zone_name} pool only has {pool_size} numbers, cannot pick {requested}")]
    ExceedsPoolSize {
        zone: Zone,
        zone_name: String,
        pool_size: usize,
        requested: i64,
    },
}

impl CountValidationError {
    /// The zone whose count failed.
    pub fn zone(&self) -> Zone {
        match self {
            Self::BelowMinimum { zone, .. }
            | Self::AboveMaximum { zone, .. }
            | Self::ExceedsPoolSize { zone, .. } => *zone,
        }
    }
}

/// Check one zone's count: minimum, then maximum, then default pool span.
pub fn validate_zone_count(
    zone: Zone,
    config: &ZoneConfig,
    count: i64,
) -> Result<(), CountValidationError> {
    if count < i64::from(config.min_count) {
        return Err(CountValidationError::BelowMinimum {
            zone,
            zone_name: config.name.clone(),
            min: config.min_count,
            requested: count,
        });
    }
    if count > i64::from(config.max_count) {
        return Err(CountValidationError::AboveMaximum {
            zone,
            zone_name: config.name.clone(),
            max: config.max_count,
            requested: count,
        });
    }
    let pool_size = config.pool_size();
    if count > pool_size as i64 {
        return Err(CountValidationError::ExceedsPoolSize {
            zone,
            zone_name: config.name.clone(),
            pool_size,
            requested: count,
        });
    }
    Ok(())
}

/// Validate both zones' counts for a lottery type, short-circuiting on the
/// first failure (primary before secondary).
pub fn validate_counts(
    definition: &LotteryTypeDefinition,
    counts: &ZonePair<i64>,
) -> Result<(), CountValidationError> {
    for (zone, &count) in counts.iter() {
        validate_zone_count(zone, definition.zone(zone), count)?;
    }
    Ok(())
}

/// Validate counts for a lottery type looked up by id.
pub fn validate_counts_for(
    catalog: &LotteryCatalog,
    type_id: &str,
    primary_count: i64,
    secondary_count: i64,
) -> Result<(), DomainError> {
    let definition = catalog.definition(type_id)?;
    validate_counts(definition, &ZonePair::new(primary_count, secondary_count))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DOUBLE_COLOR_BALL, SUPER_LOTTO};
    use crate::zone::NumberRange;

    fn catalog() -> LotteryCatalog {
        LotteryCatalog::new()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_counts_for(&catalog(), DOUBLE_COLOR_BALL, 6, 1).is_ok());
        assert!(validate_counts_for(&catalog(), SUPER_LOTTO, 5, 2).is_ok());
    }

    #[test]
    fn test_below_minimum() {
        let err = validate_counts_for(&catalog(), SUPER_LOTTO, 2, 2).unwrap_err();
        match err {
            DomainError::Count(CountValidationError::BelowMinimum {
                zone, min, requested, ..
            }) => {
                assert_eq!(zone, Zone::Primary);
                assert_eq!(min, 5);
                assert_eq!(requested, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_above_maximum() {
        let err = validate_counts_for(&catalog(), DOUBLE_COLOR_BALL, 11, 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Count(CountValidationError::AboveMaximum { max: 10, .. })
        ));
    }

    #[test]
    fn test_primary_failure_wins_over_secondary() {
        let err = validate_counts_for(&catalog(), DOUBLE_COLOR_BALL, 1, 99).unwrap_err();
        match err {
            DomainError::Count(e) => assert_eq!(e.zone(), Zone::Primary),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_secondary_checked_after_primary_passes() {
        let err = validate_counts_for(&catalog(), SUPER_LOTTO, 5, 1).unwrap_err();
        match err {
            DomainError::Count(e) => {
                assert_eq!(e.zone(), Zone::Secondary);
                assert_eq!(e.to_string(), "Back zone requires at least 2 numbers");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_exceeds_default_pool_span() {
        // max_count larger than the range: only the pool check can catch it.
        let config = ZoneConfig::new("Tiny", NumberRange::new(1, 4), 2, 1, 8);
        let err = validate_zone_count(Zone::Secondary, &config, 6).unwrap_err();
        assert_eq!(
            err,
            CountValidationError::ExceedsPoolSize {
                zone: Zone::Secondary,
                zone_name: "Tiny".to_string(),
                pool_size: 4,
                requested: 6,
            }
        );
    }

    #[test]
    fn test_negative_count_is_below_minimum() {
        let config = ZoneConfig::new("Tiny", NumberRange::new(1, 4), 2, 1, 4);
        assert!(matches!(
            validate_zone_count(Zone::Primary, &config, -3),
            Err(CountValidationError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn test_unknown_type() {
        assert!(matches!(
            validate_counts_for(&catalog(), "KENO", 6, 1),
            Err(DomainError::UnknownLotteryType(_))
        ));
    }
}
