//! Custom number pools
//!
//! Users may replace a zone's default range with a comma separated list such
//! as "1, 2, 3, 8, 10". Parsing is lenient: bad tokens are dropped, never
//! reported. Validation then checks the surviving numbers against the zone.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::numeric::parse_leading_integer;
use crate::zone::{NumberRange, ZoneConfig};

/// Smallest number allowed in a custom pool.
pub const CUSTOM_POOL_FLOOR: u32 = 1;

/// Largest number allowed in a custom pool. This is a global cap and does not
/// depend on the zone's own configured range.
pub const CUSTOM_POOL_CEILING: u32 = 50;

/// Error when a parsed custom pool does not satisfy the zone constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolValidationError {
    /// Fewer numbers than the zone's minimum pick count
    #[error("At least {min} numbers are required, got {actual}")]
    TooFewNumbers { min: u32, actual: usize },
    /// A number lies outside the global custom pool bounds
    #[error("Number {value} is outside the allowed range {floor}-{ceiling}")]
    OutOfRange { value: u32, floor: u32, ceiling: u32 },
}

/// Ascending, duplicate-free set of candidate numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberPool(Vec<u32>);

impl NumberPool {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Normalize arbitrary numbers: sort ascending and drop duplicates.
    pub fn from_numbers(numbers: impl IntoIterator<Item = u32>) -> Self {
        let mut numbers: Vec<u32> = numbers.into_iter().collect();
        numbers.sort_unstable();
        numbers.dedup();
        Self(numbers)
    }

    pub fn from_range(range: NumberRange) -> Self {
        Self(range.numbers())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn contains(&self, value: u32) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &u32> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

impl fmt::Display for NumberPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Parse free text into a custom pool.
///
/// Splits on commas, trims each token and keeps tokens whose leading integer
/// is positive. Non-numeric, zero and negative tokens are silently dropped.
/// Never fails: blank input yields an empty pool.
pub fn parse_custom_pool(text: &str) -> NumberPool {
    if text.trim().is_empty() {
        return NumberPool::empty();
    }

    let numbers = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(parse_leading_integer)
        .filter(|&n| n > 0)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX));

    NumberPool::from_numbers(numbers)
}

/// Validate parsed pool numbers against a zone.
///
/// An empty pool is always valid: it means "no override". Otherwise the pool
/// must hold at least `min_count` numbers, all within
/// `CUSTOM_POOL_FLOOR..=CUSTOM_POOL_CEILING`.
pub fn validate_pool(numbers: &[u32], zone: &ZoneConfig) -> Result<(), PoolValidationError> {
    if numbers.is_empty() {
        return Ok(());
    }

    if numbers.len() < zone.min_count as usize {
        return Err(PoolValidationError::TooFewNumbers {
            min: zone.min_count,
            actual: numbers.len(),
        });
    }

    let out_of_range = |value| PoolValidationError::OutOfRange {
        value,
        floor: CUSTOM_POOL_FLOOR,
        ceiling: CUSTOM_POOL_CEILING,
    };

    if let Some(&lowest) = numbers.iter().min() {
        if lowest < CUSTOM_POOL_FLOOR {
            return Err(out_of_range(lowest));
        }
    }
    if let Some(&highest) = numbers.iter().max() {
        if highest > CUSTOM_POOL_CEILING {
            return Err(out_of_range(highest));
        }
    }

    Ok(())
}

/// Raw custom pool text together with its parsed pool and validation result.
///
/// The three are always computed together so a pool is never reported
/// without its matching validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomPoolInput {
    raw: String,
    pool: NumberPool,
    error: Option<PoolValidationError>,
}

impl CustomPoolInput {
    /// Parse and validate `raw` for `zone` in one step.
    pub fn evaluate(raw: impl Into<String>, zone: &ZoneConfig) -> Self {
        let raw = raw.into();
        let pool = parse_custom_pool(&raw);
        let error = validate_pool(pool.as_slice(), zone).err();
        Self { raw, pool, error }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn pool(&self) -> &NumberPool {
        &self.pool
    }

    pub fn error(&self) -> Option<&PoolValidationError> {
        self.error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// The pool to draw from instead of the zone default, if any.
    pub fn override_pool(&self) -> Option<&NumberPool> {
        if self.is_valid() && !self.pool.is_empty() {
            Some(&self.pool)
        } else {
            None
        }
    }
}
