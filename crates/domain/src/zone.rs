//! Zone model
//!
//! Every lottery type draws from two independent zones (e.g. red/blue balls).
//! `ZonePair` keeps one value per zone in named slots so the rest of the code
//! never duplicates primary/secondary handling.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::NumberPool;

/// One of the two number-selection groups of a lottery type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Zone {
    Primary,
    Secondary,
}

impl Zone {
    /// Zones in validation order: primary first.
    pub const ALL: [Zone; 2] = [Zone::Primary, Zone::Secondary];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Primary => "primary",
            Zone::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Zone::Primary),
            "secondary" => Ok(Zone::Secondary),
            other => Err(DomainError::parse(format!("Unknown zone: {}", other))),
        }
    }
}

/// A value per zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePair<T> {
    pub primary: T,
    pub secondary: T,
}

impl<T> ZonePair<T> {
    pub fn new(primary: T, secondary: T) -> Self {
        Self { primary, secondary }
    }

    /// Build a pair by evaluating `f` for each zone, primary first.
    pub fn from_fn(mut f: impl FnMut(Zone) -> T) -> Self {
        let primary = f(Zone::Primary);
        let secondary = f(Zone::Secondary);
        Self { primary, secondary }
    }

    pub fn get(&self, zone: Zone) -> &T {
        match zone {
            Zone::Primary => &self.primary,
            Zone::Secondary => &self.secondary,
        }
    }

    pub fn get_mut(&mut self, zone: Zone) -> &mut T {
        match zone {
            Zone::Primary => &mut self.primary,
            Zone::Secondary => &mut self.secondary,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Zone, T) -> U) -> ZonePair<U> {
        let primary = f(Zone::Primary, self.primary);
        let secondary = f(Zone::Secondary, self.secondary);
        ZonePair { primary, secondary }
    }

    pub fn as_ref(&self) -> ZonePair<&T> {
        ZonePair {
            primary: &self.primary,
            secondary: &self.secondary,
        }
    }

    /// Iterate `(zone, value)` in zone order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &T)> {
        [(Zone::Primary, &self.primary), (Zone::Secondary, &self.secondary)].into_iter()
    }

    /// Convert a pair of results into a result of a pair, stopping at the
    /// first error in zone order.
    pub fn try_map<U, E>(self, mut f: impl FnMut(Zone, T) -> Result<U, E>) -> Result<ZonePair<U>, E> {
        let primary = f(Zone::Primary, self.primary)?;
        let secondary = f(Zone::Secondary, self.secondary)?;
        Ok(ZonePair { primary, secondary })
    }
}

impl<T> Index<Zone> for ZonePair<T> {
    type Output = T;

    fn index(&self, zone: Zone) -> &T {
        self.get(zone)
    }
}

impl<T> IndexMut<Zone> for ZonePair<T> {
    fn index_mut(&mut self, zone: Zone) -> &mut T {
        self.get_mut(zone)
    }
}

/// Inclusive range of numbers a zone draws from by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberRange {
    pub start: u32,
    pub end: u32,
}

impl NumberRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of values in the range (`end - start + 1`), zero when inverted.
    pub fn span(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.start && value <= self.end
    }

    /// All values of the range in ascending order.
    pub fn numbers(&self) -> Vec<u32> {
        (self.start..=self.end).collect()
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Configuration of one zone within a lottery type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    /// Display label, e.g. "Red ball"
    pub name: String,
    pub range: NumberRange,
    pub default_count: u32,
    pub min_count: u32,
    pub max_count: u32,
}

impl ZoneConfig {
    pub fn new(
        name: impl Into<String>,
        range: NumberRange,
        default_count: u32,
        min_count: u32,
        max_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            range,
            default_count,
            min_count,
            max_count,
        }
    }

    /// Size of the default pool.
    pub fn pool_size(&self) -> usize {
        self.range.span()
    }

    /// The contiguous default pool `[range.start, range.end]`.
    pub fn default_pool(&self) -> NumberPool {
        NumberPool::from_range(self.range)
    }

    /// Check the static invariants: `start <= end` and
    /// `min_count <= default_count <= max_count`.
    ///
    /// A pool smaller than `min_count` is deliberately not rejected here;
    /// that is caught when counts are validated.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.range.start > self.range.end {
            return Err(DomainError::invalid_definition(format!(
                "{}: range start {} is greater than end {}",
                self.name, self.range.start, self.range.end
            )));
        }
        if self.min_count > self.default_count || self.default_count > self.max_count {
            return Err(DomainError::invalid_definition(format!(
                "{}: counts must satisfy min ({}) <= default ({}) <= max ({})",
                self.name, self.min_count, self.default_count, self.max_count
            )));
        }
        Ok(())
    }
}
