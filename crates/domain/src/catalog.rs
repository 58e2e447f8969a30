//! Lottery catalog
//!
//! Read-only registry of lottery type definitions. Built-in types are
//! registered at construction; additional types can be registered before the
//! catalog is shared.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::LotteryTypeId;
use crate::zone::{NumberRange, Zone, ZoneConfig, ZonePair};

/// Catalog key of the built-in double color ball lottery.
pub const DOUBLE_COLOR_BALL: &str = "DOUBLE_COLOR_BALL";

/// Catalog key of the built-in super lotto lottery.
pub const SUPER_LOTTO: &str = "SUPER_LOTTO";

/// A lottery type: two zones, each with its own range and pick counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryTypeDefinition {
    pub id: LotteryTypeId,
    pub name: String,
    pub description: String,
    pub zones: ZonePair<ZoneConfig>,
}

impl LotteryTypeDefinition {
    pub fn new(
        id: impl Into<LotteryTypeId>,
        name: impl Into<String>,
        description: impl Into<String>,
        primary: ZoneConfig,
        secondary: ZoneConfig,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            zones: ZonePair::new(primary, secondary),
        }
    }

    pub fn zone(&self, zone: Zone) -> &ZoneConfig {
        &self.zones[zone]
    }

    /// Check every zone's invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (_, config) in self.zones.iter() {
            config.validate().map_err(|e| match e {
                DomainError::InvalidDefinition(msg) => {
                    DomainError::invalid_definition(format!("{}: {}", self.id, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Red balls 1-33 (pick 6), blue balls 1-16 (pick 1).
    pub fn double_color_ball() -> Self {
        Self::new(
            DOUBLE_COLOR_BALL,
            "Double Color Ball",
            "Red balls are drawn from 1-33, blue balls from 1-16",
            ZoneConfig::new("Red ball", NumberRange::new(1, 33), 6, 6, 10),
            ZoneConfig::new("Blue ball", NumberRange::new(1, 16), 1, 1, 16),
        )
    }

    /// Front zone 1-35 (pick 5), back zone 1-12 (pick 2).
    pub fn super_lotto() -> Self {
        Self::new(
            SUPER_LOTTO,
            "Super Lotto",
            "Front zone numbers are drawn from 1-35, back zone numbers from 1-12",
            ZoneConfig::new("Front zone", NumberRange::new(1, 35), 5, 5, 10),
            ZoneConfig::new("Back zone", NumberRange::new(1, 12), 2, 2, 12),
        )
    }
}

/// Registry of lottery types, in registration order.
#[derive(Debug, Clone)]
pub struct LotteryCatalog {
    types: Vec<LotteryTypeDefinition>,
}

impl Default for LotteryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LotteryCatalog {
    /// Create a catalog with all built-in lottery types.
    pub fn new() -> Self {
        Self {
            types: vec![
                LotteryTypeDefinition::double_color_ball(),
                LotteryTypeDefinition::super_lotto(),
            ],
        }
    }

    /// Create an empty catalog without built-in types.
    pub fn empty() -> Self {
        Self { types: Vec::new() }
    }

    /// Register a lottery type after checking its invariants.
    pub fn register(&mut self, definition: LotteryTypeDefinition) -> Result<(), DomainError> {
        definition.validate()?;
        if self.contains(&definition.id) {
            return Err(DomainError::DuplicateLotteryType(definition.id));
        }
        self.types.push(definition);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&LotteryTypeDefinition> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Look up a definition, failing with `UnknownLotteryType`.
    pub fn definition(&self, id: &str) -> Result<&LotteryTypeDefinition, DomainError> {
        self.get(id)
            .ok_or_else(|| DomainError::unknown_lottery_type(id))
    }

    pub fn contains(&self, id: &LotteryTypeId) -> bool {
        self.get(id.as_str()).is_some()
    }

    /// All definitions in registration order.
    pub fn list(&self) -> &[LotteryTypeDefinition] {
        &self.types
    }

    pub fn ids(&self) -> Vec<&LotteryTypeId> {
        self.types.iter().map(|t| &t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
