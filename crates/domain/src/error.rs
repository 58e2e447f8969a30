//! Unified error types for the domain layer
//!
//! Each component has its own precise error enum (pool, count, sampler);
//! `DomainError` wraps them so callers that do not care which check failed can
//! propagate a single type with `?`.

use thiserror::Error;

use crate::ids::LotteryTypeId;
use crate::sampler::SampleError;
use crate::validation::CountValidationError;
use crate::value_objects::PoolValidationError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The lottery type id is not registered in the catalog
    #[error("Unknown lottery type: {0}")]
    UnknownLotteryType(LotteryTypeId),

    /// A lottery type definition violates its zone invariants
    #[error("Invalid lottery type definition: {0}")]
    InvalidDefinition(String),

    /// A lottery type id was registered twice
    #[error("Lottery type already registered: {0}")]
    DuplicateLotteryType(LotteryTypeId),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Pool(#[from] PoolValidationError),

    #[error(transparent)]
    Count(#[from] CountValidationError),

    #[error(transparent)]
    Sample(#[from] SampleError),
}

impl DomainError {
    pub fn unknown_lottery_type(id: impl Into<LotteryTypeId>) -> Self {
        Self::UnknownLotteryType(id.into())
    }

    pub fn invalid_definition(msg: impl Into<String>) -> Self {
        Self::InvalidDefinition(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
