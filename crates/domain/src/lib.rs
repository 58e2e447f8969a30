//! LuckyDraw domain.
//!
//! Pure lottery logic with no runtime or RNG dependencies:
//!
//! - `catalog` - Lottery type definitions and the registry
//! - `zone` - Zone configuration and the per-zone `ZonePair`
//! - `value_objects` - Custom pool parsing/validation and pick-count input
//! - `validation` - Pick-count validation against zone limits
//! - `sampler` - Sampling without replacement with injected randomness

pub mod catalog;
pub mod error;
pub mod ids;
pub mod sampler;
pub mod validation;
pub mod value_objects;
pub mod zone;

pub use catalog::{LotteryCatalog, LotteryTypeDefinition, DOUBLE_COLOR_BALL, SUPER_LOTTO};
pub use error::DomainError;
pub use ids::LotteryTypeId;
pub use sampler::{sample, SampleError};
pub use validation::{
    validate_counts, validate_counts_for, validate_zone_count, CountValidationError,
};
pub use value_objects::{
    accepts_count_input, parse_custom_pool, resolve_count, step_count, validate_pool,
    CustomPoolInput, NumberPool, PoolValidationError, Step, CUSTOM_POOL_CEILING,
    CUSTOM_POOL_FLOOR,
};
pub use zone::{NumberRange, Zone, ZoneConfig, ZonePair};
