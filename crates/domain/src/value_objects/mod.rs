//! Value objects - Immutable objects defined by their attributes

mod numeric;
mod pick_count;
mod pool;

// Custom pool parsing and validation
pub use pool::{
    parse_custom_pool, validate_pool, CustomPoolInput, NumberPool, PoolValidationError,
    CUSTOM_POOL_CEILING, CUSTOM_POOL_FLOOR,
};

// Pick-count resolution and stepping
pub use pick_count::{accepts_count_input, resolve_count, step_count, Step};
