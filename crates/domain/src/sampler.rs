//! Uniform sampling without replacement
//!
//! The domain layer has no RNG dependency. Callers inject randomness as a
//! closure `pick_index(bound) -> index` that must return a uniformly chosen
//! index in `0..bound`.

use thiserror::Error;

/// Error when sampling preconditions do not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// More numbers requested than the pool holds
    #[error("Pool has {available} numbers, cannot sample {requested}")]
    InsufficientPool { available: usize, requested: usize },
    /// The injected index source returned an index outside `0..bound`
    #[error("Random index {index} out of bounds for {bound} remaining numbers")]
    PickOutOfBounds { index: usize, bound: usize },
}

/// Draw `count` distinct numbers from `pool`, returned in ascending order.
///
/// At each step one of the remaining numbers is chosen with
/// `pick_index(remaining)` and removed, so no number is drawn twice. The pool
/// must not contain duplicates. The order in which numbers were drawn is not
/// exposed.
pub fn sample<F>(pool: &[u32], count: usize, mut pick_index: F) -> Result<Vec<u32>, SampleError>
where
    F: FnMut(usize) -> usize,
{
    if pool.len() < count {
        return Err(SampleError::InsufficientPool {
            available: pool.len(),
            requested: count,
        });
    }

    let mut remaining = pool.to_vec();
    let mut picked = Vec::with_capacity(count);

    for _ in 0..count {
        let bound = remaining.len();
        let index = pick_index(bound);
        if index >= bound {
            return Err(SampleError::PickOutOfBounds { index, bound });
        }
        picked.push(remaining.swap_remove(index));
    }

    picked.sort_unstable();
    Ok(picked)
}
