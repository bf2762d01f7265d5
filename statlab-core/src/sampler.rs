//! Uniform random sampling with replacement.
//!
//! The random source is injected by the caller. Seeding it (see
//! `crate::rng::SeedHierarchy`) makes every draw reproducible.

use rand::Rng;

use crate::aggregate::sorted_copy;
use crate::error::{require_non_empty, StatsError};

/// Validate a signed sample size coming from an untyped boundary.
pub fn checked_sample_size(requested: i64) -> Result<usize, StatsError> {
    usize::try_from(requested).map_err(|_| StatsError::InvalidSampleSize { requested })
}

/// Draw `sample_size` values independently and uniformly, with replacement.
///
/// Indices are drawn over an ascending copy of `data`, so a given seed
/// yields the same sample regardless of the caller's ordering.
pub fn random_sample<R: Rng + ?Sized>(
    data: &[f64],
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, StatsError> {
    require_non_empty(data, "random sample")?;
    let working = sorted_copy(data);
    let sample_range = working.len() - 1;

    let mut sample = Vec::with_capacity(sample_size);
    for _ in 0..sample_size {
        sample.push(working[rng.gen_range(0..=sample_range)]);
    }
    Ok(sample)
}
