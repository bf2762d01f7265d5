//! Positional interpolation over a sorted dataset.
//!
//! A rank position `p = f * (n + 1)` is a fractional 1-based index. The value
//! at `p` is interpolated between the elements at `floor(p)` and `ceil(p)`.
//! When `p` is an exact integer both indices coincide and no interpolation
//! takes place.

use serde::{Deserialize, Serialize};

use crate::error::{require_non_empty, StatsError};

/// What to do with a rank position that falls outside `[1, n]`.
///
/// Only datasets with fewer than three values can produce such positions
/// (quartiles of `n = 1` or `n = 2`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuartilePolicy {
    /// Clamp the position to `[1, n]` before splitting it into indices.
    #[default]
    Clamp,
    /// Fail with `StatsError::IndexOutOfRange`.
    Strict,
}

/// Interpolation weight between the lower and upper neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// Always halfway (used by the median).
    Midpoint,
    /// The fractional part of the rank position (used by the quartiles).
    Fractional,
}

/// Rank position of `fraction` in a dataset of `len` values: `fraction * (len + 1)`.
pub fn rank_position(fraction: f64, len: usize) -> f64 {
    fraction * (len as f64 + 1.0)
}

/// Linear interpolation `a + (b - a) * t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Largest integer not above `x`.
fn floor(x: f64) -> f64 {
    x.floor()
}

/// Smallest integer not below `x`, as the negated floor of `-x`.
///
/// Exact integers map to themselves, so `floor(p) == ceil(p)` for integral `p`.
fn ceil(x: f64) -> f64 {
    -floor(-x)
}

fn resolve_position(position: f64, len: usize, policy: QuartilePolicy) -> Result<f64, StatsError> {
    let upper_bound = len as f64;
    if (1.0..=upper_bound).contains(&position) {
        return Ok(position);
    }
    match policy {
        QuartilePolicy::Clamp => Ok(position.clamp(1.0, upper_bound)),
        QuartilePolicy::Strict => Err(StatsError::IndexOutOfRange { position, len }),
    }
}

/// Value at a fractional 1-based rank position of an ascending slice.
///
/// `sorted` must already be in ascending order.
pub fn interpolate_at(
    sorted: &[f64],
    position: f64,
    weight: Weight,
    policy: QuartilePolicy,
) -> Result<f64, StatsError> {
    require_non_empty(sorted, "interpolation")?;
    let position = resolve_position(position, sorted.len(), policy)?;

    let lower_index = floor(position) as usize - 1;
    let upper_index = ceil(position) as usize - 1;
    let t = match weight {
        Weight::Midpoint => 0.5,
        Weight::Fractional => position - floor(position),
    };

    Ok(lerp(sorted[lower_index], sorted[upper_index], t))
}
