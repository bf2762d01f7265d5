//! Ordering and basic aggregates — count, extremes, sum, mean.
//!
//! Single-pass scans over the caller's slice. Plain IEEE-754 accumulation in
//! input order, so results are reproducible bit for bit.

use crate::error::{require_non_empty, StatsError};

/// Number of values in the dataset.
pub fn count(data: &[f64]) -> usize {
    data.len()
}

/// Smallest value.
pub fn minimum(data: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(data, "minimum")?;
    let mut min_val = data[0];
    for &x in data {
        if x < min_val {
            min_val = x;
        }
    }
    Ok(min_val)
}

/// Largest value.
pub fn maximum(data: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(data, "maximum")?;
    let mut max_val = data[0];
    for &x in data {
        if x > max_val {
            max_val = x;
        }
    }
    Ok(max_val)
}

/// Spread between the extremes: `maximum - minimum`.
pub fn data_range(data: &[f64]) -> Result<f64, StatsError> {
    Ok(maximum(data)? - minimum(data)?)
}

/// Sum of all values, accumulated left to right. Zero for an empty slice.
pub fn total(data: &[f64]) -> f64 {
    let mut acc = 0.0;
    for &x in data {
        acc += x;
    }
    acc
}

/// Arithmetic mean: `total / count`.
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(data, "mean")?;
    Ok(total(data) / count(data) as f64)
}

/// Ascending copy of `data`; the caller's slice is never reordered.
pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut working = data.to_vec();
    working.sort_by(f64::total_cmp);
    working
}
