//! Error taxonomy for the statistics functions.
//!
//! Every variant is a local precondition violation, reported at the boundary
//! of the function that detected it. Nothing here is retried or corrected.

use thiserror::Error;

/// Errors from statistic computations and sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("{operation} requires at least one value")]
    EmptyInput { operation: &'static str },

    #[error("rank position {position} falls outside a dataset of {len} value(s)")]
    IndexOutOfRange { position: f64, len: usize },

    #[error("sample size must be non-negative, got {requested}")]
    InvalidSampleSize { requested: i64 },

    #[error("histogram needs at least one bin")]
    NoBins,
}

/// Fail fast with `EmptyInput` when `data` has no elements.
pub(crate) fn require_non_empty(data: &[f64], operation: &'static str) -> Result<(), StatsError> {
    if data.is_empty() {
        return Err(StatsError::EmptyInput { operation });
    }
    Ok(())
}
