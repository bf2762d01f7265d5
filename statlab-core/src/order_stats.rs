//! Order statistics — median, quartiles, five-number summary, IQR.
//!
//! Quartiles use linear interpolation between closest ranks at position
//! `f * (n + 1)`. The median always interpolates halfway between its two
//! neighbours; the quartiles weight by the fractional part of the position.
//!
//! Each function sorts its own private copy of the input.

use serde::{Deserialize, Serialize};

use crate::aggregate::{maximum, minimum, sorted_copy};
use crate::error::{require_non_empty, StatsError};
use crate::interpolate::{interpolate_at, rank_position, QuartilePolicy, Weight};

/// `(min, Q1, median, Q3, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub minimum: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub maximum: f64,
}

impl FiveNumberSummary {
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.minimum,
            self.lower_quartile,
            self.median,
            self.upper_quartile,
            self.maximum,
        ]
    }
}

fn value_at_fraction(
    data: &[f64],
    fraction: f64,
    weight: Weight,
    policy: QuartilePolicy,
    operation: &'static str,
) -> Result<f64, StatsError> {
    require_non_empty(data, operation)?;
    let working = sorted_copy(data);
    let position = rank_position(fraction, working.len());
    interpolate_at(&working, position, weight, policy)
}

/// Middle value, halfway between the two central ranks for even counts.
pub fn median(data: &[f64]) -> Result<f64, StatsError> {
    value_at_fraction(data, 0.5, Weight::Midpoint, QuartilePolicy::Clamp, "median")
}

/// First quartile under the default `Clamp` policy.
pub fn lower_quartile(data: &[f64]) -> Result<f64, StatsError> {
    lower_quartile_with_policy(data, QuartilePolicy::Clamp)
}

/// Third quartile under the default `Clamp` policy.
pub fn upper_quartile(data: &[f64]) -> Result<f64, StatsError> {
    upper_quartile_with_policy(data, QuartilePolicy::Clamp)
}

pub fn lower_quartile_with_policy(
    data: &[f64],
    policy: QuartilePolicy,
) -> Result<f64, StatsError> {
    value_at_fraction(data, 0.25, Weight::Fractional, policy, "lower quartile")
}

pub fn upper_quartile_with_policy(
    data: &[f64],
    policy: QuartilePolicy,
) -> Result<f64, StatsError> {
    value_at_fraction(data, 0.75, Weight::Fractional, policy, "upper quartile")
}

pub fn five_number_summary(data: &[f64]) -> Result<FiveNumberSummary, StatsError> {
    five_number_summary_with_policy(data, QuartilePolicy::Clamp)
}

/// Each of the five values is computed independently from `data`.
pub fn five_number_summary_with_policy(
    data: &[f64],
    policy: QuartilePolicy,
) -> Result<FiveNumberSummary, StatsError> {
    Ok(FiveNumberSummary {
        minimum: minimum(data)?,
        lower_quartile: lower_quartile_with_policy(data, policy)?,
        median: median(data)?,
        upper_quartile: upper_quartile_with_policy(data, policy)?,
        maximum: maximum(data)?,
    })
}

pub fn interquartile_range(data: &[f64]) -> Result<f64, StatsError> {
    interquartile_range_with_policy(data, QuartilePolicy::Clamp)
}

/// `Q3 - Q1`.
pub fn interquartile_range_with_policy(
    data: &[f64],
    policy: QuartilePolicy,
) -> Result<f64, StatsError> {
    Ok(upper_quartile_with_policy(data, policy)? - lower_quartile_with_policy(data, policy)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EIGHT: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    #[test]
    fn median_of_even_count_is_midpoint() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert_eq!(median(&EIGHT).unwrap(), 4.5);
    }

    #[test]
    fn median_of_odd_count_is_middle_value() {
        assert_eq!(median(&[9.0, 1.0, 5.0]).unwrap(), 5.0);
    }

    #[test]
    fn quartiles_of_eight_values_follow_rank_interpolation() {
        // Q1 at 2.25 → between 4 and 4; Q3 at 6.75 → 5 + (7 - 5) * 0.75
        assert_eq!(lower_quartile(&EIGHT).unwrap(), 4.0);
        assert_eq!(upper_quartile(&EIGHT).unwrap(), 6.5);
        assert_eq!(interquartile_range(&EIGHT).unwrap(), 2.5);
    }

    #[test]
    fn quartiles_of_four_values() {
        let d = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(lower_quartile(&d).unwrap(), 1.25);
        assert_eq!(upper_quartile(&d).unwrap(), 3.75);
    }

    #[test]
    fn quartiles_at_integral_positions() {
        let d = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(lower_quartile(&d).unwrap(), 2.0);
        assert_eq!(upper_quartile(&d).unwrap(), 6.0);
    }

    #[test]
    fn single_value_summary_under_clamp() {
        let s = five_number_summary(&[10.0]).unwrap();
        assert_eq!(s.as_array(), [10.0; 5]);
    }

    #[test]
    fn single_value_quartiles_under_strict_fail() {
        let r = lower_quartile_with_policy(&[10.0], QuartilePolicy::Strict);
        assert_eq!(
            r,
            Err(StatsError::IndexOutOfRange {
                position: 0.5,
                len: 1
            })
        );
        assert!(five_number_summary_with_policy(&[10.0], QuartilePolicy::Strict).is_err());
        // the median position of a single value is always in range
        assert_eq!(median(&[10.0]).unwrap(), 10.0);
    }

    #[test]
    fn two_values_clamp_to_extremes() {
        let d = [2.0, 1.0];
        assert_eq!(lower_quartile(&d).unwrap(), 1.0);
        assert_eq!(median(&d).unwrap(), 1.5);
        assert_eq!(upper_quartile(&d).unwrap(), 2.0);
        assert_eq!(interquartile_range(&d).unwrap(), 1.0);
        assert!(upper_quartile_with_policy(&d, QuartilePolicy::Strict).is_err());
    }

    #[test]
    fn three_values_are_in_range_for_both_policies() {
        let d = [1.0, 2.0, 3.0];
        for policy in [QuartilePolicy::Clamp, QuartilePolicy::Strict] {
            assert_eq!(lower_quartile_with_policy(&d, policy).unwrap(), 1.0);
            assert_eq!(upper_quartile_with_policy(&d, policy).unwrap(), 3.0);
        }
    }

    #[test]
    fn input_is_not_reordered() {
        let d = vec![5.0, 3.0, 9.0, 1.0];
        let _ = five_number_summary(&d).unwrap();
        assert_eq!(d, vec![5.0, 3.0, 9.0, 1.0]);
    }

    #[test]
    fn empty_input_names_the_operation() {
        assert_eq!(
            median(&[]),
            Err(StatsError::EmptyInput { operation: "median" })
        );
        assert_eq!(
            upper_quartile(&[]),
            Err(StatsError::EmptyInput {
                operation: "upper quartile"
            })
        );
        assert!(interquartile_range(&[]).is_err());
    }

    #[test]
    fn summary_serializes_with_named_fields() {
        let s = five_number_summary(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["median"], 2.5);
        assert_eq!(json["lower_quartile"], 1.25);
    }
}
