//! Dispersion — population variance and standard deviation.

use crate::aggregate::{mean, sorted_copy};
use crate::error::{require_non_empty, StatsError};

/// Population variance: mean squared deviation, divided by `n` (not `n - 1`).
///
/// Accumulates over an ascending copy so the summation order, and therefore
/// the rounding, does not depend on the caller's ordering.
pub fn variance(data: &[f64]) -> Result<f64, StatsError> {
    require_non_empty(data, "variance")?;
    let working = sorted_copy(data);
    let mean_val = mean(&working)?;

    let mut acc = 0.0;
    for &x in &working {
        let d = x - mean_val;
        acc += d * d;
    }
    Ok(acc / working.len() as f64)
}

/// Square root of the population variance.
pub fn standard_deviation(data: &[f64]) -> Result<f64, StatsError> {
    Ok(variance(data)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_variance_divides_by_n() {
        let d = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(variance(&d).unwrap(), 4.0);
        assert_eq!(standard_deviation(&d).unwrap(), 2.0);
    }

    #[test]
    fn constant_data_has_zero_spread() {
        assert_eq!(variance(&[10.0]).unwrap(), 0.0);
        assert_eq!(standard_deviation(&[10.0]).unwrap(), 0.0);
        assert_eq!(variance(&[3.5, 3.5, 3.5]).unwrap(), 0.0);
    }

    #[test]
    fn result_is_identical_for_any_ordering() {
        let a = [0.1, 7.3, -2.2, 1e3, 0.3, 5.5];
        let mut b = a;
        b.reverse();
        assert_eq!(variance(&a).unwrap(), variance(&b).unwrap());
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(
            variance(&[]),
            Err(StatsError::EmptyInput { operation: "variance" })
        ));
        assert!(standard_deviation(&[]).is_err());
    }
}
