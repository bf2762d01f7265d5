//! Mode detection — every value tied for the highest frequency.

use crate::aggregate::sorted_copy;
use crate::error::{require_non_empty, StatsError};

/// All values occurring with the maximum observed frequency, ascending and
/// deduplicated. When every value is distinct the whole dataset is returned.
///
/// Values are grouped with `==`, so `-0.0` and `0.0` count as one value.
pub fn mode(data: &[f64]) -> Result<Vec<f64>, StatsError> {
    require_non_empty(data, "mode")?;
    let working = sorted_copy(data);

    let mut modes: Vec<f64> = Vec::new();
    let mut mode_count = 0usize;

    let mut start = 0;
    while start < working.len() {
        let value = working[start];
        let mut end = start + 1;
        while end < working.len() && working[end] == value {
            end += 1;
        }
        let run = end - start;

        if run > mode_count {
            modes.clear();
            mode_count = run;
        }
        if run == mode_count {
            modes.push(value);
        }
        start = end;
    }

    Ok(modes)
}
