//! Statistic selection and all-in-one descriptive summaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aggregate::{count, data_range, maximum, mean, minimum, total};
use crate::dispersion::{standard_deviation, variance};
use crate::error::StatsError;
use crate::interpolate::QuartilePolicy;
use crate::mode::mode;
use crate::order_stats::{
    five_number_summary_with_policy, interquartile_range_with_policy, lower_quartile_with_policy,
    median, upper_quartile_with_policy, FiveNumberSummary,
};

/// One of the analyses offered to the user, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Statistic {
    Mean,
    Median,
    Mode,
    Range,
    InterquartileRange,
    StandardDeviation,
    FiveNumberSummary,
}

impl Statistic {
    pub const ALL: [Statistic; 7] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::Mode,
        Statistic::Range,
        Statistic::InterquartileRange,
        Statistic::StandardDeviation,
        Statistic::FiveNumberSummary,
    ];

    /// 1-based menu position.
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Statistic::Mean => "Mean",
            Statistic::Median => "Median",
            Statistic::Mode => "Mode",
            Statistic::Range => "Range",
            Statistic::InterquartileRange => "Interquartile Range",
            Statistic::StandardDeviation => "Standard Deviation",
            Statistic::FiveNumberSummary => "Five-number summary",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Mode => "mode",
            Statistic::Range => "range",
            Statistic::InterquartileRange => "interquartile-range",
            Statistic::StandardDeviation => "standard-deviation",
            Statistic::FiveNumberSummary => "five-number-summary",
        }
    }

    pub fn compute(&self, data: &[f64], policy: QuartilePolicy) -> Result<StatValue, StatsError> {
        Ok(match self {
            Statistic::Mean => StatValue::Scalar(mean(data)?),
            Statistic::Median => StatValue::Scalar(median(data)?),
            Statistic::Mode => StatValue::Set(mode(data)?),
            Statistic::Range => StatValue::Scalar(data_range(data)?),
            Statistic::InterquartileRange => {
                StatValue::Scalar(interquartile_range_with_policy(data, policy)?)
            }
            Statistic::StandardDeviation => StatValue::Scalar(standard_deviation(data)?),
            Statistic::FiveNumberSummary => {
                StatValue::Summary(five_number_summary_with_policy(data, policy)?)
            }
        })
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let found = match normalized.as_str() {
            "iqr" => Some(Statistic::InterquartileRange),
            "std" | "stddev" | "sd" => Some(Statistic::StandardDeviation),
            "summary" | "five-number" => Some(Statistic::FiveNumberSummary),
            other => Self::ALL.iter().copied().find(|stat| stat.name() == other),
        };
        found.ok_or_else(|| {
            let names: Vec<&str> = Self::ALL.iter().map(|stat| stat.name()).collect();
            format!("unknown statistic '{s}'. Valid: {}", names.join(", "))
        })
    }
}

/// Result of a single statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Scalar(f64),
    Set(Vec<f64>),
    Summary(FiveNumberSummary),
}

/// Every statistic of a dataset at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub range: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub interquartile_range: f64,
    /// Population variance.
    pub variance: f64,
    pub standard_deviation: f64,
    pub modes: Vec<f64>,
}

impl DescriptiveSummary {
    pub fn compute(data: &[f64], policy: QuartilePolicy) -> Result<Self, StatsError> {
        Ok(Self {
            count: count(data),
            sum: total(data),
            mean: mean(data)?,
            minimum: minimum(data)?,
            maximum: maximum(data)?,
            range: data_range(data)?,
            lower_quartile: lower_quartile_with_policy(data, policy)?,
            median: median(data)?,
            upper_quartile: upper_quartile_with_policy(data, policy)?,
            interquartile_range: interquartile_range_with_policy(data, policy)?,
            variance: variance(data)?,
            standard_deviation: standard_deviation(data)?,
            modes: mode(data)?,
        })
    }

    pub fn five_number_summary(&self) -> FiveNumberSummary {
        FiveNumberSummary {
            minimum: self.minimum,
            lower_quartile: self.lower_quartile,
            median: self.median,
            upper_quartile: self.upper_quartile,
            maximum: self.maximum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_indices_map_in_order() {
        assert_eq!(Statistic::from_menu_index(1), Some(Statistic::Mean));
        assert_eq!(
            Statistic::from_menu_index(7),
            Some(Statistic::FiveNumberSummary)
        );
        assert_eq!(Statistic::from_menu_index(0), None);
        assert_eq!(Statistic::from_menu_index(8), None);
    }

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("mean".parse::<Statistic>().unwrap(), Statistic::Mean);
        assert_eq!("IQR".parse::<Statistic>().unwrap(), Statistic::InterquartileRange);
        assert_eq!(
            "standard_deviation".parse::<Statistic>().unwrap(),
            Statistic::StandardDeviation
        );
        let err = "average".parse::<Statistic>().unwrap_err();
        assert!(err.contains("unknown statistic 'average'"));
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for stat in Statistic::ALL {
            assert_eq!(stat.to_string().parse::<Statistic>().unwrap(), stat);
        }
    }

    #[test]
    fn compute_each_statistic() {
        let d = [1.0, 2.0, 2.0, 3.0, 4.0];
        let p = QuartilePolicy::Clamp;
        assert_eq!(Statistic::Mean.compute(&d, p).unwrap(), StatValue::Scalar(2.4));
        assert_eq!(Statistic::Median.compute(&d, p).unwrap(), StatValue::Scalar(2.0));
        assert_eq!(Statistic::Mode.compute(&d, p).unwrap(), StatValue::Set(vec![2.0]));
        assert_eq!(Statistic::Range.compute(&d, p).unwrap(), StatValue::Scalar(3.0));
        assert_eq!(
            Statistic::InterquartileRange.compute(&d, p).unwrap(),
            StatValue::Scalar(2.0)
        );
        match Statistic::FiveNumberSummary.compute(&d, p).unwrap() {
            StatValue::Summary(s) => assert_eq!(s.as_array(), [1.0, 1.5, 2.0, 3.5, 4.0]),
            other => panic!("expected summary, got {other:?}"),
        }
    }

    #[test]
    fn strict_policy_propagates_through_compute() {
        let r = Statistic::InterquartileRange.compute(&[1.0, 2.0], QuartilePolicy::Strict);
        assert!(matches!(r, Err(StatsError::IndexOutOfRange { .. })));
        // statistics that never touch quartiles are unaffected
        assert!(Statistic::Mean.compute(&[1.0, 2.0], QuartilePolicy::Strict).is_ok());
    }

    #[test]
    fn descriptive_summary_matches_individual_functions() {
        let d = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = DescriptiveSummary::compute(&d, QuartilePolicy::Clamp).unwrap();
        assert_eq!(s.count, 8);
        assert_eq!(s.sum, 40.0);
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.range, 7.0);
        assert_eq!(s.median, 4.5);
        assert_eq!(s.lower_quartile, 4.0);
        assert_eq!(s.upper_quartile, 6.5);
        assert_eq!(s.interquartile_range, 2.5);
        assert_eq!(s.variance, 4.0);
        assert_eq!(s.standard_deviation, 2.0);
        assert_eq!(s.modes, vec![4.0]);
        assert_eq!(s.five_number_summary().as_array(), [2.0, 4.0, 4.5, 6.5, 9.0]);
    }

    #[test]
    fn summary_serializes_to_json() {
        let s = DescriptiveSummary::compute(&[10.0], QuartilePolicy::Clamp).unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["modes"], serde_json::json!([10.0]));
    }
}
