//! StatLab Core — descriptive statistics over in-memory datasets.
//!
//! This crate contains:
//! - Ordering and basic aggregates (count, extremes, sum, mean)
//! - Rank-position interpolation with a configurable out-of-range policy
//! - Order statistics (median, quartiles, five-number summary, IQR)
//! - Mode detection, population variance and standard deviation
//! - Random sampling with replacement and sampling distributions of the mean
//! - Dataset entry: parsers, file and URL loading, TOML configuration
//!
//! Every statistic takes `&[f64]` and never reorders it; functions that need
//! sorted order work on a private copy.

pub mod aggregate;
pub mod config;
pub mod data;
pub mod dispersion;
pub mod error;
pub mod interpolate;
pub mod mode;
pub mod order_stats;
pub mod rng;
pub mod sampler;
pub mod simulation;
pub mod summary;

pub use aggregate::{count, data_range, maximum, mean, minimum, total};
pub use config::{ConfigError, StatlabConfig};
pub use data::Dataset;
pub use dispersion::{standard_deviation, variance};
pub use error::StatsError;
pub use interpolate::QuartilePolicy;
pub use mode::mode;
pub use order_stats::{
    five_number_summary, interquartile_range, lower_quartile, median, upper_quartile,
    FiveNumberSummary,
};
pub use sampler::{checked_sample_size, random_sample};
pub use simulation::{simulate, Histogram, SamplingDistribution};
pub use summary::{DescriptiveSummary, StatValue, Statistic};
