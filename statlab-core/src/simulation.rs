//! Sampling distributions of the mean.
//!
//! Repeatedly draws random samples from a dataset, reduces each to its mean,
//! and bins the means into a density histogram. Plotting is left to the
//! consumer; this module only produces the numeric series.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::aggregate::{maximum, mean, minimum};
use crate::config::SimulationConfig;
use crate::error::{require_non_empty, StatsError};
use crate::rng::SeedHierarchy;
use crate::sampler::random_sample;

/// Density histogram over equally spaced bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
    /// `count / (total * width)`; integrates to 1 over the edges.
    pub densities: Vec<f64>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// Every bin is half-open except the last, which also includes `max`.
    /// When all values are equal the span is widened to `[v - 0.5, v + 0.5]`.
    pub fn density(values: &[f64], bins: usize) -> Result<Self, StatsError> {
        require_non_empty(values, "histogram")?;
        if bins == 0 {
            return Err(StatsError::NoBins);
        }

        let (mut lo, mut hi) = (minimum(values)?, maximum(values)?);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let step = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * step).collect();
        edges.push(hi);

        let mut counts = vec![0usize; bins];
        for &v in values {
            counts[bin_index(&edges, v)] += 1;
        }

        let total = values.len() as f64;
        let densities = counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&c, w)| c as f64 / (total * (w[1] - w[0])))
            .collect();

        Ok(Self {
            edges,
            counts,
            densities,
        })
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }
}

fn bin_index(edges: &[f64], v: f64) -> usize {
    let bins = edges.len() - 1;
    let lo = edges[0];
    let hi = edges[bins];
    let mut idx = (((v - lo) / (hi - lo)) * bins as f64) as usize;
    idx = idx.min(bins - 1);
    // Correct for rounding in the scaled estimate.
    if idx > 0 && v < edges[idx] {
        idx -= 1;
    }
    if idx + 1 < bins && v >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

/// The means of `sample_count` random samples of `sample_size` values.
pub fn sample_means<R: rand::Rng + ?Sized>(
    data: &[f64],
    sample_count: usize,
    sample_size: usize,
    rng: &mut R,
) -> Result<Vec<f64>, StatsError> {
    let mut means = Vec::with_capacity(sample_count);
    for _ in 0..sample_count {
        let sample = random_sample(data, sample_size, rng)?;
        means.push(mean(&sample)?);
    }
    Ok(means)
}

/// Sampling distribution of the mean for one sample size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingDistribution {
    pub sample_size: usize,
    pub means: Vec<f64>,
    pub histogram: Histogram,
}

/// One sampling distribution per configured sample size.
///
/// Sample sizes run in parallel. Each entry draws from its own RNG derived
/// from the master seed, its position in `sample_sizes` and the sample size,
/// so output does not depend on thread count or scheduling and repeated
/// sizes still give independent distributions.
pub fn simulate(
    data: &[f64],
    config: &SimulationConfig,
) -> Result<Vec<SamplingDistribution>, StatsError> {
    require_non_empty(data, "simulation")?;
    let seeds = SeedHierarchy::new(config.seed);
    tracing::info!(
        sample_count = config.sample_count,
        sample_sizes = ?config.sample_sizes,
        seed = config.seed,
        "simulating sampling distributions"
    );

    config
        .sample_sizes
        .par_iter()
        .enumerate()
        .map(|(position, &sample_size)| {
            let stream = ((position as u64) << 32) | sample_size as u64;
            let mut rng = seeds.rng_for("sample_size", stream);
            let means = sample_means(data, config.sample_count, sample_size, &mut rng)?;
            let histogram = Histogram::density(&means, config.bins)?;
            tracing::debug!(sample_size, "sampling distribution complete");
            Ok(SamplingDistribution {
                sample_size,
                means,
                histogram,
            })
        })
        .collect()
}
