//! TOML configuration.
//!
//! ```toml
//! [dataset]
//! heights_url = "https://raw.githubusercontent.com/hexsocean/static/main/heights.txt"
//! heights_cache = "heights.txt"
//!
//! [analysis]
//! quartile_policy = "clamp"
//!
//! [simulation]
//! sample_count = 20
//! sample_sizes = [5, 10, 20, 40]
//! bins = 10
//! seed = 42
//!
//! [output]
//! color_errors = false
//! ```
//!
//! Every section and field is optional and falls back to the values above.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::interpolate::QuartilePolicy;

pub const DEFAULT_HEIGHTS_URL: &str =
    "https://raw.githubusercontent.com/hexsocean/static/main/heights.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatlabConfig {
    pub dataset: DatasetConfig,
    pub analysis: AnalysisConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

/// Where the reference heights dataset lives and where it is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub heights_url: String,
    pub heights_cache: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            heights_url: DEFAULT_HEIGHTS_URL.to_string(),
            heights_cache: PathBuf::from("heights.txt"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub quartile_policy: QuartilePolicy,
}

/// Parameters of a sampling-distribution simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Samples drawn per sample size.
    pub sample_count: usize,
    pub sample_sizes: Vec<usize>,
    pub bins: usize,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sample_count: 20,
            sample_sizes: vec![5, 10, 20, 40],
            bins: 10,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print `ERROR:` lines in red.
    pub color_errors: bool,
}

impl StatlabConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::Invalid("simulation.sample_count must be at least 1".into()));
        }
        if self.sample_sizes.is_empty() {
            return Err(ConfigError::Invalid("simulation.sample_sizes must not be empty".into()));
        }
        if self.sample_sizes.contains(&0) {
            return Err(ConfigError::Invalid("simulation.sample_sizes must be at least 1".into()));
        }
        if self.bins == 0 {
            return Err(ConfigError::Invalid("simulation.bins must be at least 1".into()));
        }
        Ok(())
    }
}
