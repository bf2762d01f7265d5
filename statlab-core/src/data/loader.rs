//! Load datasets from comma-separated files and from URLs.
//!
//! File format: any number of lines, each a comma-separated list of numbers.
//! Rows may differ in length. A leading byte-order mark is ignored, as are
//! blank lines and empty fields.
//!
//! URLs are downloaded once into a local cache file and read from there on
//! every later call.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::DatasetConfig;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: '{token}' is not a number", .path.display())]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        token: String,
    },

    #[error("download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read every number in a comma-separated file, row by row.
pub fn load_from_path(path: &Path) -> Result<Vec<f64>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        for field in record.iter() {
            let token = field.trim_start_matches('\u{feff}').trim();
            if token.is_empty() {
                continue;
            }
            let value = token.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                path: path.to_path_buf(),
                line,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    tracing::debug!(path = %path.display(), count = values.len(), "loaded dataset file");
    Ok(values)
}

/// Download `url` into `cache_path` unless already cached, then load it.
pub fn load_from_url(url: &str, cache_path: &Path) -> Result<Vec<f64>, LoadError> {
    if !cache_path.exists() {
        tracing::info!(url, path = %cache_path.display(), "downloading dataset");
        download(url, cache_path)?;
    } else {
        tracing::debug!(path = %cache_path.display(), "using cached dataset");
    }
    load_from_path(cache_path)
}

/// The reference heights dataset named in the configuration.
pub fn load_reference_heights(config: &DatasetConfig) -> Result<Vec<f64>, LoadError> {
    load_from_url(&config.heights_url, &config.heights_cache)
}

fn download(url: &str, dest: &Path) -> Result<(), LoadError> {
    let download_err = |source| LoadError::Download {
        url: url.to_string(),
        source,
    };
    let io_err = |source| LoadError::Io {
        path: dest.to_path_buf(),
        source,
    };

    let body = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .map_err(download_err)?;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    // Write to a temporary sibling, then rename into place.
    let mut tmp = dest.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, &body).map_err(io_err)?;
    fs::rename(&tmp, dest).map_err(io_err)?;
    Ok(())
}
