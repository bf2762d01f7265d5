//! Dataset selection from command-line flags.

use anyhow::{bail, Context, Result};
use clap::Args;
use statlab_core::data::{
    expand_stem_leaf, load_from_path, load_reference_heights, parse_frequencies, parse_list,
    parse_stem_leaf_row, RowOutcome,
};
use statlab_core::{Dataset, StatlabConfig};
use std::path::PathBuf;

/// Where the dataset comes from. Exactly one source may be given.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Space-separated values, e.g. "1 2 2 3".
    #[arg(long, allow_hyphen_values = true)]
    pub list: Option<String>,

    /// Distinct values, paired with --frequencies.
    #[arg(long, requires = "frequencies", allow_hyphen_values = true)]
    pub values: Option<String>,

    /// Frequencies for --values, same length.
    #[arg(long, requires = "values", allow_hyphen_values = true)]
    pub frequencies: Option<String>,

    /// Stem-and-leaf row "stem leaf leaf ..."; repeat for more rows.
    #[arg(long = "stem-leaf", allow_hyphen_values = true)]
    pub stem_leaf: Vec<String>,

    /// Comma-separated data file.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Reference heights dataset (downloaded once, then cached).
    #[arg(long, default_value_t = false)]
    pub heights: bool,
}

impl SourceArgs {
    fn selected(&self) -> usize {
        [
            self.list.is_some(),
            self.values.is_some(),
            !self.stem_leaf.is_empty(),
            self.file.is_some(),
            self.heights,
        ]
        .iter()
        .filter(|&&set| set)
        .count()
    }

    /// Build the dataset, or `None` when no source flag was given.
    pub fn resolve(&self, config: &StatlabConfig) -> Result<Option<Dataset>> {
        if self.selected() > 1 {
            bail!("--list, --values, --stem-leaf, --file and --heights are mutually exclusive");
        }

        let values = if let Some(list) = &self.list {
            parse_list(list)?
        } else if let (Some(values), Some(frequencies)) = (&self.values, &self.frequencies) {
            parse_frequencies(values, frequencies)?
        } else if !self.stem_leaf.is_empty() {
            let mut rows = Vec::new();
            for line in &self.stem_leaf {
                match parse_stem_leaf_row(line)? {
                    RowOutcome::Row(row) => rows.push(row),
                    RowOutcome::NoLeaves { stem } => {
                        tracing::warn!(stem, "stem-and-leaf row has no leaves, ignored")
                    }
                    RowOutcome::End => {}
                }
            }
            expand_stem_leaf(&rows)
        } else if let Some(path) = &self.file {
            load_from_path(path).with_context(|| format!("loading {}", path.display()))?
        } else if self.heights {
            load_reference_heights(&config.dataset).context("loading reference heights")?
        } else {
            return Ok(None);
        };

        Ok(Some(Dataset::new(values)?))
    }
}
