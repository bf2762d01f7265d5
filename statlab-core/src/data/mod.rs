//! Dataset entry: typed boundary, text parsers, file and URL loading.

pub mod dataset;
pub mod loader;
pub mod parse;

pub use dataset::Dataset;
pub use loader::{load_from_path, load_from_url, load_reference_heights, LoadError};
pub use parse::{
    expand_stem_leaf, parse_frequencies, parse_list, parse_stem_leaf_row, ParseError, RowOutcome,
    StemLeafRow, MAX_EXPANDED_LEN, MAX_FREQUENCY,
};
