//! Text parsers for the dataset entry modalities.
//!
//! - a whitespace-separated list of numbers
//! - values with matching frequencies
//! - stem-and-leaf rows (`stem leaf leaf ...`)
//!
//! Parsers only turn text into numbers. Non-emptiness and finiteness are
//! checked when the numbers become a [`super::Dataset`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("'{token}' is not a number")]
    InvalidNumber { token: String },

    #[error("no values entered")]
    Empty,

    #[error("{value} is not a finite number")]
    NonFinite { value: f64 },

    #[error("frequencies must be the same length as the values ({values} values, {frequencies} frequencies)")]
    LengthMismatch { values: usize, frequencies: usize },

    #[error("leaves cannot contain negative numbers (got {leaf})")]
    NegativeLeaf { leaf: f64 },

    #[error(
        "frequency {frequency} is too large (at most {} per value and {} values in total)",
        MAX_FREQUENCY,
        MAX_EXPANDED_LEN
    )]
    FrequencyTooLarge { frequency: f64 },
}

/// Largest frequency a single value may carry.
pub const MAX_FREQUENCY: usize = 100_000;

/// Largest dataset a value/frequency list may expand to.
pub const MAX_EXPANDED_LEN: usize = 1_000_000;

fn parse_number(token: &str) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
    })
}

/// Whitespace-separated numbers. A line with no tokens is `ParseError::Empty`.
pub fn parse_list(line: &str) -> Result<Vec<f64>, ParseError> {
    let values = line
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(values)
}

/// Expand values by their frequencies.
///
/// Each value is repeated `trunc(frequency)` times; frequencies below one
/// contribute nothing. A frequency above [`MAX_FREQUENCY`], or one that would
/// grow the data past [`MAX_EXPANDED_LEN`], is `ParseError::FrequencyTooLarge`.
pub fn parse_frequencies(
    values_line: &str,
    frequencies_line: &str,
) -> Result<Vec<f64>, ParseError> {
    let values = parse_list(values_line)?;
    let frequencies = parse_list(frequencies_line)?;
    if values.len() != frequencies.len() {
        return Err(ParseError::LengthMismatch {
            values: values.len(),
            frequencies: frequencies.len(),
        });
    }

    let mut data = Vec::new();
    for (&value, &frequency) in values.iter().zip(&frequencies) {
        let repeats = frequency.trunc();
        if repeats.is_nan() || repeats < 1.0 {
            continue;
        }
        if repeats > MAX_FREQUENCY as f64 || data.len() + repeats as usize > MAX_EXPANDED_LEN {
            return Err(ParseError::FrequencyTooLarge { frequency });
        }
        data.extend(std::iter::repeat(value).take(repeats as usize));
    }
    Ok(data)
}

/// One stem with its leaves.
#[derive(Debug, Clone, PartialEq)]
pub struct StemLeafRow {
    pub stem: f64,
    pub leaves: Vec<f64>,
}

impl StemLeafRow {
    /// `stem * 10 + leaf` per leaf; leaves of a negative stem extend downwards.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let negative_stem = self.stem < 0.0;
        self.leaves.iter().map(move |&leaf| {
            let adapted_leaf = if negative_stem { -leaf } else { leaf };
            self.stem * 10.0 + adapted_leaf
        })
    }
}

/// What a single line of stem-and-leaf entry means.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Blank line: entry is finished.
    End,
    /// A stem without leaves; the row contributes nothing.
    NoLeaves { stem: f64 },
    Row(StemLeafRow),
}

pub fn parse_stem_leaf_row(line: &str) -> Result<RowOutcome, ParseError> {
    let numbers = line
        .split_whitespace()
        .map(parse_number)
        .collect::<Result<Vec<_>, _>>()?;

    let Some((&stem, leaves)) = numbers.split_first() else {
        return Ok(RowOutcome::End);
    };
    if leaves.is_empty() {
        return Ok(RowOutcome::NoLeaves { stem });
    }
    if let Some(&leaf) = leaves.iter().find(|&&leaf| leaf < 0.0) {
        return Err(ParseError::NegativeLeaf { leaf });
    }
    Ok(RowOutcome::Row(StemLeafRow {
        stem,
        leaves: leaves.to_vec(),
    }))
}

/// Flatten rows into values, row by row in entry order.
pub fn expand_stem_leaf(rows: &[StemLeafRow]) -> Vec<f64> {
    rows.iter().flat_map(StemLeafRow::values).collect()
}
