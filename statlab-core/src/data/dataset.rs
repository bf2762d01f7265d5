//! Validated, non-empty dataset of finite numbers.

use std::ops::Deref;

use super::parse::ParseError;

/// A non-empty sequence of finite `f64` values.
///
/// Constructed only through [`Dataset::new`], so every statistic receiving
/// one can rely on its preconditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset(Vec<f64>);

impl Dataset {
    pub fn new(values: Vec<f64>) -> Result<Self, ParseError> {
        if values.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
            return Err(ParseError::NonFinite { value });
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for Dataset {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Dataset {
    type Error = ParseError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
