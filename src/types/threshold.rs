//! Minimum occurrence threshold shared by the indexer and the pair finder.

use serde::{Deserialize, Serialize};

use crate::DEFAULT_THRESHOLD;

/// Error raised when constructing a [`Threshold`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThresholdError {
    /// A threshold of zero would qualify every item and every pair.
    #[error("Threshold must be a positive integer, got 0")]
    Zero,
    /// The textual value was not an integer.
    #[error("Invalid threshold value: {0}")]
    Invalid(String),
}

/// Minimum number of lists an item (or a pair of items) must appear in.
///
/// Always at least 1. The same value gates item qualification during
/// indexing and pair emission during pair finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Threshold(usize);

impl Threshold {
    /// Create a threshold, rejecting zero.
    pub fn new(value: usize) -> Result<Self, ThresholdError> {
        if value == 0 {
            return Err(ThresholdError::Zero);
        }
        Ok(Self(value))
    }

    /// The raw count.
    pub fn get(self) -> usize {
        self.0
    }

    /// Whether `count` reaches this threshold.
    pub fn is_met_by(self, count: usize) -> bool {
        count >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<usize> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Threshold> for usize {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl std::str::FromStr for Threshold {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| ThresholdError::Invalid(s.to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
