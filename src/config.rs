//! Kernel configuration.
//!
//! A `KernelConfig` fully determines the output for a given input, so its
//! fingerprint is recorded in every report next to the input hash.

use serde::{Deserialize, Serialize};

use crate::fingerprint::fingerprint_hex;
use crate::finder::FinderMode;
use crate::types::Threshold;

/// Parameters of one co-occurrence run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Minimum number of lists for an item to qualify and for a pair to be emitted.
    pub threshold: Threshold,
    /// Execution mode of the pair phase.
    #[serde(default)]
    pub mode: FinderMode,
}

impl KernelConfig {
    /// Create a sequential configuration with the given threshold.
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            mode: FinderMode::Sequential,
        }
    }

    /// Replace the threshold.
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the execution mode.
    pub fn with_mode(mut self, mode: FinderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Hash of the parameters that affect output content.
    ///
    /// The execution mode is excluded: both modes emit identical pairs.
    pub fn params_hash(&self) -> String {
        fingerprint_hex(&self.threshold)
    }
}
