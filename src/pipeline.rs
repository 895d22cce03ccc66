//! End-to-end pipeline: ingest → index → find → report.

use std::path::Path;

use crate::config::KernelConfig;
use crate::finder::PairFinder;
use crate::indexer::MembershipIndexer;
use crate::ingest::{read_lists, IngestError, RawList};
use crate::report::{InputFingerprint, PairReport};
use crate::types::{Threshold, ThresholdError};

/// Errors surfaced by the pipeline.
///
/// Only unreadable input is fatal at run time; empty tokens and empty
/// qualifying sets are absorbed into the (possibly empty) report.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Input could not be read.
    #[error(transparent)]
    Ingest(#[from] IngestError),
    /// Configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ThresholdError),
}

/// Runs the full co-occurrence computation for one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CooccurrencePipeline {
    config: KernelConfig,
}

impl CooccurrencePipeline {
    /// Create a pipeline from a configuration.
    pub fn new(config: KernelConfig) -> Self {
        Self { config }
    }

    /// Create a sequential pipeline from a raw threshold value.
    pub fn with_threshold(threshold: usize) -> Result<Self, PipelineError> {
        Ok(Self::new(KernelConfig::new(Threshold::new(threshold)?)))
    }

    /// Configuration in use.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Run over in-memory lists.
    pub fn run(&self, lists: &[RawList]) -> PairReport {
        let input = InputFingerprint::compute(lists);

        let mut indexer = MembershipIndexer::new(self.config.threshold);
        indexer.extend(lists);
        let index = indexer.finish();

        let pairs = PairFinder::with_mode(self.config.mode).find(&index);

        PairReport::new(&self.config, input, index.stats(), pairs)
    }

    /// Read lists from `path` and run over them.
    pub fn run_file(&self, path: impl AsRef<Path>) -> Result<PairReport, PipelineError> {
        let lists = read_lists(path)?;
        Ok(self.run(&lists))
    }
}
