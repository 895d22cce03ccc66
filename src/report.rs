//! Result reporting: fingerprinted pair reports and their renderings.
//!
//! A `PairReport` carries the emitted pairs in discovery order together
//! with hashes of the input, the configuration and the pairs themselves.
//! Two runs over identical input with the same threshold produce the same
//! `report_hash`.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::fingerprint::fingerprint_hex;
use crate::config::KernelConfig;
use crate::finder::comparison_count;
use crate::indexer::IndexStats;
use crate::ingest::RawList;
use crate::types::{Pair, Threshold};
use crate::REPORT_SCHEMA_VERSION;

/// Fingerprint of the raw input lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFingerprint {
    /// Number of lists.
    pub list_count: usize,
    /// Number of raw tokens, including empty ones.
    pub token_count: usize,
    /// Hash of the raw lists in input order.
    pub input_hash: String,
}

impl InputFingerprint {
    /// Fingerprint a list sequence.
    pub fn compute(lists: &[RawList]) -> Self {
        Self {
            list_count: lists.len(),
            token_count: lists.iter().map(Vec::len).sum(),
            input_hash: fingerprint_hex(&lists),
        }
    }
}

/// Summary counters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Lists indexed.
    pub list_count: usize,
    /// Distinct items across all lists.
    pub distinct_items: usize,
    /// Items meeting the threshold.
    pub qualifying_items: usize,
    /// Empty tokens ignored during indexing.
    pub skipped_tokens: usize,
    /// Pair comparisons performed.
    pub comparisons: usize,
    /// Pairs emitted.
    pub pair_count: usize,
}

/// Outcome of a co-occurrence run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairReport {
    /// Report schema version.
    pub version: String,
    /// Threshold used for items and pairs.
    pub threshold: Threshold,
    /// Hash of output-affecting configuration.
    pub config_hash: String,
    /// Fingerprint of the input lists.
    pub input: InputFingerprint,
    /// Counters.
    pub stats: ReportStats,
    /// Emitted pairs in discovery order.
    pub pairs: Vec<Pair>,
    /// Hash of `pairs` in discovery order.
    pub report_hash: String,
}

impl PairReport {
    /// Assemble a report from the outputs of each stage.
    pub fn new(
        config: &KernelConfig,
        input: InputFingerprint,
        index_stats: &IndexStats,
        pairs: Vec<Pair>,
    ) -> Self {
        let stats = ReportStats {
            list_count: index_stats.list_count,
            distinct_items: index_stats.distinct_items,
            qualifying_items: index_stats.qualifying_items,
            skipped_tokens: index_stats.skipped_tokens,
            comparisons: comparison_count(index_stats.qualifying_items),
            pair_count: pairs.len(),
        };
        let report_hash = fingerprint_hex(&pairs);

        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            threshold: config.threshold,
            config_hash: config.params_hash(),
            input,
            stats,
            pairs,
            report_hash,
        }
    }

    /// Number of emitted pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no pair was emitted.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All pairs containing `item`.
    pub fn pairs_for_item(&self, item: &str) -> Vec<&Pair> {
        self.pairs.iter().filter(|p| p.contains(item)).collect()
    }

    /// Items emitted together with `item`, in discovery order.
    pub fn partners(&self, item: &str) -> Vec<&str> {
        self.pairs.iter().filter_map(|p| p.partner(item)).collect()
    }

    /// One `"<first>, <second>"` line per pair.
    pub fn render_lines(&self) -> Vec<String> {
        self.pairs.iter().map(ToString::to_string).collect()
    }

    /// Write one line per pair.
    pub fn write_text<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for pair in &self.pairs {
            writeln!(writer, "{pair}")?;
        }
        writer.flush()
    }

    /// Write the whole report as pretty JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()
    }
}
