//! # cooccurrence-kernel
//!
//! Frequent item-pair discovery across batches of membership lists.
//!
//! The kernel answers one question:
//!
//! > Which pairs of items appear together in at least `T` lists?
//!
//! ## Core Contract
//!
//! 1. Index every item to the set of lists containing it
//! 2. Keep only items present in at least `T` lists (qualifying items)
//! 3. Emit each unordered pair of qualifying items whose lists intersect in at least `T` positions
//!
//! ## Architecture
//!
//! ```text
//! Ingest → MembershipIndexer → QualifyingIndex → PairFinder → PairReport
//!  (lines)   (item → lists)      (|lists| ≥ T)    (|A ∩ B| ≥ T)   (text / json)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Qualifying items are enumerated in byte-lexicographic order
//! - Each unordered pair is emitted at most once, in discovery order
//! - Sequential and parallel pair finding emit identical sequences
//! - Same input + same threshold → identical `report_hash`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod fingerprint;
pub mod config;
pub mod ingest;
pub mod indexer;
pub mod finder;
pub mod report;
pub mod pipeline;

// Re-exports
pub use types::{ListIndex, MembershipSet, Pair, Threshold, ThresholdError};
pub use fingerprint::{fingerprint, fingerprint_hex};
pub use config::KernelConfig;
pub use ingest::{parse_lists, read_lists, split_list, IngestError, RawList};
pub use indexer::{build_index, IndexStats, MembershipIndexer, QualifyingIndex};
pub use finder::{comparison_count, find_pairs, FinderMode, PairFinder};
pub use report::{InputFingerprint, PairReport, ReportStats};
pub use pipeline::{CooccurrencePipeline, PipelineError};

/// Default minimum number of lists for items and pairs.
pub const DEFAULT_THRESHOLD: usize = 50;

/// Input file used when no path is supplied.
pub const DEFAULT_INPUT_PATH: &str = "Artist_lists_small.txt";

/// Schema version of [`PairReport`]. Increment on breaking changes.
pub const REPORT_SCHEMA_VERSION: &str = "cooccurrence_report_v1";
