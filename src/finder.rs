//! Pair finding over the qualifying index.
//!
//! Qualifying items are snapshotted into a slice and compared by position:
//! for every `i`, `j` runs from `i` to the end and `j == i` is skipped, so
//! each unordered pair is visited exactly once and never paired with
//! itself. Output order is the order pairs are discovered in; nothing is
//! sorted afterwards.
//!
//! ## Cost
//!
//! O(N²) comparisons for N qualifying items, each a linear merge bounded
//! by the smaller membership set. This stays cheap only while N is far
//! below the number of distinct items.

use serde::{Deserialize, Serialize};

use crate::indexer::QualifyingIndex;
use crate::types::{MembershipSet, Pair, Threshold};

/// How the pair comparison phase is executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinderMode {
    /// Single thread, row by row.
    #[default]
    Sequential,
    /// Rows distributed across the rayon pool. Output order matches
    /// `Sequential` exactly.
    Parallel,
}

impl std::fmt::Display for FinderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Computes all qualifying pairs of a [`QualifyingIndex`].
///
/// The emission threshold is always the index's own threshold, so item
/// qualification and pair emission can never disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairFinder {
    mode: FinderMode,
}

impl PairFinder {
    /// Create a sequential finder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with an explicit execution mode.
    pub fn with_mode(mode: FinderMode) -> Self {
        Self { mode }
    }

    /// Execution mode in use.
    pub fn mode(&self) -> FinderMode {
        self.mode
    }

    /// Find every pair of qualifying items sharing at least `T` lists.
    ///
    /// An empty index yields an empty vector.
    pub fn find(&self, index: &QualifyingIndex) -> Vec<Pair> {
        let threshold = index.threshold();
        let entries: Vec<(&str, &MembershipSet)> = index.iter().collect();

        let span = tracing::info_span!(
            "find_pairs",
            mode = %self.mode,
            qualifying_items = entries.len(),
            threshold = threshold.get(),
        );
        let _guard = span.enter();

        let pairs = match self.mode {
            FinderMode::Sequential => find_sequential(&entries, threshold),
            FinderMode::Parallel => find_parallel(&entries, threshold),
        };

        tracing::info!(
            comparisons = comparison_count(entries.len()),
            pair_count = pairs.len(),
            "Pair finding complete"
        );

        pairs
    }
}

/// Find pairs sequentially using the index's threshold.
pub fn find_pairs(index: &QualifyingIndex) -> Vec<Pair> {
    PairFinder::new().find(index)
}

/// Number of unordered comparisons for `n` qualifying items.
pub fn comparison_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn find_sequential(entries: &[(&str, &MembershipSet)], threshold: Threshold) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for i in 0..entries.len() {
        pairs.extend(row_pairs(entries, i, threshold));
    }
    pairs
}

#[cfg(feature = "parallel")]
fn find_parallel(entries: &[(&str, &MembershipSet)], threshold: Threshold) -> Vec<Pair> {
    use rayon::prelude::*;

    // Row i owns {(i, j) | j > i}; rows are disjoint and collect keeps row order.
    let rows: Vec<Vec<Pair>> = (0..entries.len())
        .into_par_iter()
        .map(|i| row_pairs(entries, i, threshold))
        .collect();

    rows.into_iter().flatten().collect()
}

#[cfg(not(feature = "parallel"))]
fn find_parallel(entries: &[(&str, &MembershipSet)], threshold: Threshold) -> Vec<Pair> {
    tracing::warn!("Built without the `parallel` feature, running sequentially");
    find_sequential(entries, threshold)
}

/// Pairs whose first member is `entries[i]`.
fn row_pairs(entries: &[(&str, &MembershipSet)], i: usize, threshold: Threshold) -> Vec<Pair> {
    let (first, first_set) = entries[i];
    let mut pairs = Vec::new();

    for j in i..entries.len() {
        if j == i {
            continue;
        }
        let (second, second_set) = entries[j];

        let Some(shared) = first_set.shared_at_least(second_set, threshold.get()) else {
            continue;
        };

        tracing::trace!(first, second, shared, "Pair qualifies");
        pairs.push(Pair::new(first, second, shared));
    }

    pairs
}
