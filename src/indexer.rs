//! Membership indexing: item → lists containing it.
//!
//! The indexer keeps a complete mapping for every item seen, because an
//! item's qualification is only known once all its occurrences are in.
//! Qualification is tracked incrementally: the moment an item's
//! membership set reaches the threshold it joins the qualifying key set,
//! so `finish` never rescans the complete mapping.
//!
//! ## Invariant
//!
//! A pair's co-occurrence count is bounded by each member's own count, so
//! dropping non-qualifying items here cannot lose a qualifying pair.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::types::{ListIndex, MembershipSet, Threshold};

/// Counters collected while indexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of lists consumed.
    pub list_count: usize,
    /// Raw tokens seen, including skipped ones.
    pub token_count: usize,
    /// Tokens that were empty after trimming.
    pub skipped_tokens: usize,
    /// Distinct items across all lists.
    pub distinct_items: usize,
    /// Items whose membership reached the threshold.
    pub qualifying_items: usize,
}

/// Builds the complete membership mapping one list at a time.
#[derive(Debug, Clone)]
pub struct MembershipIndexer {
    threshold: Threshold,
    memberships: HashMap<String, MembershipSet>,
    qualifying: BTreeSet<String>,
    next_list: ListIndex,
    token_count: usize,
    skipped_tokens: usize,
}

impl MembershipIndexer {
    /// Create an empty indexer.
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            memberships: HashMap::new(),
            qualifying: BTreeSet::new(),
            next_list: 0,
            token_count: 0,
            skipped_tokens: 0,
        }
    }

    /// Threshold used for qualification.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Index one list at the next position and return that position.
    ///
    /// Tokens are trimmed; empty ones are skipped. A token repeated within
    /// the list is recorded once.
    pub fn add_list<I, S>(&mut self, tokens: I) -> ListIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = self.next_list;
        self.next_list += 1;

        for token in tokens {
            self.token_count += 1;
            let item = token.as_ref().trim();
            if item.is_empty() {
                self.skipped_tokens += 1;
                continue;
            }
            self.record(item, index);
        }

        index
    }

    /// Index a sequence of lists in order.
    pub fn extend<L, I, S>(&mut self, lists: L)
    where
        L: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for list in lists {
            self.add_list(list);
        }
    }

    fn record(&mut self, item: &str, index: ListIndex) {
        let grown_to = match self.memberships.get_mut(item) {
            Some(set) => set.insert(index).then(|| set.len()),
            None => {
                let mut set = MembershipSet::new();
                set.insert(index);
                self.memberships.insert(item.to_string(), set);
                Some(1)
            }
        };

        if grown_to == Some(self.threshold.get()) {
            self.qualifying.insert(item.to_string());
        }
    }

    /// Membership of any item seen so far, qualifying or not.
    pub fn membership(&self, item: &str) -> Option<&MembershipSet> {
        self.memberships.get(item)
    }

    /// Number of lists consumed so far.
    pub fn list_count(&self) -> usize {
        self.next_list
    }

    /// Number of distinct items seen so far.
    pub fn distinct_items(&self) -> usize {
        self.memberships.len()
    }

    /// Number of items that currently meet the threshold.
    pub fn qualifying_count(&self) -> usize {
        self.qualifying.len()
    }

    /// Consume the indexer, keeping only qualifying items.
    pub fn finish(mut self) -> QualifyingIndex {
        let stats = IndexStats {
            list_count: self.next_list,
            token_count: self.token_count,
            skipped_tokens: self.skipped_tokens,
            distinct_items: self.memberships.len(),
            qualifying_items: self.qualifying.len(),
        };

        let items: BTreeMap<String, MembershipSet> = std::mem::take(&mut self.qualifying)
            .into_iter()
            .filter_map(|item| {
                let set = self.memberships.remove(&item)?;
                Some((item, set))
            })
            .collect();

        tracing::info!(
            threshold = self.threshold.get(),
            list_count = stats.list_count,
            distinct_items = stats.distinct_items,
            qualifying_items = stats.qualifying_items,
            skipped_tokens = stats.skipped_tokens,
            "Membership index built"
        );

        QualifyingIndex {
            threshold: self.threshold,
            items,
            stats,
        }
    }
}

/// Index a full list sequence and return the qualifying subset.
pub fn build_index<L, I, S>(lists: L, threshold: Threshold) -> QualifyingIndex
where
    L: IntoIterator<Item = I>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut indexer = MembershipIndexer::new(threshold);
    indexer.extend(lists);
    indexer.finish()
}

/// Items whose membership set size is at least the threshold.
///
/// Keyed by a `BTreeMap`, so iteration is byte-lexicographic on the item
/// and identical across runs.
///
/// Serializable for reporting; there is no `Deserialize`, so every value
/// comes from [`MembershipIndexer::finish`] or [`QualifyingIndex::from_sets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualifyingIndex {
    threshold: Threshold,
    items: BTreeMap<String, MembershipSet>,
    stats: IndexStats,
}

impl QualifyingIndex {
    /// Build directly from membership sets, dropping those below threshold.
    pub fn from_sets<I>(threshold: Threshold, sets: I) -> Self
    where
        I: IntoIterator<Item = (String, MembershipSet)>,
    {
        let mut distinct_items = 0;
        let items: BTreeMap<String, MembershipSet> = sets
            .into_iter()
            .inspect(|_| distinct_items += 1)
            .filter(|(_, set)| threshold.is_met_by(set.len()))
            .collect();

        let stats = IndexStats {
            distinct_items,
            qualifying_items: items.len(),
            ..IndexStats::default()
        };

        Self {
            threshold,
            items,
            stats,
        }
    }

    /// Threshold the index was built with.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Indexing counters.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Number of qualifying items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no item qualified.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Membership set of a qualifying item.
    pub fn get(&self, item: &str) -> Option<&MembershipSet> {
        self.items.get(item)
    }

    /// Whether `item` qualified.
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Snapshot of qualifying items in enumeration order.
    pub fn items(&self) -> Vec<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    /// Iterate `(item, membership)` in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MembershipSet)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }
}
