//! Membership sets: the list positions an item was seen in.

use serde::{Deserialize, Serialize};

/// Position of a list in the input sequence (0-based).
pub type ListIndex = usize;

/// Strictly increasing sequence of list indices containing one item.
///
/// Lists are indexed in input order, so appending keeps the sequence
/// sorted. A repeated token inside the same list is recorded once: an
/// insert equal to the last stored index is a no-op. Deserialized values
/// are sorted and deduplicated on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ListIndex>", into = "Vec<ListIndex>")]
pub struct MembershipSet {
    indices: Vec<ListIndex>,
}

impl MembershipSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the item appears in list `index`.
    ///
    /// Returns `true` if the set grew. Indices must arrive in
    /// non-decreasing order; an out-of-order index is ignored and returns
    /// `false` so the sorted invariant is never broken.
    pub fn insert(&mut self, index: ListIndex) -> bool {
        match self.indices.last() {
            Some(&last) if index <= last => false,
            _ => {
                self.indices.push(index);
                true
            }
        }
    }

    /// Number of distinct lists.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if the item was never recorded.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether list `index` contains the item.
    pub fn contains(&self, index: ListIndex) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Sorted list indices.
    pub fn as_slice(&self) -> &[ListIndex] {
        &self.indices
    }

    /// Size of the intersection with `other`.
    ///
    /// Linear merge over both sorted sequences, no allocation.
    pub fn intersection_len(&self, other: &MembershipSet) -> usize {
        merge_count(&self.indices, &other.indices)
    }

    /// Size of the intersection with `other`, if it is at least `min`.
    ///
    /// Single merge pass that gives up as soon as too few elements remain
    /// on one side to reach `min`.
    pub fn shared_at_least(&self, other: &MembershipSet, min: usize) -> Option<usize> {
        merge_count_reaching(&self.indices, &other.indices, min)
    }

    /// Whether the intersection with `other` holds at least `min` indices.
    pub fn shares_at_least(&self, other: &MembershipSet, min: usize) -> bool {
        self.shared_at_least(other, min).is_some()
    }
}

/// Count common elements of two sorted slices.
fn merge_count(a: &[ListIndex], b: &[ListIndex]) -> usize {
    let (mut i, mut j, mut shared) = (0, 0, 0);

    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }

    shared
}

/// Count common elements of two sorted slices, or `None` once `min`
/// becomes unreachable.
fn merge_count_reaching(a: &[ListIndex], b: &[ListIndex], min: usize) -> Option<usize> {
    if a.len().min(b.len()) < min {
        return None;
    }

    let (mut i, mut j, mut shared) = (0, 0, 0);

    while i < a.len() && j < b.len() {
        // Even if every remaining element matched.
        if shared + (a.len() - i).min(b.len() - j) < min {
            return None;
        }

        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }

    (shared >= min).then_some(shared)
}

impl FromIterator<ListIndex> for MembershipSet {
    /// Collect indices, sorting and deduplicating them.
    fn from_iter<I: IntoIterator<Item = ListIndex>>(iter: I) -> Self {
        let mut indices: Vec<ListIndex> = iter.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }
}

impl From<Vec<ListIndex>> for MembershipSet {
    fn from(indices: Vec<ListIndex>) -> Self {
        indices.into_iter().collect()
    }
}

impl From<MembershipSet> for Vec<ListIndex> {
    fn from(set: MembershipSet) -> Self {
        set.indices
    }
}
