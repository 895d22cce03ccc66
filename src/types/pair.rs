//! Emitted item pairs.

use serde::{Deserialize, Serialize};

/// Two distinct qualifying items that share at least `T` lists.
///
/// Only one orientation of an unordered pair is ever produced. `first` is
/// the item with the lower position in the finder's enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    /// Item discovered first in enumeration order.
    pub first: String,
    /// Item discovered second in enumeration order.
    pub second: String,
    /// Number of lists containing both items.
    pub shared_lists: usize,
}

impl Pair {
    /// Create a pair as discovered, keeping the given orientation.
    pub fn new(first: impl Into<String>, second: impl Into<String>, shared_lists: usize) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            shared_lists,
        }
    }

    /// Whether `item` is one of the two members.
    pub fn contains(&self, item: &str) -> bool {
        self.first == item || self.second == item
    }

    /// The other member, if `item` is part of this pair.
    pub fn partner(&self, item: &str) -> Option<&str> {
        if self.first == item {
            Some(&self.second)
        } else if self.second == item {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Orientation-independent key, lesser item first.
    pub fn unordered_key(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let pair = Pair::new("Radiohead", "Muse", 51);
        assert_eq!(pair.to_string(), "Radiohead, Muse");
    }

    #[test]
    fn test_partner() {
        let pair = Pair::new("a", "b", 2);
        assert_eq!(pair.partner("a"), Some("b"));
        assert_eq!(pair.partner("b"), Some("a"));
        assert_eq!(pair.partner("c"), None);
        assert!(pair.contains("b"));
    }

    #[test]
    fn test_unordered_key_ignores_orientation() {
        let ab = Pair::new("a", "b", 1);
        let ba = Pair::new("b", "a", 1);
        assert_eq!(ab.unordered_key(), ba.unordered_key());
    }
}
