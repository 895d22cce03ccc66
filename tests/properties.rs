//! Property tests: the pair finder against a brute-force reference.

use cooccurrence_kernel::{build_index, find_pairs, FinderMode, PairFinder, Threshold};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// Lists drawn from a small alphabet so co-occurrence is frequent.
fn arb_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
    let token = prop_oneof![
        8 => "[a-f]".prop_map(String::from),
        1 => Just(String::new()),
        1 => Just("  ".to_string()),
    ];
    prop::collection::vec(prop::collection::vec(token, 0..6), 0..30)
}

/// Brute force: every pair of distinct items with ≥ t shared lists.
fn reference_pairs(lists: &[Vec<String>], t: usize) -> BTreeMap<(String, String), usize> {
    let mut memberships: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
    for (i, list) in lists.iter().enumerate() {
        for token in list {
            let item = token.trim();
            if !item.is_empty() {
                memberships.entry(item.to_string()).or_default().insert(i);
            }
        }
    }

    let mut pairs = BTreeMap::new();
    for (a, sa) in &memberships {
        for (b, sb) in &memberships {
            if a < b {
                let shared = sa.intersection(sb).count();
                if shared >= t {
                    pairs.insert((a.clone(), b.clone()), shared);
                }
            }
        }
    }
    pairs
}

proptest! {
    #[test]
    fn finder_matches_brute_force(lists in arb_lists(), t in 1usize..5) {
        let index = build_index(&lists, Threshold::new(t).unwrap());
        let found: BTreeMap<(String, String), usize> = find_pairs(&index)
            .into_iter()
            .map(|p| {
                let (a, b) = p.unordered_key();
                ((a.to_string(), b.to_string()), p.shared_lists)
            })
            .collect();

        prop_assert_eq!(found, reference_pairs(&lists, t));
    }

    #[test]
    fn pairs_are_unique_and_distinct(lists in arb_lists(), t in 1usize..4) {
        let pairs = find_pairs(&build_index(&lists, Threshold::new(t).unwrap()));
        let keys: BTreeSet<_> = pairs.iter().map(|p| p.unordered_key()).collect();

        prop_assert_eq!(keys.len(), pairs.len());
        prop_assert!(pairs.iter().all(|p| p.first != p.second));
        prop_assert!(pairs.iter().all(|p| p.shared_lists >= t));
    }

    #[test]
    fn paired_items_meet_threshold_alone(lists in arb_lists(), t in 1usize..4) {
        let index = build_index(&lists, Threshold::new(t).unwrap());
        for pair in find_pairs(&index) {
            prop_assert!(index.get(&pair.first).map_or(false, |s| s.len() >= t));
            prop_assert!(index.get(&pair.second).map_or(false, |s| s.len() >= t));
        }
    }

    #[test]
    fn parallel_matches_sequential(lists in arb_lists(), t in 1usize..4) {
        let index = build_index(&lists, Threshold::new(t).unwrap());
        let sequential = PairFinder::with_mode(FinderMode::Sequential).find(&index);
        let parallel = PairFinder::with_mode(FinderMode::Parallel).find(&index);
        prop_assert_eq!(sequential, parallel);
    }
}
