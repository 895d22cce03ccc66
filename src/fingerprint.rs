//! Content fingerprints for reports, inputs and configurations.
//!
//! A fingerprint is the xxh64 digest of a value's compact JSON encoding.
//! The encoding is streamed straight into the hasher, so large list
//! sequences are never buffered as a byte vector first.
//!
//! Only types whose JSON form is fixed by their contents are fingerprinted:
//! struct fields in declaration order, vectors in index order, maps as
//! `BTreeMap`.

use serde::Serialize;
use std::io;
use xxhash_rust::xxh64::Xxh64;

/// Seed shared by every fingerprint, so hashes from different runs and
/// builds compare directly.
const FINGERPRINT_SEED: u64 = 0;

/// `io::Write` sink feeding an xxh64 state.
struct DigestWriter(Xxh64);

impl io::Write for DigestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// xxh64 fingerprint of `value`.
///
/// Panics only if `value`'s `Serialize` impl fails; the report, list and
/// threshold types hashed here have string keys and cannot.
pub fn fingerprint<T: Serialize + ?Sized>(value: &T) -> u64 {
    let mut sink = DigestWriter(Xxh64::new(FINGERPRINT_SEED));
    serde_json::to_writer(&mut sink, value).expect("fingerprinted value must serialize to JSON");
    sink.0.digest()
}

/// [`fingerprint`] rendered as 16 lowercase hex digits.
pub fn fingerprint_hex<T: Serialize + ?Sized>(value: &T) -> String {
    format!("{:016x}", fingerprint(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pair;

    #[test]
    fn test_same_pairs_same_fingerprint() {
        let pairs = vec![Pair::new("a", "b", 3), Pair::new("a", "c", 2)];
        assert_eq!(fingerprint(&pairs), fingerprint(&pairs.clone()));
    }

    #[test]
    fn test_pair_order_changes_fingerprint() {
        let ab = vec![Pair::new("a", "b", 3), Pair::new("a", "c", 2)];
        let ba = vec![Pair::new("a", "c", 2), Pair::new("a", "b", 3)];
        assert_ne!(fingerprint_hex(&ab), fingerprint_hex(&ba));
    }

    #[test]
    fn test_streamed_digest_matches_buffered_encoding() {
        let lists = vec![vec!["x".to_string(), "y".to_string()], vec![]];
        let bytes = serde_json::to_vec(&lists).unwrap();
        assert_eq!(
            fingerprint(&lists),
            xxhash_rust::xxh64::xxh64(&bytes, FINGERPRINT_SEED)
        );
    }

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(fingerprint_hex(&Vec::<Pair>::new()).len(), 16);
    }
}
