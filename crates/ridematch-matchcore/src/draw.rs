//! Deterministic pseudo-random draw derived from the transaction identity.
//!
//! The transaction identifier is fixed for the whole logical operation, so
//! it is *not* entropy — it is a value every replica agrees on. Hashing it
//! with a caller-supplied seed yields an integer that is identical on every
//! replica, which is what makes tie-breaking reproducible. Successive draws
//! within one operation must use different seeds (`"rider"` vs `"driver"`)
//! or they collide.

use sha2::{Digest, Sha256};

/// Reproducible pseudo-random integer from a transaction identity and seed.
///
/// SHA-256 over `tx_id || seed`, interpreting the first 4 digest bytes as a
/// big-endian unsigned integer — the same value as parsing the first 8
/// characters of the hex digest.
#[must_use]
pub fn draw(tx_id: &str, seed: &str) -> u32 {
    let mut hasher = Sha256::new();
    hasher.update(tx_id.as_bytes());
    hasher.update(seed.as_bytes());
    let digest = hasher.finalize();
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Pick one index out of a candidate set of size `len`.
///
/// # Panics
/// Panics if `len == 0`; drawing from an empty candidate set is a caller
/// bug, not a runtime condition.
#[must_use]
pub fn draw_index(tx_id: &str, seed: &str, len: usize) -> usize {
    assert!(len > 0, "draw from an empty candidate set");
    draw(tx_id, seed) as usize % len
}

#[cfg(test)]
mod tests {
    use super::*;

    // Known-answer vectors: sha256("tx-0001" + seed), first 8 hex chars.
    #[test]
    fn known_vectors() {
        assert_eq!(draw("tx-0001", "rider"), 2_277_428_195);
        assert_eq!(draw("tx-0001", "driver"), 1_891_838_947);
        assert_eq!(draw("round-42", "rider"), 3_573_807_342);
        assert_eq!(draw("round-42", "driver"), 2_196_317_425);
    }

    #[test]
    fn pure_function() {
        for _ in 0..3 {
            assert_eq!(draw("abc", "rider"), draw("abc", "rider"));
        }
    }

    #[test]
    fn seed_changes_the_outcome() {
        // Not guaranteed in general, but these particular vectors differ —
        // the algorithm must never rely on them being equal.
        assert_ne!(draw("tx-0001", "rider"), draw("tx-0001", "driver"));
    }

    #[test]
    fn index_is_in_range() {
        for len in 1..10 {
            assert!(draw_index("tx-0001", "rider", len) < len);
        }
    }

    #[test]
    fn singleton_set_always_picks_zero() {
        assert_eq!(draw_index("anything", "driver", 1), 0);
    }

    #[test]
    #[should_panic(expected = "empty candidate set")]
    fn empty_set_panics() {
        let _ = draw_index("tx", "rider", 0);
    }
}
