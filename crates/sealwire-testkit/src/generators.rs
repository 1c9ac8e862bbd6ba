//! Proptest generators for property-based testing.

use proptest::prelude::*;

/// Generate byte payloads up to `max_len` bytes.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a pair of equal-length sequences that differ in exactly one
/// byte, along with the index of the difference.
pub fn diverging_pair(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>, usize)> {
    (
        prop::collection::vec(any::<u8>(), 1..=max_len.max(1)),
        any::<prop::sample::Index>(),
        1u8..=255,
    )
        .prop_map(|(a, idx, flip)| {
            let pos = idx.index(a.len());
            let mut b = a.clone();
            b[pos] ^= flip;
            (a, b, pos)
        })
}

/// Generate a bound of the form `2^k - 1`, zero included.
pub fn masked_bound() -> impl Strategy<Value = i64> {
    prop_oneof![
        (0u32..63).prop_map(|k| (1i64 << k) - 1),
        Just(i64::MAX),
    ]
}

/// Generate a bound that takes the rejection path and accepts at least a
/// quarter of raw draws.
pub fn wide_rejection_bound() -> impl Strategy<Value = i64> {
    (i64::MAX / 4..i64::MAX).prop_filter("span must not be a power of two", |max| {
        !sealwire_core::is_power_of_two(max + 1)
    })
}

/// Generate a negative bound.
pub fn negative_bound() -> impl Strategy<Value = i64> {
    i64::MIN..0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealwire_core::{safe_equals, BoundedSampler};

    proptest! {
        #[test]
        fn test_diverging_pair_differs_once((a, b, pos) in diverging_pair(64)) {
            prop_assert_eq!(a.len(), b.len());
            let diffs: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
            prop_assert_eq!(diffs, vec![pos]);
            prop_assert!(!safe_equals(&a, &b));
        }

        #[test]
        fn test_masked_bound_is_masked(max in masked_bound()) {
            prop_assert!(BoundedSampler::new(max).unwrap().is_masked());
        }

        #[test]
        fn test_wide_rejection_bound_not_masked(max in wide_rejection_bound()) {
            prop_assert!(!BoundedSampler::new(max).unwrap().is_masked());
        }
    }
}
