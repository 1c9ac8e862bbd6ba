//! Constant-time equality for byte sequences.
//!
//! The comparison folds `a[i] ^ b[i]` into a single accumulator over the
//! whole input and inspects the accumulator once, after the loop. Where the
//! inputs first differ has no influence on how much work is done.
//!
//! Lengths are compared up front and are not treated as secret.

use std::hint::black_box;

use crate::error::{PrimitiveError, Result};

/// Compare two byte sequences without exiting early on the first mismatch.
///
/// Returns `false` immediately when the lengths differ. Otherwise every byte
/// pair is visited exactly once.
///
/// ```
/// use sealwire_core::safe_equals;
///
/// assert!(safe_equals(b"mac-tag", b"mac-tag"));
/// assert!(!safe_equals(b"mac-tag", b"mac-taG"));
/// assert!(!safe_equals(b"short", b"longer"));
/// ```
pub fn safe_equals(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    accumulate_difference(a.iter().zip(b.iter())) == 0
}

/// Like [`safe_equals`], for callers whose inputs may be absent.
///
/// An absent sequence is an error, never a silent `false`.
pub fn try_safe_equals(a: Option<&[u8]>, b: Option<&[u8]>) -> Result<bool> {
    let a = a.ok_or(PrimitiveError::MissingInput("left operand"))?;
    let b = b.ok_or(PrimitiveError::MissingInput("right operand"))?;
    Ok(safe_equals(a, b))
}

/// OR together the XOR of every pair. Zero iff all pairs matched.
///
/// The accumulator goes through `black_box` on each step so the optimizer
/// cannot prove a nonzero value is final and cut the loop short.
pub(crate) fn accumulate_difference<'a, I>(pairs: I) -> u8
where
    I: IntoIterator<Item = (&'a u8, &'a u8)>,
{
    let mut acc = 0u8;
    for (x, y) in pairs {
        acc = black_box(acc | (x ^ y));
    }
    acc
}
