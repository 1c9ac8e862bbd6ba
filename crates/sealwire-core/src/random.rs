//! Uniform sampling of integers in `[0, MAX]` from a caller-supplied source.
//!
//! A bound whose span `MAX + 1` is a power of two is sampled with a single
//! masked draw. Any other bound uses rejection sampling over raw draws: values
//! outside `[0, MAX]` are discarded until one lands inside.
//!
//! The rejection loop has no iteration cap. With a uniform source the expected
//! number of draws is `2^64 / (MAX + 1)`, which grows large for small bounds
//! that miss the fast path. Callers on tight deadlines should account for it.

use rand::rngs::{OsRng, StdRng, ThreadRng};
use rand::RngCore;

use crate::error::{PrimitiveError, Result};

/// The hosting system's sampling bound: 2^53, the largest integer a
/// JavaScript peer can hold exactly.
pub const MAX_LONG_VALUE: i64 = 9_007_199_254_740_992;

/// A capability yielding `i64` values uniform over the full signed range.
pub trait RandomSource {
    /// Draw the next value.
    fn next_i64(&mut self) -> i64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_i64(&mut self) -> i64 {
        (**self).next_i64()
    }
}

impl RandomSource for StdRng {
    fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }
}

impl RandomSource for ThreadRng {
    fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }
}

impl RandomSource for OsRng {
    fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }
}

/// OS-backed source for production sampling.
pub fn secure_source() -> OsRng {
    OsRng
}

/// True if `n` is a non-negative power of two.
///
/// Zero counts as a power of two. Negative values never do.
pub fn is_power_of_two(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    if n == 0 {
        return true;
    }
    n & (n - 1) == 0
}

/// Whether `max` can be sampled with a single masked draw.
///
/// `i64::MAX` has span 2^63, which does not fit in an `i64` but is a power of
/// two.
fn span_is_power_of_two(max: i64) -> bool {
    match max.checked_add(1) {
        Some(span) => is_power_of_two(span),
        None => true,
    }
}

/// A sampler for a fixed inclusive bound.
///
/// The bound is classified once at construction and reused for every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedSampler {
    max: i64,
    /// `span - 1` when the span is a power of two.
    mask: Option<i64>,
}

impl BoundedSampler {
    /// Create a sampler for `[0, max]`.
    pub fn new(max: i64) -> Result<Self> {
        if max < 0 {
            return Err(PrimitiveError::NegativeBound(max));
        }
        let mask = span_is_power_of_two(max).then_some(max);
        tracing::debug!(max, masked = mask.is_some(), "bounded sampler created");
        Ok(Self { max, mask })
    }

    /// The inclusive upper bound.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Whether every sample takes exactly one draw.
    pub fn is_masked(&self) -> bool {
        self.mask.is_some()
    }

    /// Draw a value uniformly from `[0, max]`.
    ///
    /// Masked samplers consume exactly one value from `source`. Otherwise the
    /// loop runs until a draw lands in range; see the module docs for the
    /// expected cost.
    pub fn sample<R: RandomSource + ?Sized>(&self, source: &mut R) -> i64 {
        let mut draws: u64 = 0;
        loop {
            let mut n = source.next_i64();
            draws += 1;
            if let Some(mask) = self.mask {
                n &= mask;
            }
            if (0..=self.max).contains(&n) {
                if draws > 1 {
                    tracing::trace!(max = self.max, draws, "sample accepted after rejection");
                }
                return n;
            }
        }
    }
}

/// Draw a value uniformly from `[0, MAX_LONG_VALUE]`.
pub fn get_random_long<R: RandomSource + ?Sized>(source: &mut R) -> Result<i64> {
    get_random_long_bounded(MAX_LONG_VALUE, source)
}

/// Draw a value uniformly from `[0, max]`, classifying `max` on every call.
///
/// Use [`BoundedSampler`] to classify once when sampling repeatedly.
pub fn get_random_long_bounded<R: RandomSource + ?Sized>(max: i64, source: &mut R) -> Result<i64> {
    Ok(BoundedSampler::new(max)?.sample(source))
}
