//! Random sources with known behavior for tests.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sealwire_core::RandomSource;

/// Replays a fixed list of draws, then panics if asked for more.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: VecDeque<i64>,
    taken: usize,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            taken: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn taken(&self) -> usize {
        self.taken
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_i64(&mut self) -> i64 {
        self.taken += 1;
        match self.values.pop_front() {
            Some(v) => v,
            None => panic!("scripted source exhausted after {} draws", self.taken - 1),
        }
    }
}

/// Wraps another source and counts draws.
#[derive(Debug)]
pub struct CountingSource<S> {
    inner: S,
    draws: u64,
}

impl<S: RandomSource> CountingSource<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self { inner, draws: 0 }
    }

    /// Total draws taken through this wrapper.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Reset the counter.
    pub fn reset(&mut self) {
        self.draws = 0;
    }

    /// Unwrap the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RandomSource> RandomSource for CountingSource<S> {
    fn next_i64(&mut self) -> i64 {
        self.draws += 1;
        self.inner.next_i64()
    }
}

/// Deterministic source whose draws land near a target range.
///
/// Each draw is `offset + (u % window)` for a seeded uniform `u`, so a
/// rejection-path sampler for a small bound accepts a predictable fraction
/// of draws instead of roughly `(max + 1) / 2^64` of them. The accepted
/// values stay uniform over the bound whenever the window covers it.
#[derive(Debug, Clone)]
pub struct WindowedSource {
    rng: StdRng,
    offset: i64,
    window: u64,
}

impl WindowedSource {
    /// Draws fall in `[offset, offset + window)`.
    pub fn new(seed: u64, offset: i64, window: u64) -> Self {
        assert!(window > 0, "window must be non-empty");
        Self {
            rng: StdRng::seed_from_u64(seed),
            offset,
            window,
        }
    }

    /// Window centered on `[0, max]` with equal spill on each side.
    pub fn around(seed: u64, max: i64, spill: i64) -> Self {
        let offset = -spill;
        let window = (max + 1 + 2 * spill) as u64;
        Self::new(seed, offset, window)
    }
}

impl RandomSource for WindowedSource {
    fn next_i64(&mut self) -> i64 {
        let u = self.rng.next_u64() % self.window;
        self.offset.wrapping_add(u as i64)
    }
}

/// A seeded standard generator, for reproducible tests against real draws.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_order() {
        let mut source = ScriptedSource::new([3, -1, 9]);
        assert_eq!(source.next_i64(), 3);
        assert_eq!(source.next_i64(), -1);
        assert_eq!(source.taken(), 2);
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    #[should_panic(expected = "scripted source exhausted")]
    fn test_scripted_source_exhausted() {
        let mut source = ScriptedSource::new(Vec::<i64>::new());
        source.next_i64();
    }

    #[test]
    fn test_counting_source() {
        let mut source = CountingSource::new(ScriptedSource::new([1, 2, 3]));
        source.next_i64();
        source.next_i64();
        assert_eq!(source.draws(), 2);
        source.reset();
        assert_eq!(source.draws(), 0);
        assert_eq!(source.into_inner().remaining(), 1);
    }

    #[test]
    fn test_windowed_source_bounds() {
        let mut source = WindowedSource::around(1, 10, 3);
        for _ in 0..1000 {
            let v = source.next_i64();
            assert!((-3..=13).contains(&v), "{v} outside window");
        }
    }
}
