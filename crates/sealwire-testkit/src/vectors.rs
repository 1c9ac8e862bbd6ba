//! Golden vectors for the comparison and sampling primitives.
//!
//! Each sampling vector pins the value a bound produces for a fixed draw
//! script and how many draws it consumes. Every implementation of the
//! sampler must agree on both.

use sealwire_core::{safe_equals, BoundedSampler, PrimitiveError, MAX_LONG_VALUE};

use crate::fixtures::ScriptedSource;

const ONE_PAST_DEFAULT: i64 = MAX_LONG_VALUE + 1;
const SIGN_BIT_PLUS_FIVE: i64 = i64::MIN + 5;

/// A golden sampling vector.
#[derive(Debug, Clone)]
pub struct SamplingVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Inclusive bound.
    pub max: i64,
    /// Raw draws fed to the sampler, in order.
    pub draws: &'static [i64],
    /// Expected sample.
    pub expected: i64,
    /// Expected number of draws consumed.
    pub consumed: usize,
}

/// A golden comparison vector.
#[derive(Debug, Clone)]
pub struct CompareVector {
    pub name: &'static str,
    pub a: &'static [u8],
    pub b: &'static [u8],
    pub equal: bool,
}

/// Get all sampling vectors.
pub fn sampling_vectors() -> Vec<SamplingVector> {
    vec![
        SamplingVector {
            name: "zero bound masks everything to zero",
            max: 0,
            draws: &[-1],
            expected: 0,
            consumed: 1,
        },
        SamplingVector {
            name: "seven masks negative draw",
            max: 7,
            draws: &[-2],
            expected: 6,
            consumed: 1,
        },
        SamplingVector {
            name: "seven masks large draw",
            max: 7,
            draws: &[0x1234_5678_9abc_def1],
            expected: 1,
            consumed: 1,
        },
        SamplingVector {
            name: "full range clears sign bit",
            max: i64::MAX,
            draws: &[SIGN_BIT_PLUS_FIVE],
            expected: 5,
            consumed: 1,
        },
        SamplingVector {
            name: "ten rejects negative then above",
            max: 10,
            draws: &[-1, 11, 4],
            expected: 4,
            consumed: 3,
        },
        SamplingVector {
            name: "ten accepts upper edge",
            max: 10,
            draws: &[10],
            expected: 10,
            consumed: 1,
        },
        SamplingVector {
            name: "power of two bound is not masked",
            max: 8,
            draws: &[15, 9, 8],
            expected: 8,
            consumed: 3,
        },
        SamplingVector {
            name: "default bound rejects one past",
            max: MAX_LONG_VALUE,
            draws: &[ONE_PAST_DEFAULT, MAX_LONG_VALUE],
            expected: MAX_LONG_VALUE,
            consumed: 2,
        },
    ]
}

/// Get all comparison vectors.
pub fn compare_vectors() -> Vec<CompareVector> {
    vec![
        CompareVector {
            name: "empty",
            a: b"",
            b: b"",
            equal: true,
        },
        CompareVector {
            name: "identical tag",
            a: b"\x8a\x1f\x00\xc3",
            b: b"\x8a\x1f\x00\xc3",
            equal: true,
        },
        CompareVector {
            name: "first byte differs",
            a: b"\x00abc",
            b: b"\x01abc",
            equal: false,
        },
        CompareVector {
            name: "last byte differs",
            a: b"abc\x00",
            b: b"abc\x80",
            equal: false,
        },
        CompareVector {
            name: "prefix of other",
            a: b"abc",
            b: b"abcd",
            equal: false,
        },
        CompareVector {
            name: "empty against one byte",
            a: b"",
            b: b"\x00",
            equal: false,
        },
    ]
}

/// Run a sampling vector, returning the sample and draws consumed.
pub fn run_sampling_vector(vector: &SamplingVector) -> Result<(i64, usize), PrimitiveError> {
    let sampler = BoundedSampler::new(vector.max)?;
    let mut source = ScriptedSource::new(vector.draws.iter().copied());
    let value = sampler.sample(&mut source);
    Ok((value, source.taken()))
}

/// Verify all vectors, returning the names of any that failed.
pub fn verify_all_vectors() -> Vec<&'static str> {
    let mut failed = Vec::new();
    for v in sampling_vectors() {
        match run_sampling_vector(&v) {
            Ok((value, consumed)) if value == v.expected && consumed == v.consumed => {}
            _ => failed.push(v.name),
        }
    }
    for v in compare_vectors() {
        if safe_equals(v.a, v.b) != v.equal {
            failed.push(v.name);
        }
    }
    failed
}
