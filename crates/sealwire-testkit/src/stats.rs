//! Goodness-of-fit helpers for sampler output.

/// Upper 0.1% critical values of the chi-square distribution, indexed by
/// degrees of freedom minus one (1..=20).
const CHI_SQUARE_999: [f64; 20] = [
    10.828, 13.816, 16.266, 18.467, 20.515, 22.458, 24.322, 26.124, 27.877, 29.588, 31.264,
    32.909, 34.528, 36.123, 37.697, 39.252, 40.790, 42.312, 43.820, 45.315,
];

/// Count occurrences of each value in `[0, max]`.
///
/// Panics if a sample falls outside the range.
pub fn histogram(samples: &[i64], max: i64) -> Vec<u64> {
    assert!(max >= 0, "histogram bound must be non-negative");
    let mut counts = vec![0u64; max as usize + 1];
    for &s in samples {
        assert!((0..=max).contains(&s), "sample {s} outside [0, {max}]");
        counts[s as usize] += 1;
    }
    counts
}

/// Pearson chi-square statistic of `counts` against a uniform expectation.
pub fn chi_square_uniform(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if counts.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

/// Critical value at p = 0.001, if tabulated for `dof`.
pub fn critical_value(dof: usize) -> Option<f64> {
    dof.checked_sub(1)
        .and_then(|i| CHI_SQUARE_999.get(i))
        .copied()
}

/// Whether `counts` are consistent with a uniform distribution at p = 0.001.
pub fn looks_uniform(counts: &[u64]) -> bool {
    let Some(critical) = critical_value(counts.len().saturating_sub(1)) else {
        return false;
    };
    chi_square_uniform(counts) < critical
}
