// sentinel-core/src/domain/validation/ks.rs

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Largest `n * m` for which `Auto` still computes the exact distribution.
pub const EXACT_CELL_LIMIT: u64 = 1_000_000;

#[derive(Debug, Error, PartialEq)]
pub enum KsError {
    #[error("{0} sample is empty")]
    EmptySample(&'static str),
    #[error("{0} sample holds a value that cannot be ordered")]
    Unordered(&'static str),
}

/// How the p-value of the two-sample test is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KsMethod {
    /// Exact for small samples, asymptotic beyond `EXACT_CELL_LIMIT`.
    #[default]
    Auto,
    Exact,
    Asymptotic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsOutcome {
    /// Largest distance between the two empirical CDFs.
    pub statistic: f64,
    pub pvalue: f64,
}

/// Two-sided two-sample Kolmogorov–Smirnov test.
///
/// Works for any totally ordered sample (floats without NaN, strings...).
pub fn ks_2samp<T: PartialOrd>(
    base: &[T],
    current: &[T],
    method: KsMethod,
) -> Result<KsOutcome, KsError> {
    let a = sorted(base, "base")?;
    let b = sorted(current, "current")?;
    let (n, m) = (a.len() as u64, b.len() as u64);

    let gap = max_ecdf_gap(&a, &b);
    let statistic = gap as f64 / (n * m) as f64;

    let exact = match method {
        KsMethod::Exact => true,
        KsMethod::Asymptotic => false,
        KsMethod::Auto => n.saturating_mul(m) <= EXACT_CELL_LIMIT,
    };
    let pvalue = if exact {
        exact_pvalue(a.len(), b.len(), gap)
    } else {
        asymptotic_pvalue(n, m, statistic)
    };

    Ok(KsOutcome { statistic, pvalue })
}

fn sorted<'a, T: PartialOrd>(
    sample: &'a [T],
    label: &'static str,
) -> Result<Vec<&'a T>, KsError> {
    if sample.is_empty() {
        return Err(KsError::EmptySample(label));
    }
    // x != x only for values outside the total order (NaN)
    if sample.iter().any(|x| x.partial_cmp(x).is_none()) {
        return Err(KsError::Unordered(label));
    }
    let mut refs: Vec<&T> = sample.iter().collect();
    refs.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
    Ok(refs)
}

/// Max over the merged sample of `|i*m - j*n|`, i.e. `D * n * m` as an integer.
fn max_ecdf_gap<T: PartialOrd>(a: &[&T], b: &[&T]) -> u64 {
    let (n, m) = (a.len() as u64, b.len() as u64);
    let (mut i, mut j) = (0usize, 0usize);
    let mut max_gap = 0u64;

    while i < a.len() && j < b.len() {
        let x = if a[i] <= b[j] { a[i] } else { b[j] };
        // ties advance both ECDFs before measuring
        while i < a.len() && a[i] <= x {
            i += 1;
        }
        while j < b.len() && b[j] <= x {
            j += 1;
        }
        max_gap = max_gap.max((i as u64 * m).abs_diff(j as u64 * n));
    }
    max_gap
}

/// P(D >= d) for a uniformly random merge order of the two samples.
///
/// Walks the `(n+1) x (m+1)` lattice as a Markov chain: from `(i, j)` the next
/// value comes from `a` with probability `(n-i) / (n+m-i-j)`. Mass stops at the
/// first cell where `|i*m - j*n| >= gap` and is summed there, so tiny tails stay
/// positive instead of cancelling out of `1 - P(inside)`.
fn exact_pvalue(n: usize, m: usize, gap: u64) -> f64 {
    if gap == 0 {
        return 1.0;
    }
    let outside = |i: usize, j: usize| (i as u64 * m as u64).abs_diff(j as u64 * n as u64) >= gap;
    let remaining = |i: usize, j: usize| (n + m - i - j) as f64;

    let mut pvalue = 0.0f64;
    let mut row = vec![0.0f64; m + 1];
    for i in 0..=n {
        for j in 0..=m {
            let mass = if i == 0 && j == 0 {
                1.0
            } else {
                // row[j] still holds cell (i-1, j); row[j-1] already holds (i, j-1)
                let from_above = if i > 0 {
                    row[j] * (n - i + 1) as f64 / remaining(i - 1, j)
                } else {
                    0.0
                };
                let from_left = if j > 0 {
                    row[j - 1] * (m - j + 1) as f64 / remaining(i, j - 1)
                } else {
                    0.0
                };
                from_above + from_left
            };
            if outside(i, j) {
                pvalue += mass;
                row[j] = 0.0;
            } else {
                row[j] = mass;
            }
        }
    }
    pvalue.clamp(0.0, 1.0)
}

/// Kolmogorov limiting distribution with Stephens' small-sample correction.
fn asymptotic_pvalue(n: u64, m: u64, statistic: f64) -> f64 {
    let en = ((n * m) as f64 / (n + m) as f64).sqrt();
    kolmogorov_survival((en + 0.12 + 0.11 / en) * statistic)
}

/// Q(lambda) = 2 * sum_{k>=1} (-1)^(k-1) * exp(-2 k^2 lambda^2)
fn kolmogorov_survival(lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 1.0;
    }
    let mut sum = 0.0;
    let mut previous = 0.0;
    for k in 1..=100 {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let term = sign * 2.0 * (-2.0 * f64::from(k).powi(2) * lambda.powi(2)).exp();
        sum += term;
        if term.abs() <= 1e-3 * previous || term.abs() <= 1e-8 * sum {
            return sum.clamp(0.0, 1.0);
        }
        previous = term.abs();
    }
    // only very small lambdas fail to converge, where the tail is 1
    1.0
}
