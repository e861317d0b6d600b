use num_bigint::BigUint;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, warn};

use crate::algorithm::Algorithm;
use crate::config::BenchConfig;
use crate::error::{FibonacciError, Result};
use crate::reference::reference_value;

/// Computes F(n) with `algorithm` and checks it against the reference table.
///
/// Indices missing from the table pass through unchecked. A golden ratio
/// mismatch means the f64 precision has run out rather than a broken
/// implementation, but it is still reported as [`FibonacciError::Mismatch`]
/// so callers can decide how much it matters.
pub fn validate(algorithm: Algorithm, n: u32, config: &BenchConfig) -> Result<BigUint> {
    let actual = algorithm.compute(n, config)?;

    let Some(expected) = reference_value(n) else {
        debug!(%algorithm, nth = n, "no reference value, result unchecked");
        return Ok(actual);
    };

    if expected == actual {
        return Ok(actual);
    }

    if algorithm.is_exact() {
        warn!(%algorithm, nth = n, %expected, %actual, "exact algorithm disagrees with reference");
    } else {
        warn!(%algorithm, nth = n, %expected, %actual, "approximation precision exhausted");
    }

    Err(FibonacciError::Mismatch {
        algorithm,
        nth: n,
        expected,
        actual,
    })
}

/// Outcome of validating one `(algorithm, n)` pair.
#[derive(Debug)]
pub struct Validation {
    pub algorithm: Algorithm,
    pub nth: u32,
    pub outcome: Result<BigUint>,
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self.outcome, Err(FibonacciError::Unsupported { .. }))
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self.outcome, Err(FibonacciError::Mismatch { .. }))
    }
}

/// Validates every algorithm at every configured index, in parallel.
///
/// The returned list is ordered by algorithm, then by index.
pub fn validate_sweep(config: &BenchConfig) -> Vec<Validation> {
    let pairs: Vec<(Algorithm, u32)> = Algorithm::ALL
        .into_iter()
        .flat_map(|algorithm| config.nths.iter().map(move |&n| (algorithm, n)))
        .collect();

    let mut validations: Vec<Validation> = pairs
        .into_par_iter()
        .map(|(algorithm, nth)| Validation {
            algorithm,
            nth,
            outcome: validate(algorithm, nth, config),
        })
        .collect();

    validations.sort_by_key(|v| (v.algorithm, v.nth));
    validations
}

/// Tally of a sweep's outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub passed: usize,
    pub unsupported: usize,
    pub mismatched: usize,
    pub exact_mismatched: usize,
}

impl SweepSummary {
    pub fn from_validations(validations: &[Validation]) -> Self {
        validations
            .iter()
            .fold(SweepSummary::default(), |mut summary, v| {
                if v.is_ok() {
                    summary.passed += 1;
                } else if v.is_unsupported() {
                    summary.unsupported += 1;
                } else if v.is_mismatch() {
                    summary.mismatched += 1;
                    if v.algorithm.is_exact() {
                        summary.exact_mismatched += 1;
                    }
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.passed + self.unsupported + self.mismatched
    }

    pub fn has_exact_failures(&self) -> bool {
        self.exact_mismatched > 0
    }
}
