use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::config::BenchConfig;
use crate::error::{FibonacciError, Result};
use crate::sequence;

/// The Fibonacci implementations under comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Loop,
    Recursion,
    GoldenRatio,
    MatrixExponentiation,
    FastDoubling,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Loop,
        Algorithm::Recursion,
        Algorithm::GoldenRatio,
        Algorithm::MatrixExponentiation,
        Algorithm::FastDoubling,
    ];

    /// Benchmark id used for criterion groups and log fields.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Loop => "fib_seq_using_loop",
            Algorithm::Recursion => "fib_seq_using_recursion",
            Algorithm::GoldenRatio => "fib_seq_using_golden_ratio",
            Algorithm::MatrixExponentiation => "fib_seq_using_matrix_exponentiation",
            Algorithm::FastDoubling => "fib_seq_using_fast_doubling",
        }
    }

    pub fn categories(self) -> [&'static str; 2] {
        match self {
            Algorithm::Loop => ["simple", "canonical"],
            Algorithm::Recursion => ["simple", "slow"],
            Algorithm::GoldenRatio => ["math", "approximate"],
            Algorithm::MatrixExponentiation | Algorithm::FastDoubling => ["math", "fast"],
        }
    }

    /// False only for the floating point approximation.
    pub fn is_exact(self) -> bool {
        !matches!(self, Algorithm::GoldenRatio)
    }

    /// The loop is the yardstick the other variants are compared against.
    pub fn is_baseline(self) -> bool {
        matches!(self, Algorithm::Loop)
    }

    /// Runs the algorithm for `n`, widening its result to a `BigUint`.
    ///
    /// Recursion at or above the configured upper limit is refused with
    /// [`FibonacciError::Unsupported`] instead of being run.
    ///
    /// # Example
    /// ```
    /// use fib_seq_bench::{Algorithm, BenchConfig};
    /// use num_bigint::BigUint;
    /// let config = BenchConfig::default();
    /// assert_eq!(
    ///     Algorithm::FastDoubling.compute(20, &config).unwrap(),
    ///     BigUint::from(6765u32)
    /// );
    /// assert!(Algorithm::Recursion.compute(60, &config).is_err());
    /// ```
    pub fn compute(self, n: u32, config: &BenchConfig) -> Result<BigUint> {
        let value = match self {
            Algorithm::Loop => sequence::fibonacci_using_loop(n),
            Algorithm::Recursion => {
                if !config.supports_recursion(n) {
                    return Err(FibonacciError::Unsupported {
                        algorithm: self,
                        nth: n,
                        limit: config.recursion_upper_limit,
                    });
                }
                BigUint::from(sequence::fibonacci_using_recursion(n))
            }
            Algorithm::GoldenRatio => BigUint::from(sequence::fibonacci_using_golden_ratio(n)),
            Algorithm::MatrixExponentiation => sequence::fibonacci_using_matrix_exponentiation(n),
            Algorithm::FastDoubling => sequence::fibonacci_using_fast_doubling(n),
        };
        Ok(value)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown algorithm: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "FIB_SEQ_USING_LOOP".parse::<Algorithm>(),
            Ok(Algorithm::Loop)
        );
        assert!("fib_seq_using_magic".parse::<Algorithm>().is_err());
    }

    #[test]
    fn only_loop_is_baseline() {
        let baselines: Vec<_> = Algorithm::ALL.into_iter().filter(|a| a.is_baseline()).collect();
        assert_eq!(baselines, vec![Algorithm::Loop]);
    }

    #[test]
    fn only_golden_ratio_is_approximate() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.is_exact(), algorithm != Algorithm::GoldenRatio);
        }
        assert_eq!(Algorithm::GoldenRatio.categories(), ["math", "approximate"]);
    }

    #[test]
    fn recursion_refused_at_limit() {
        let config = BenchConfig::default().with_recursion_upper_limit(20);
        assert_eq!(
            Algorithm::Recursion.compute(19, &config).unwrap(),
            BigUint::from(4181u32)
        );
        let err = Algorithm::Recursion.compute(20, &config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fib_seq_using_recursion is not supported for 20th over 20th"
        );
    }

    #[test]
    fn exact_algorithms_agree() {
        let config = BenchConfig::default();
        for n in [0u32, 1, 2, 17, 33] {
            let expected = Algorithm::Loop.compute(n, &config).unwrap();
            for algorithm in Algorithm::ALL {
                assert_eq!(algorithm.compute(n, &config).unwrap(), expected, "{algorithm}({n})");
            }
        }
    }
}
