//! Benchmark sweep settings, overridable from the environment.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `FIB_RECURSION_UPPER_LIMIT` | first index the recursive variant refuses | `55` |
//! | `FIB_NTHS` | comma-separated indices to benchmark | [`DEFAULT_NTHS`] |

use std::str::FromStr;

use crate::error::{FibonacciError, Result};

pub const RECURSION_UPPER_LIMIT_VAR: &str = "FIB_RECURSION_UPPER_LIMIT";
pub const NTHS_VAR: &str = "FIB_NTHS";

pub const DEFAULT_RECURSION_UPPER_LIMIT: u32 = 55;

// F(92) is the last value that fits in an i64
pub const DEFAULT_NTHS: [u32; 21] = [
    1, 3, 5, 10, 20, 30, 35, 40, 45, 50, 53, 55, 60, 65, 70, 75, 80, 85, 90, 91, 92,
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    pub recursion_upper_limit: u32,
    pub nths: Vec<u32>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            recursion_upper_limit: DEFAULT_RECURSION_UPPER_LIMIT,
            nths: DEFAULT_NTHS.to_vec(),
        }
    }
}

impl BenchConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Missing keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BenchConfig::default();

        if let Some(raw) = lookup(RECURSION_UPPER_LIMIT_VAR) {
            config.recursion_upper_limit = parse_value(RECURSION_UPPER_LIMIT_VAR, &raw)?;
        }

        if let Some(raw) = lookup(NTHS_VAR) {
            config.nths = parse_nths(&raw)?;
        }

        tracing::debug!(
            recursion_upper_limit = config.recursion_upper_limit,
            nths = ?config.nths,
            "loaded benchmark config"
        );

        Ok(config)
    }

    pub fn with_recursion_upper_limit(mut self, limit: u32) -> Self {
        self.recursion_upper_limit = limit;
        self
    }

    pub fn with_nths(mut self, nths: impl IntoIterator<Item = u32>) -> Self {
        self.nths = nths.into_iter().collect();
        self.nths.sort_unstable();
        self.nths.dedup();
        self
    }

    pub fn supports_recursion(&self, n: u32) -> bool {
        n < self.recursion_upper_limit
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| FibonacciError::Config {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_nths(raw: &str) -> Result<Vec<u32>> {
    let mut nths = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_value(NTHS_VAR, part))
        .collect::<Result<Vec<u32>>>()?;

    if nths.is_empty() {
        return Err(FibonacciError::Config {
            key: NTHS_VAR,
            value: raw.to_string(),
            reason: "no indices given".to_string(),
        });
    }

    nths.sort_unstable();
    nths.dedup();
    Ok(nths)
}
