//! # Fibonacci Sequence Microbenchmarks
//!
//! This library puts five ways of computing the nth Fibonacci number side by side, together with
//! the pieces needed to benchmark them fairly: a table of known-correct values, a validator that
//! checks each result before it is timed, and an environment-driven sweep configuration.
//!
//! ## Key Features
//! - **Exact big-integer variants**: loop, matrix exponentiation and fast doubling return
//!   `BigUint`, so they stay correct far past the `u64` range.
//! - **Baselines with known limits**: naive recursion is exponential and is capped by the harness.
//!   The golden ratio approximation is O(1) but runs out of f64 precision after F(70).
//! - **Validation**: every benchmarked result can be checked against a reference table, one at a
//!   time or as a parallel sweep.
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `FibonacciError`: the recursion variant was asked for an index over its limit, a result
//!   disagreed with the reference table, or an environment override failed to parse.
//!
//! ### Fibonacci Computation Approaches
//!
//! #### `fibonacci_using_loop`
//! Iterates from F(0) and F(1) keeping the last two terms. O(n) additions. This is the baseline.
//!
//! #### `fibonacci_using_recursion`
//! Textbook double recursion, O(φ^n). Only usable for small indices.
//!
//! #### `fibonacci_using_golden_ratio`
//! Binet's formula in f64: `round(φ^n / √5)`. Exact up to n = 70, approximate afterwards.
//!
//! #### `fibonacci_using_matrix_exponentiation`
//! Top-left entry of `[[1, 1], [1, 0]]^(n-1)`, computed by recursive squaring.
//!
//! #### `fibonacci_using_fast_doubling`
//! Walks the 32 bits of `n` applying the doubling identities for F(2k) and F(2k+1). The fastest
//! exact variant.
//!
//! ### Harness Support
//!
//! #### `Algorithm`
//! Names each variant, runs it through a common `compute` entry point and enforces the
//! recursion limit.
//!
//! #### `validate` / `validate_sweep`
//! Checks results against the reference table. The sweep fans out over rayon.
//!
//! #### `BenchConfig`
//! Recursion limit and benchmark indices, overridable through `FIB_RECURSION_UPPER_LIMIT` and
//! `FIB_NTHS`.
//!
//! ## Usage Example
//! ```rust
//! use fib_seq_bench::sequence::fibonacci_using_fast_doubling;
//! use num_bigint::BigUint;
//! let f100 = fibonacci_using_fast_doubling(100);
//! assert_eq!(f100, BigUint::parse_bytes(b"354224848179261915075", 10).unwrap());
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod math;
pub mod reference;
pub mod sequence;
pub mod validation;

pub use algorithm::Algorithm;
pub use config::BenchConfig;
pub use error::{FibonacciError, Result};
pub use validation::{validate, validate_sweep, SweepSummary, Validation};
