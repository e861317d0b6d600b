use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::math::{matrix_pow, Matrix};

// sqrt(5) rounded to the nearest f64
const SQRT_5: f64 = 2.23606797749979;
// Golden ratio, (1 + sqrt(5)) / 2
const PHI: f64 = (1.0 + SQRT_5) / 2.0;

/// Computes F(n) by walking the sequence forward from F(0) and F(1).
///
/// Keeps only the previous two terms, so it runs in O(n) additions with
/// constant live state. The result is exact for any `n`.
///
/// # Example
/// ```
/// use fib_seq_bench::sequence::fibonacci_using_loop;
/// use num_bigint::BigUint;
/// assert_eq!(fibonacci_using_loop(10), BigUint::from(55u32));
/// ```
pub fn fibonacci_using_loop(n: u32) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }

    let mut a = BigUint::zero();
    let mut b = BigUint::one();

    for _ in 2..=n {
        let next = &a + &b;
        a = b;
        b = next;
    }

    b
}

/// Computes F(n) with the textbook double recursion.
///
/// Runs in O(φ^n) time. Nothing here bounds `n`. The benchmark harness refuses
/// indices at or above [`BenchConfig::recursion_upper_limit`], because beyond
/// roughly 45-60 a single call takes longer than a benchmark can afford.
///
/// [`BenchConfig::recursion_upper_limit`]: crate::config::BenchConfig
pub fn fibonacci_using_recursion(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }

    fibonacci_using_recursion(n - 1) + fibonacci_using_recursion(n - 2)
}

/// Approximates F(n) with Binet's formula, `round(φ^n / √5)`.
///
/// Exact while φ^n fits the f64 mantissa, which holds up to n = 70. Past that
/// the result drifts from the true value by rounding error and nothing
/// reports it. From n = 94 the quotient exceeds `u64::MAX` and the cast
/// saturates.
pub fn fibonacci_using_golden_ratio(n: u32) -> u64 {
    (PHI.powf(f64::from(n)) / SQRT_5).round() as u64
}

/// Computes F(n) as the top-left entry of `[[1, 1], [1, 0]]^(n-1)`.
///
/// Uses O(log n) 2x2 matrix multiplications.
///
/// # Example
/// ```
/// use fib_seq_bench::sequence::fibonacci_using_matrix_exponentiation;
/// use num_bigint::BigUint;
/// assert_eq!(
///     fibonacci_using_matrix_exponentiation(50),
///     BigUint::from(12586269025u64)
/// );
/// ```
pub fn fibonacci_using_matrix_exponentiation(n: u32) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }

    matrix_pow(&Matrix::fibonacci(), n - 1).a
}

/// Computes F(n) with the fast doubling identities.
///
/// Scans the bits of `n` from bit 31 down, keeping `(a, b) = (F(k), F(k+1))`
/// for the prefix `k` read so far:
///
/// - F(2k)   = F(k) * (2 * F(k+1) - F(k))
/// - F(2k+1) = F(k)^2 + F(k+1)^2
///
/// A set bit then advances the pair by one step. This is the fastest exact
/// variant in the crate.
pub fn fibonacci_using_fast_doubling(n: u32) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();

    for bit in (0..u32::BITS).rev() {
        // b >= a for every prefix, so the subtraction cannot underflow
        let doubled = &a * ((&b << 1u32) - &a);
        let doubled_next = &a * &a + &b * &b;
        a = doubled;
        b = doubled_next;

        if (n >> bit) & 1 == 1 {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
    }

    a
}
