use num_bigint::BigUint;
use num_traits::{One, Zero};

// Matrix structure for 2x2 matrices, laid out as [[a, b], [c, d]]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint,
    pub b: BigUint,
    pub c: BigUint,
    pub d: BigUint,
}

impl Matrix {
    /// The Fibonacci transformation matrix `[[1, 1], [1, 0]]`.
    pub fn fibonacci() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::zero(),
        }
    }

    pub fn identity() -> Self {
        Matrix {
            a: BigUint::one(),
            b: BigUint::zero(),
            c: BigUint::zero(),
            d: BigUint::one(),
        }
    }
}

// Matrix multiplication for 2x2 matrices
pub fn matrix_mult(m1: &Matrix, m2: &Matrix) -> Matrix {
    Matrix {
        a: &m1.a * &m2.a + &m1.b * &m2.c,
        b: &m1.a * &m2.b + &m1.b * &m2.d,
        c: &m1.c * &m2.a + &m1.d * &m2.c,
        d: &m1.c * &m2.b + &m1.d * &m2.d,
    }
}

/// Raises `base` to `exp` by recursive halving.
///
/// Square the half power, then multiply by `base` once more when `exp` is odd.
/// Every step builds a new matrix; nothing is updated in place. Exponents 0 and
/// 1 both return `base` unchanged, so callers wanting `M^0` must handle it
/// themselves.
pub fn matrix_pow(base: &Matrix, exp: u32) -> Matrix {
    if exp <= 1 {
        return base.clone();
    }

    let half = matrix_pow(base, exp / 2);
    let squared = matrix_mult(&half, &half);

    if exp % 2 != 0 {
        matrix_mult(&squared, base)
    } else {
        squared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::fibonacci();
        assert_eq!(matrix_mult(&m, &Matrix::identity()), m);
        assert_eq!(matrix_mult(&Matrix::identity(), &m), m);
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let m = Matrix::fibonacci();
        let mut expected = Matrix::identity();
        for exp in 1..=20u32 {
            expected = matrix_mult(&expected, &m);
            assert_eq!(matrix_pow(&m, exp), expected, "exponent {exp}");
        }
    }

    #[test]
    fn pow_holds_consecutive_fibonacci_numbers() {
        // M^n = [[F(n+1), F(n)], [F(n), F(n-1)]]
        let p = matrix_pow(&Matrix::fibonacci(), 10);
        assert_eq!(p.a, BigUint::from(89u32));
        assert_eq!(p.b, BigUint::from(55u32));
        assert_eq!(p.c, BigUint::from(55u32));
        assert_eq!(p.d, BigUint::from(34u32));
    }

    #[test]
    fn pow_leaves_base_untouched() {
        let m = Matrix::fibonacci();
        let _ = matrix_pow(&m, 7);
        assert_eq!(m, Matrix::fibonacci());
    }
}
