use num_bigint::BigUint;

use crate::algorithm::Algorithm;

pub type Result<T> = std::result::Result<T, FibonacciError>;

#[derive(Debug, thiserror::Error)]
pub enum FibonacciError {
    #[error("{algorithm} is not supported for {nth}th over {limit}th")]
    Unsupported {
        algorithm: Algorithm,
        nth: u32,
        limit: u32,
    },
    #[error("{algorithm} calculation failed, actual {nth}th is {expected}, but calculated is {actual}")]
    Mismatch {
        algorithm: Algorithm,
        nth: u32,
        expected: BigUint,
        actual: BigUint,
    },
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Config {
        key: &'static str,
        value: String,
        reason: String,
    },
}
