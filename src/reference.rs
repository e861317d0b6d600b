//! Known-correct Fibonacci values used to check benchmark results.

use num_bigint::BigUint;

/// `(n, F(n))` pairs, ascending by `n`.
///
/// Covers every default benchmark index plus a few past the `u64` limit
/// (F(93) is the first value that does not fit).
pub static REFERENCE_TABLE: &[(u32, u128)] = &[
    (0, 0),
    (1, 1),
    (3, 2),
    (5, 5),
    (10, 55),
    (20, 6765),
    (30, 832040),
    (35, 9227465),
    (40, 102334155),
    (45, 1134903170),
    (50, 12586269025),
    (53, 53316291173),
    (55, 139583862445),
    (60, 1548008755920),
    (65, 17167680177565),
    (70, 190392490709135),
    (75, 2111485077978050),
    (80, 23416728348467685),
    (85, 259695496911122585),
    (90, 2880067194370816120),
    (91, 4660046610375530309),
    (92, 7540113804746346429),
    (93, 12200160415121876738),
    (100, 354224848179261915075),
    (150, 9969216677189303386214405760200),
];

/// Looks up the reference value for `n`, if the table has one.
///
/// # Example
/// ```
/// use fib_seq_bench::reference::reference_value;
/// use num_bigint::BigUint;
/// assert_eq!(reference_value(10), Some(BigUint::from(55u32)));
/// assert_eq!(reference_value(11), None);
/// ```
pub fn reference_value(n: u32) -> Option<BigUint> {
    REFERENCE_TABLE
        .binary_search_by_key(&n, |&(index, _)| index)
        .ok()
        .map(|position| BigUint::from(REFERENCE_TABLE[position].1))
}

pub fn reference_indices() -> impl Iterator<Item = u32> {
    REFERENCE_TABLE.iter().map(|&(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_ascending() {
        assert!(REFERENCE_TABLE.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn values_grow_with_index() {
        assert!(REFERENCE_TABLE.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(reference_value(0), Some(BigUint::from(0u32)));
        assert_eq!(
            reference_value(92),
            Some(BigUint::from(7540113804746346429u64))
        );
        assert_eq!(reference_value(2), None);
        assert_eq!(reference_value(u32::MAX), None);
    }

    #[test]
    fn indices_follow_table_order() {
        let indices: Vec<u32> = reference_indices().collect();
        assert_eq!(indices.len(), REFERENCE_TABLE.len());
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&150));
    }
}
