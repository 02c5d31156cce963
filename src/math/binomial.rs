use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Exact binomial coefficient C(n, k)
///
/// Zero whenever `n < 0`, `k < 0` or `k > n`. Uses the multiplicative form,
/// where each partial product is itself a binomial coefficient so every
/// division is exact.
pub fn binomial(n: i64, k: i64) -> BigUint {
    if n < 0 || k < 0 || k > n {
        return BigUint::zero();
    }

    let k = k.min(n - k);
    (0..k).fold(BigUint::one(), |acc, i| {
        acc * (n - i).unsigned_abs() / (i + 1).unsigned_abs()
    })
}
