//! Combinatorial counts.

/// Computes the binomial coefficient C(n, k) as a floating-point product.
///
/// Uses the iterative multiplicative formula `res *= (n - i) / (i + 1)`.
/// The result is a real number and is **not** exact for large `n`, `k`:
/// the running product accumulates rounding error and can overflow to
/// infinity. Callers that only need a magnitude comparison (e.g. capping a
/// replicate count) are unaffected; callers needing exact large counts
/// should use a log-gamma formulation instead.
///
/// `binomial(n, 0) == 1.0` for all `n`; `binomial(n, k) == 0.0` when `k > n`.
pub fn binomial(n: u64, k: u64) -> f64 {
    let mut res = 1.0;
    for i in 0..k {
        res = res * (n as f64 - i as f64) / (i as f64 + 1.0);
    }
    res
}
