//! Sampling without replacement.

use rand::Rng;

/// Draws `k` distinct indices uniformly from `[0, n)`.
///
/// Uses a partial Fisher–Yates shuffle: only the last `k` of `n` slots are
/// shuffled, so cost is O(n) setup plus O(k) swaps. When `k > n`, `k` is
/// clamped to `n`. Results are bit-reproducible for a given seeded `rng`.
///
/// # Example
///
/// ```
/// use poseidon_numeric::sample_without_replacement;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let sample = sample_without_replacement(100, 30, &mut rng);
/// assert_eq!(sample.len(), 30);
/// ```
pub fn sample_without_replacement(n: usize, k: usize, rng: &mut impl Rng) -> Vec<usize> {
    let k = k.min(n);
    if k == 0 {
        return Vec::new();
    }

    let mut slots: Vec<usize> = (0..n).collect();
    // Shuffle only the tail k slots; each draws from the untouched prefix
    // plus itself.
    for i in (n - k..n).rev() {
        let j = rng.random_range(0..=i);
        slots.swap(i, j);
    }
    slots.split_off(n - k)
}
