//! Empirical step-function CDF construction.

/// Builds a right-continuous staircase CDF from a set of sample values.
///
/// Sorts the values ascending, then emits `2n` points: for the j-th sorted
/// value (0-indexed), `(value_j, j/n)` and `(value_j, (j+1)/n)`. The result
/// is directly comparable against a piecewise-linear target CDF.
///
/// Returns an empty vector for empty input.
///
/// # Example
///
/// ```
/// use poseidon_numeric::empirical_cdf;
///
/// let cdf = empirical_cdf(&[2.0, 1.0]);
/// assert_eq!(cdf, vec![(1.0, 0.0), (1.0, 0.5), (2.0, 0.5), (2.0, 1.0)]);
/// ```
pub fn empirical_cdf(values: &[f64]) -> Vec<(f64, f64)> {
    let n = values.len();
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let nf = n as f64;
    let mut cdf = Vec::with_capacity(2 * n);
    for (j, &v) in sorted.iter().enumerate() {
        cdf.push((v, j as f64 / nf));
        cdf.push((v, (j + 1) as f64 / nf));
    }
    cdf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_values() {
        let cdf = empirical_cdf(&[1.0, 2.0]);
        assert_eq!(cdf, vec![(1.0, 0.0), (1.0, 0.5), (2.0, 0.5), (2.0, 1.0)]);
    }

    #[test]
    fn unsorted_input_is_sorted() {
        let cdf = empirical_cdf(&[3.0, 1.0, 2.0]);
        let xs: Vec<f64> = cdf.iter().map(|p| p.0).collect();
        assert_eq!(xs, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        assert_eq!(cdf[0].1, 0.0);
        assert_eq!(cdf[5].1, 1.0);
    }

    #[test]
    fn single_value() {
        assert_eq!(empirical_cdf(&[5.0]), vec![(5.0, 0.0), (5.0, 1.0)]);
    }

    #[test]
    fn empty_input() {
        assert!(empirical_cdf(&[]).is_empty());
    }

    #[test]
    fn duplicate_values_stack() {
        let cdf = empirical_cdf(&[1.0, 1.0]);
        assert_eq!(cdf, vec![(1.0, 0.0), (1.0, 0.5), (1.0, 0.5), (1.0, 1.0)]);
    }

    #[test]
    fn probabilities_are_non_decreasing() {
        let cdf = empirical_cdf(&[0.4, 0.1, 0.9, 0.2, 0.7]);
        for w in cdf.windows(2) {
            assert!(w[1].1 >= w[0].1);
        }
    }
}
