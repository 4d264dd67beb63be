//! Two-sample Kolmogorov–Smirnov statistic against a piecewise-linear
//! target CDF.

use poseidon_numeric::{NumericError, empirical_cdf, interpolate};

use crate::error::SelectionError;

/// Computes the KS statistic between a set of sample values and a target
/// CDF.
///
/// Builds the empirical staircase CDF from `values`, then takes the maximum
/// local difference over all empirical points. Outside the target's
/// support the target is treated as 0 (below) or 1 (above), so the local
/// difference becomes the empirical probability itself or its complement —
/// a sample far outside the target is a large misfit, not an error.
///
/// # Errors
///
/// Returns [`SelectionError::Numeric`] with [`NumericError::EmptyData`]
/// when the target CDF is empty.
pub fn ks_statistic(values: &[f64], target_cdf: &[(f64, f64)]) -> Result<f64, SelectionError> {
    if target_cdf.is_empty() {
        return Err(SelectionError::Numeric(NumericError::EmptyData));
    }
    let lo = target_cdf[0].0;
    let hi = target_cdf[target_cdf.len() - 1].0;

    let mut max_diff = 0.0f64;
    for (x, p) in empirical_cdf(values) {
        let diff = if x < lo {
            p
        } else if x > hi {
            1.0 - p
        } else {
            (p - interpolate(target_cdf, x)?).abs()
        };
        max_diff = max_diff.max(diff);
    }
    Ok(max_diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Uniform target CDF on [0, 1].
    fn uniform_cdf() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (1.0, 1.0)]
    }

    #[test]
    fn perfect_fit_is_small() {
        // Evenly spread samples against the uniform CDF: the staircase
        // deviates from the diagonal by at most 1/n at the step corners.
        let values: Vec<f64> = (0..10).map(|i| (i as f64 + 0.5) / 10.0).collect();
        let d = ks_statistic(&values, &uniform_cdf()).unwrap();
        assert!(d <= 0.1 + 1e-12, "d = {d}");
    }

    #[test]
    fn concentrated_samples_score_badly() {
        // All mass at one point: the empirical CDF jumps 0 -> 1 at 0.5
        // while the target is at 0.5 there.
        let d = ks_statistic(&[0.5, 0.5, 0.5], &uniform_cdf()).unwrap();
        assert_relative_eq!(d, 0.5);
    }

    #[test]
    fn sample_below_support_uses_empirical_probability() {
        // One of two values sits below the target's first x: its upper step
        // probability (0.5) is the local difference there.
        let d = ks_statistic(&[-1.0, 0.5], &uniform_cdf()).unwrap();
        assert!(d >= 0.5);
    }

    #[test]
    fn sample_above_support_uses_complement() {
        // A value above the target's last x contributes 1 - p at its lower
        // step (p = 0.5), plus the in-range value contributes below.
        let d = ks_statistic(&[0.5, 2.0], &uniform_cdf()).unwrap();
        assert!(d >= 0.5);
    }

    #[test]
    fn all_below_support_maxes_out() {
        let d = ks_statistic(&[-3.0, -2.0], &uniform_cdf()).unwrap();
        assert_relative_eq!(d, 1.0);
    }

    #[test]
    fn empty_target_fails() {
        assert!(matches!(
            ks_statistic(&[0.5], &[]),
            Err(SelectionError::Numeric(NumericError::EmptyData))
        ));
    }

    #[test]
    fn statistic_is_bounded() {
        let values = [0.1, 0.4, 0.7, 1.2, -0.3];
        let d = ks_statistic(&values, &uniform_cdf()).unwrap();
        assert!((0.0..=1.0).contains(&d));
    }
}
