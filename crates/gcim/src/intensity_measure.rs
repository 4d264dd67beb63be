//! Intensity measures and their simulated realizations.

use serde::Serialize;

use crate::category::ImCategory;
use crate::error::GcimError;

/// One simulated realization of an IM: a sampled value and its lognormal
/// dispersion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Realization {
    /// Simulated IM value.
    pub value: f64,
    /// Lognormal standard deviation attached to this realization.
    pub sigma: f64,
}

impl Realization {
    /// Creates a new realization.
    pub fn new(value: f64, sigma: f64) -> Self {
        Self { value, sigma }
    }
}

/// One intensity measure of the target distribution.
///
/// Immutable once built; run-derived quantities (median, sigma, KS
/// difference) live in the engine's output types, not here.
#[derive(Debug, Clone, Serialize)]
pub struct IntensityMeasure {
    name: String,
    period: f64,
    weighting: f64,
    category: ImCategory,
    target_cdf: Vec<(f64, f64)>,
    realizations: Vec<Realization>,
}

impl IntensityMeasure {
    /// Creates an intensity measure, classifying its scale-factor category
    /// and parsing the spectral period from the name.
    ///
    /// `target_cdf` is the ordered (value, cumulative probability) sequence
    /// acting as the target distribution; both coordinates must be
    /// non-decreasing.
    ///
    /// # Errors
    ///
    /// Returns [`GcimError::UnknownIntensityMeasure`] when the name has no
    /// classification, [`GcimError::DegenerateTargetCdf`] /
    /// [`GcimError::NonMonotonicTargetCdf`] for malformed CDFs, and
    /// [`GcimError::InvalidWeighting`] for a negative or non-finite
    /// weighting.
    pub fn new(
        name: impl Into<String>,
        weighting: f64,
        target_cdf: Vec<(f64, f64)>,
        realizations: Vec<Realization>,
    ) -> Result<Self, GcimError> {
        let name = name.into();
        let category = ImCategory::classify(&name)?;

        if !weighting.is_finite() || weighting < 0.0 {
            return Err(GcimError::InvalidWeighting { name, weighting });
        }
        if target_cdf.len() < 2 {
            return Err(GcimError::DegenerateTargetCdf {
                len: target_cdf.len(),
                name,
            });
        }
        for (i, w) in target_cdf.windows(2).enumerate() {
            if w[1].0 < w[0].0 || w[1].1 < w[0].1 {
                return Err(GcimError::NonMonotonicTargetCdf { name, index: i + 1 });
            }
        }

        let period = spectral_period(&name).unwrap_or(-1.0);
        Ok(Self {
            name,
            period,
            weighting,
            category,
            target_cdf,
            realizations,
        })
    }

    /// Returns the IM name (e.g. `"PGA"`, `"SA (1.0s)"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vibration period in seconds, or `-1.0` if not spectral.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Returns the raw (un-normalized) weighting.
    pub fn weighting(&self) -> f64 {
        self.weighting
    }

    /// Returns the scale-factor category.
    pub fn category(&self) -> ImCategory {
        self.category
    }

    /// Returns the target CDF as ordered (value, probability) pairs.
    pub fn target_cdf(&self) -> &[(f64, f64)] {
        &self.target_cdf
    }

    /// Returns the simulated realizations, one per Monte-Carlo draw.
    pub fn realizations(&self) -> &[Realization] {
        &self.realizations
    }
}

/// Parses the vibration period out of a spectral-acceleration name of the
/// form `"SA (T s)"`, e.g. `"SA (1.5s)"` -> `1.5`. Returns `None` for
/// non-spectral names.
fn spectral_period(name: &str) -> Option<f64> {
    let rest = name.strip_prefix("SA")?;
    let inner = rest.trim().strip_prefix('(')?;
    let digits: String = inner
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cdf() -> Vec<(f64, f64)> {
        vec![(0.1, 0.0), (0.2, 0.5), (0.4, 1.0)]
    }

    #[test]
    fn constructs_and_classifies() {
        let im = IntensityMeasure::new("PGA", 1.0, cdf(), vec![Realization::new(0.2, 0.3)])
            .unwrap();
        assert_eq!(im.name(), "PGA");
        assert_eq!(im.category(), ImCategory::Amplitude);
        assert_relative_eq!(im.period(), -1.0);
        assert_eq!(im.realizations().len(), 1);
    }

    #[test]
    fn spectral_period_parse() {
        assert_eq!(spectral_period("SA (1.0s)"), Some(1.0));
        assert_eq!(spectral_period("SA (0.25s)"), Some(0.25));
        assert_eq!(spectral_period("SA (10s)"), Some(10.0));
        assert_eq!(spectral_period("PGA"), None);
    }

    #[test]
    fn spectral_im_carries_period() {
        let im = IntensityMeasure::new("SA (1.5s)", 1.0, cdf(), Vec::new()).unwrap();
        assert_relative_eq!(im.period(), 1.5);
        assert_eq!(im.category(), ImCategory::Amplitude);
    }

    #[test]
    fn duration_im_period_is_sentinel() {
        let im = IntensityMeasure::new("Ds595", 1.0, cdf(), Vec::new()).unwrap();
        assert_relative_eq!(im.period(), -1.0);
        assert_eq!(im.category(), ImCategory::Duration);
    }

    #[test]
    fn unknown_name_rejected() {
        assert!(matches!(
            IntensityMeasure::new("PGD", 1.0, cdf(), Vec::new()),
            Err(GcimError::UnknownIntensityMeasure { .. })
        ));
    }

    #[test]
    fn short_cdf_rejected() {
        assert!(matches!(
            IntensityMeasure::new("PGA", 1.0, vec![(0.1, 0.5)], Vec::new()),
            Err(GcimError::DegenerateTargetCdf { len: 1, .. })
        ));
    }

    #[test]
    fn non_monotonic_cdf_rejected() {
        let bad = vec![(0.1, 0.0), (0.2, 0.6), (0.3, 0.5)];
        assert!(matches!(
            IntensityMeasure::new("PGA", 1.0, bad, Vec::new()),
            Err(GcimError::NonMonotonicTargetCdf { index: 2, .. })
        ));
    }

    #[test]
    fn duplicate_cdf_keys_allowed() {
        // Step CDFs repeat x-values; that is still non-decreasing.
        let stepped = vec![(0.1, 0.0), (0.1, 0.5), (0.2, 1.0)];
        assert!(IntensityMeasure::new("PGA", 1.0, stepped, Vec::new()).is_ok());
    }

    #[test]
    fn negative_weighting_rejected() {
        assert!(matches!(
            IntensityMeasure::new("PGA", -0.5, cdf(), Vec::new()),
            Err(GcimError::InvalidWeighting { .. })
        ));
    }
}
