//! The target (conditional) distribution of intensity measures.

use serde::Serialize;

use crate::error::GcimError;
use crate::intensity_measure::IntensityMeasure;

/// A GCIM target distribution: the conditioning IM, its target level, and
/// one [`IntensityMeasure`] per conditioned measure.
///
/// Invariant (checked at construction): every IM carries exactly
/// `realization_count` simulated realizations.
#[derive(Debug, Clone, Serialize)]
pub struct TargetDistribution {
    conditioning_im_name: String,
    conditioning_im_level: f64,
    probability_level: f64,
    realization_count: usize,
    ims: Vec<IntensityMeasure>,
}

impl TargetDistribution {
    /// Creates a target distribution.
    ///
    /// # Errors
    ///
    /// Returns [`GcimError::RealizationCountMismatch`] when any IM's
    /// realization sequence does not have length `realization_count`.
    pub fn new(
        conditioning_im_name: impl Into<String>,
        conditioning_im_level: f64,
        probability_level: f64,
        realization_count: usize,
        ims: Vec<IntensityMeasure>,
    ) -> Result<Self, GcimError> {
        for im in &ims {
            if im.realizations().len() != realization_count {
                return Err(GcimError::RealizationCountMismatch {
                    name: im.name().to_string(),
                    expected: realization_count,
                    actual: im.realizations().len(),
                });
            }
        }
        Ok(Self {
            conditioning_im_name: conditioning_im_name.into(),
            conditioning_im_level,
            probability_level,
            realization_count,
            ims,
        })
    }

    /// Returns the name of the conditioning IM.
    pub fn conditioning_im_name(&self) -> &str {
        &self.conditioning_im_name
    }

    /// Returns the target level (IML) of the conditioning IM.
    pub fn conditioning_im_level(&self) -> f64 {
        self.conditioning_im_level
    }

    /// Returns the hazard exceedance probability the target was computed at.
    pub fn probability_level(&self) -> f64 {
        self.probability_level
    }

    /// Returns the number of simulated realizations per IM.
    pub fn realization_count(&self) -> usize {
        self.realization_count
    }

    /// Returns the conditioned intensity measures in input order.
    pub fn ims(&self) -> &[IntensityMeasure] {
        &self.ims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intensity_measure::Realization;

    fn im(name: &str, n_realizations: usize) -> IntensityMeasure {
        let realizations = (0..n_realizations)
            .map(|i| Realization::new(0.1 + i as f64 * 0.01, 0.4))
            .collect();
        IntensityMeasure::new(
            name,
            1.0,
            vec![(0.05, 0.0), (0.2, 0.5), (0.8, 1.0)],
            realizations,
        )
        .unwrap()
    }

    #[test]
    fn constructs_with_matching_counts() {
        let target =
            TargetDistribution::new("PGA", 0.35, 0.02, 10, vec![im("PGV", 10), im("IA", 10)])
                .unwrap();
        assert_eq!(target.conditioning_im_name(), "PGA");
        assert_eq!(target.realization_count(), 10);
        assert_eq!(target.ims().len(), 2);
    }

    #[test]
    fn mismatched_count_rejected() {
        let result = TargetDistribution::new("PGA", 0.35, 0.02, 10, vec![im("PGV", 9)]);
        assert!(matches!(
            result,
            Err(GcimError::RealizationCountMismatch {
                expected: 10,
                actual: 9,
                ..
            })
        ));
    }

    #[test]
    fn empty_im_list_is_valid() {
        // The engine rejects this case itself; the model does not.
        assert!(TargetDistribution::new("PGA", 0.35, 0.02, 0, Vec::new()).is_ok());
    }
}
