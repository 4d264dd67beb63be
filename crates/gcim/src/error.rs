//! Error types for the poseidon-gcim crate.

/// Error type for all fallible operations in the poseidon-gcim crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GcimError {
    /// Returned when an IM name has no scale-factor classification.
    #[error("intensity measure '{name}' has no scale-factor classification")]
    UnknownIntensityMeasure {
        /// The unrecognised IM name.
        name: String,
    },

    /// Returned when an IM's realization count differs from the target's.
    #[error(
        "intensity measure '{name}' has {actual} realizations, expected {expected}"
    )]
    RealizationCountMismatch {
        /// Name of the offending IM.
        name: String,
        /// Realization count declared by the target distribution.
        expected: usize,
        /// Realization count actually present on the IM.
        actual: usize,
    },

    /// Returned when a target CDF has fewer than two points.
    #[error("intensity measure '{name}' has a target CDF with {len} point(s), need >= 2")]
    DegenerateTargetCdf {
        /// Name of the offending IM.
        name: String,
        /// Number of CDF points present.
        len: usize,
    },

    /// Returned when a target CDF is not non-decreasing in both coordinates.
    #[error("intensity measure '{name}' has a non-monotonic target CDF at index {index}")]
    NonMonotonicTargetCdf {
        /// Name of the offending IM.
        name: String,
        /// First index at which monotonicity is violated.
        index: usize,
    },

    /// Returned when a weighting is non-finite or negative.
    #[error("intensity measure '{name}' has invalid weighting {weighting}")]
    InvalidWeighting {
        /// Name of the offending IM.
        name: String,
        /// The invalid weighting value.
        weighting: f64,
    },
}
