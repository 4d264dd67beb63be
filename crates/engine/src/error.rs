//! Error types for the poseidon-engine crate.

use poseidon_gcim::GcimError;
use poseidon_numeric::NumericError;

/// Error type for all fallible operations in the selection engine.
///
/// Every variant is fatal to the run: the engine aborts with a descriptive
/// cause rather than returning partial results. Recoverable conditions
/// (clamped `Ngms`/`Nreplicates`, weight renormalization) are reported
/// through the diagnostics sink instead and never surface here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SelectionError {
    /// Returned when the target distribution carries zero realizations.
    #[error("no simulated realizations present in the target distribution")]
    NoRealizations,

    /// Returned when a configuration parameter is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the offending parameter.
        reason: String,
    },

    /// Returned when the candidate database holds no records.
    #[error("ground-motion database is empty")]
    EmptyDatabase,

    /// Returned when the IM weights sum to zero (nothing to normalize).
    #[error("intensity-measure weights sum to {sum}, cannot normalize")]
    ZeroWeightSum {
        /// The offending weight sum.
        sum: f64,
    },

    /// Returned when the conditioning IM level is not a positive finite
    /// number.
    #[error("conditioning IM level {level} must be positive and finite")]
    InvalidConditioningLevel {
        /// The offending level.
        level: f64,
    },

    /// Returned when the conditioning IM is scale-invariant (exponent 0)
    /// and therefore cannot be scaled to a target level.
    #[error("conditioning IM '{name}' is scale-invariant and cannot be scaled to a target level")]
    NonScalableConditioningIm {
        /// Name of the conditioning IM.
        name: String,
    },

    /// Returned when a record lacks a value for a target IM.
    #[error("record '{gm_id}' has no value for intensity measure '{name}'")]
    MissingIntensityMeasure {
        /// Ground-motion identifier of the offending record.
        gm_id: String,
        /// Name of the missing IM.
        name: String,
    },

    /// Returned when a record's IM value would poison the logarithmic
    /// residual (zero, negative, or non-finite).
    #[error("record '{gm_id}' has non-positive value {value} for intensity measure '{name}'")]
    NonPositiveIntensity {
        /// Ground-motion identifier of the offending record.
        gm_id: String,
        /// Name of the offending IM.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// Returned when a simulated realization value is zero, negative, or
    /// non-finite.
    #[error("realization {index} of '{name}' has non-positive value {value}")]
    NonPositiveRealization {
        /// Name of the offending IM.
        name: String,
        /// Realization index.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a simulated realization's dispersion is zero,
    /// negative, or non-finite.
    #[error("realization {index} of '{name}' has invalid sigma {sigma}")]
    InvalidRealizationSigma {
        /// Name of the offending IM.
        name: String,
        /// Realization index.
        index: usize,
        /// The offending dispersion.
        sigma: f64,
    },

    /// Returned when a target CDF cannot produce a positive 16th-percentile
    /// value, so the lognormal dispersion is undefined.
    #[error("target CDF of '{name}' yields non-positive quantiles, lognormal sigma undefined")]
    DegenerateSummary {
        /// Name of the offending IM.
        name: String,
    },

    /// A numeric-kernel failure (out-of-range interpolation, invalid alpha).
    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// A data-model failure (unknown IM classification, malformed CDF).
    #[error(transparent)]
    Gcim(#[from] GcimError),
}
