//! Scale-factor classification of intensity measures.

use serde::Serialize;

use crate::error::GcimError;

/// Closed classification of intensity measures by amplitude-scaling
/// behaviour.
///
/// Scaling a ground motion by a factor `s` multiplies each IM by
/// `s^exponent`: duration metrics are invariant, amplitude metrics scale
/// linearly, energy metrics quadratically. The category is resolved once
/// when an IM is constructed, so the scaler never string-matches names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImCategory {
    /// Significant-duration metrics (Ds575, Ds595): scale-invariant.
    Duration,
    /// Peak, spectral, cumulative and intensity-index measures
    /// (PGA, PGV, SA, CAV, ASI, SI, DSI): scale linearly.
    Amplitude,
    /// Arias-intensity-like energy measures (IA): scale quadratically.
    Energy,
}

impl ImCategory {
    /// Classifies an IM name.
    ///
    /// Spectral-acceleration names carry a period suffix (`"SA (1.0s)"`)
    /// and classify by their `SA` prefix; duration metrics by their `Ds`
    /// prefix.
    ///
    /// # Errors
    ///
    /// Returns [`GcimError::UnknownIntensityMeasure`] for names outside the
    /// classification — an unrecoverable configuration error per the
    /// selection contract.
    pub fn classify(name: &str) -> Result<Self, GcimError> {
        match name {
            "PGA" | "PGV" | "CAV" | "ASI" | "SI" | "DSI" => Ok(Self::Amplitude),
            "IA" => Ok(Self::Energy),
            _ if name.starts_with("SA") => Ok(Self::Amplitude),
            _ if name.starts_with("Ds") => Ok(Self::Duration),
            _ => Err(GcimError::UnknownIntensityMeasure {
                name: name.to_string(),
            }),
        }
    }

    /// Returns the amplitude-scaling exponent for this category.
    pub fn exponent(&self) -> f64 {
        match self {
            Self::Duration => 0.0,
            Self::Amplitude => 1.0,
            Self::Energy => 2.0,
        }
    }
}
