//! Approximate median and lognormal dispersion of each target distribution.

use poseidon_gcim::TargetDistribution;
use poseidon_numeric::interpolate;
use serde::Serialize;

use crate::error::SelectionError;

/// Diagnostic summary of one IM's target distribution.
#[derive(Debug, Clone, Serialize)]
pub struct ImSummary {
    /// IM name.
    pub name: String,
    /// Approximate median (50th percentile of the target CDF).
    pub median: f64,
    /// Approximate lognormal dispersion `0.5 * ln(p84 / p16)`.
    pub sigma: f64,
}

/// Summarizes each IM's target CDF by its median and lognormal dispersion.
///
/// Swaps the CDF coordinates to obtain the inverse (probability -> value)
/// mapping, then interpolates at 0.5, 0.84 and 0.16. The summaries feed
/// bias-assessment diagnostics only; the matching residual never uses them.
///
/// # Errors
///
/// An interpolation probability outside the CDF's probability range means
/// the target is malformed and propagates as
/// [`SelectionError::Numeric`]; non-positive quantiles make the lognormal
/// dispersion undefined and yield [`SelectionError::DegenerateSummary`].
pub fn summarize(target: &TargetDistribution) -> Result<Vec<ImSummary>, SelectionError> {
    target
        .ims()
        .iter()
        .map(|im| {
            let inverse: Vec<(f64, f64)> =
                im.target_cdf().iter().map(|&(x, p)| (p, x)).collect();
            let median = interpolate(&inverse, 0.5)?;
            let p84 = interpolate(&inverse, 0.84)?;
            let p16 = interpolate(&inverse, 0.16)?;
            if p16 <= 0.0 || p84 <= 0.0 {
                return Err(SelectionError::DegenerateSummary {
                    name: im.name().to_string(),
                });
            }
            Ok(ImSummary {
                name: im.name().to_string(),
                median,
                sigma: 0.5 * (p84 / p16).ln(),
            })
        })
        .collect()
}
