//! Output types for a completed ground-motion selection run.

use serde::Serialize;

/// One ground motion chosen for the final suite.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedGroundMotion {
    /// Index of the record in the input database.
    pub database_index: usize,
    /// Name of the source database the record came from.
    pub database_name: String,
    /// Record identifier within its database.
    pub gm_id: String,
    /// Identifier of the causative event.
    pub event_id: String,
    /// Amplitude scale factor applied to the record.
    pub scale_factor: f64,
    /// Weighted squared log residual against the matched realization.
    pub residual: f64,
    /// Index of the simulated realization this record was matched to.
    pub realization_index: usize,
}

/// Per-intensity-measure fit diagnostics for the winning replicate.
#[derive(Debug, Clone, Serialize)]
pub struct ImDiagnostic {
    /// Intensity measure name.
    pub name: String,
    /// Normalized weight used in residuals and the overall misfit.
    pub weight: f64,
    /// Median of the target distribution.
    pub median: f64,
    /// Lognormal standard deviation of the target distribution.
    pub sigma: f64,
    /// KS statistic of the selected suite against the target CDF.
    pub ks_diff: f64,
}

/// The outcome of a selection run: the best-fitting suite plus the
/// diagnostics needed to judge it.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult {
    /// Indices of the simulated realizations the winning replicate
    /// sampled, in match order (aligned with `selected`).
    pub realizations_used: Vec<usize>,
    /// The selected ground motions, in realization order.
    pub selected: Vec<SelectedGroundMotion>,
    /// Overall weighted misfit of the winning replicate.
    pub r: f64,
    /// KS critical value at the configured significance level.
    pub ks_critical_value: f64,
    /// Which replicate won.
    pub replicate_index: usize,
    /// How many replicates were actually run after clamping.
    pub n_replicates_run: usize,
    /// Per-IM fit diagnostics for the winning replicate.
    pub im_diagnostics: Vec<ImDiagnostic>,
}

impl SelectionResult {
    /// True when every intensity measure passes the KS test at the
    /// configured significance level.
    pub fn passes_ks_test(&self) -> bool {
        self.im_diagnostics
            .iter()
            .all(|d| d.ks_diff <= self.ks_critical_value)
    }
}
