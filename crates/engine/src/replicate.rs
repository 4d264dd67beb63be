//! Best-fit record matching for one replicate's sampled realizations.

use poseidon_gcim::TargetDistribution;

use crate::scale::ScaledDatabase;

/// One realization's matched database record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedRecord {
    /// Index of the matched record within the database.
    pub record_index: usize,
    /// Weighted log-residual of the match.
    pub residual: f64,
    /// Index of the simulated realization that selected this record.
    pub realization_index: usize,
}

/// Selects the best-fitting database record for each sampled realization.
///
/// For each realization index (in input order) every record is scanned and
/// scored with the weighted squared log residual
///
/// ```text
/// residual = sum_i w_i * (ln(scaled_i / realization_i.value) / realization_i.sigma)^2
/// ```
///
/// The record with the minimum residual wins; strict `<` comparison keeps
/// the lowest database index on ties. A record may be matched by more than
/// one realization — there is no uniqueness constraint across the
/// replicate.
///
/// Inputs are pre-validated by the engine (positive scaled values, positive
/// finite realization values and sigmas, weights aligned with the target's
/// IM order), so the scan itself cannot fail. Cost is
/// O(|db| x numIMs) per realization.
pub fn select_best_fitting(
    scaled: &ScaledDatabase,
    target: &TargetDistribution,
    weights: &[f64],
    realization_indices: &[usize],
) -> Vec<MatchedRecord> {
    debug_assert_eq!(weights.len(), target.ims().len());
    debug_assert!(scaled.n_records() > 0);

    let mut matches = Vec::with_capacity(realization_indices.len());
    for &r in realization_indices {
        let mut best_index = 0;
        let mut best_residual = f64::INFINITY;

        for record in 0..scaled.n_records() {
            let row = scaled.row(record);
            let mut residual = 0.0;
            for (i, im) in target.ims().iter().enumerate() {
                let realization = im.realizations()[r];
                let dev = (row[i] / realization.value).ln() / realization.sigma;
                residual += weights[i] * dev * dev;
            }
            if residual < best_residual {
                best_residual = residual;
                best_index = record;
            }
        }

        matches.push(MatchedRecord {
            record_index: best_index,
            residual: best_residual,
            realization_index: r,
        });
    }
    matches
}
