//! The selection run: replicate generation, matching, scoring and the
//! final arg-min.

use poseidon_gcim::{GroundMotionDatabase, TargetDistribution};
use poseidon_numeric::{binomial, ks_critical_value, sample_without_replacement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::SelectionConfig;
use crate::diagnostics::DiagnosticsSink;
use crate::error::SelectionError;
use crate::ks::ks_statistic;
use crate::replicate::{MatchedRecord, select_best_fitting};
use crate::result::{ImDiagnostic, SelectedGroundMotion, SelectionResult};
use crate::scale::scale_database;
use crate::summary::summarize;

/// Tolerance within which IM weights are accepted as already normalized.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// One scored replicate, ready for the arg-min.
struct ScoredReplicate {
    index: usize,
    r: f64,
    matches: Vec<MatchedRecord>,
    ks_diffs: Vec<f64>,
}

/// Runs the full ground-motion selection workflow.
///
/// Scales the candidate database to the target conditioning level, draws
/// `Nreplicates` independent subsets of `Ngms` simulated realizations,
/// matches each realization to its best-fitting scaled record, scores every
/// replicate with the weighted sum of squared per-IM KS statistics, and
/// returns the replicate with the smallest overall misfit `R`.
///
/// Reproducible runs derive replicate `k`'s RNG from
/// `seed.wrapping_add(k)`, so results are independent of how rayon
/// schedules the replicate workers. Ties on `R` resolve to the lowest
/// replicate index for the same reason.
///
/// # Errors
///
/// Fails fast on invalid input: a bad configuration, an empty database or
/// realization set, zero-sum weights, or any value that would poison the
/// logarithmic residual. Clamped parameters and renormalized weights are
/// not errors; they are reported through `sink` and the run proceeds.
#[tracing::instrument(skip_all, fields(
    conditioning_im = target.conditioning_im_name(),
    n_records = db.len(),
))]
pub fn select_ground_motions(
    target: &TargetDistribution,
    db: &GroundMotionDatabase,
    config: &SelectionConfig,
    sink: &dyn DiagnosticsSink,
) -> Result<SelectionResult, SelectionError> {
    config.validate()?;

    let n_realizations = target.realization_count();
    if n_realizations == 0 || target.ims().is_empty() {
        return Err(SelectionError::NoRealizations);
    }

    let n_gms = if config.n_gms() > n_realizations {
        sink.warning(&format!(
            "requested {} ground motions but only {} realizations are available; \
             selecting {}",
            config.n_gms(),
            n_realizations,
            n_realizations
        ));
        n_realizations
    } else {
        config.n_gms()
    };

    let n_combinations = binomial(n_realizations as u64, n_gms as u64);
    let n_replicates = if (config.n_replicates() as f64) > n_combinations {
        let clamped = n_combinations as usize;
        sink.warning(&format!(
            "requested {} replicates but only {} distinct subsets exist; running {}",
            config.n_replicates(),
            clamped,
            clamped
        ));
        clamped
    } else {
        config.n_replicates()
    };

    let weights = normalized_weights(target, sink)?;
    validate_realizations(target)?;

    let summaries = summarize(target)?;
    for summary in &summaries {
        sink.info(&format!(
            "{}: target median {:.4}, sigma {:.4}",
            summary.name, summary.median, summary.sigma
        ));
    }

    let scaled = scale_database(db, target)?;

    let base_seed: u64 = if config.reproducible() {
        config.seed()
    } else {
        StdRng::from_os_rng().random()
    };
    tracing::debug!(base_seed, n_gms, n_replicates, "scoring replicates");

    let scored: Vec<ScoredReplicate> = (0..n_replicates)
        .into_par_iter()
        .map(|k| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(k as u64));
            let indices = sample_without_replacement(n_realizations, n_gms, &mut rng);
            let matches = select_best_fitting(&scaled, target, &weights, &indices);
            for m in &matches {
                sink.info(&format!(
                    "replicate {}: realization {} matched record {} (residual {:.4})",
                    k + 1,
                    m.realization_index,
                    m.record_index,
                    m.residual
                ));
            }
            let ks_diffs = replicate_ks_diffs(&scaled, target, &matches)?;
            let r = weights
                .iter()
                .zip(&ks_diffs)
                .map(|(w, d)| w * d * d)
                .sum();
            Ok(ScoredReplicate {
                index: k,
                r,
                matches,
                ks_diffs,
            })
        })
        .collect::<Result<_, SelectionError>>()?;

    // Total order over (R, index) makes the winner independent of rayon's
    // scheduling even when two replicates score identically.
    let winner = scored
        .into_iter()
        .min_by(|a, b| {
            (a.r, a.index)
                .partial_cmp(&(b.r, b.index))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .ok_or(SelectionError::NoRealizations)?;

    let selected: Vec<SelectedGroundMotion> = winner
        .matches
        .iter()
        .map(|m| {
            let record = db.get(m.record_index).ok_or(SelectionError::EmptyDatabase)?;
            Ok(SelectedGroundMotion {
                database_index: m.record_index,
                database_name: record.database_name().to_string(),
                gm_id: record.gm_id().to_string(),
                event_id: record.event_id().to_string(),
                scale_factor: scaled.scale_factor(m.record_index),
                residual: m.residual,
                realization_index: m.realization_index,
            })
        })
        .collect::<Result<_, SelectionError>>()?;

    let im_diagnostics: Vec<ImDiagnostic> = summaries
        .iter()
        .zip(&weights)
        .zip(&winner.ks_diffs)
        .map(|((summary, &weight), &ks_diff)| ImDiagnostic {
            name: summary.name.clone(),
            weight,
            median: summary.median,
            sigma: summary.sigma,
            ks_diff,
        })
        .collect();

    let realizations_used: Vec<usize> = winner
        .matches
        .iter()
        .map(|m| m.realization_index)
        .collect();

    let result = SelectionResult {
        realizations_used,
        selected,
        r: winner.r,
        ks_critical_value: ks_critical_value(n_gms, config.alpha())?,
        replicate_index: winner.index,
        n_replicates_run: n_replicates,
        im_diagnostics,
    };

    let selected_ids: Vec<&str> = result.selected.iter().map(|gm| gm.gm_id.as_str()).collect();
    sink.info(&format!(
        "replicate {} of {} wins with R = {:.5} (KS critical value {:.5}); \
         realizations {:?}, records {:?}",
        result.replicate_index + 1,
        n_replicates,
        result.r,
        result.ks_critical_value,
        result.realizations_used,
        selected_ids
    ));
    tracing::info!(r = result.r, replicate = result.replicate_index, "selection complete");
    Ok(result)
}

/// Normalizes the per-IM weights to sum to one.
fn normalized_weights(
    target: &TargetDistribution,
    sink: &dyn DiagnosticsSink,
) -> Result<Vec<f64>, SelectionError> {
    let raw: Vec<f64> = target.ims().iter().map(|im| im.weighting()).collect();
    let sum: f64 = raw.iter().sum();
    if sum <= 0.0 {
        return Err(SelectionError::ZeroWeightSum { sum });
    }
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        sink.warning(&format!(
            "intensity-measure weights sum to {sum:.6}; renormalizing to 1"
        ));
    }
    Ok(raw.iter().map(|w| w / sum).collect())
}

/// Rejects realizations whose value or dispersion would poison the
/// logarithmic residual.
fn validate_realizations(target: &TargetDistribution) -> Result<(), SelectionError> {
    for im in target.ims() {
        for (index, realization) in im.realizations().iter().enumerate() {
            if !realization.value.is_finite() || realization.value <= 0.0 {
                return Err(SelectionError::NonPositiveRealization {
                    name: im.name().to_string(),
                    index,
                    value: realization.value,
                });
            }
            if !realization.sigma.is_finite() || realization.sigma <= 0.0 {
                return Err(SelectionError::InvalidRealizationSigma {
                    name: im.name().to_string(),
                    index,
                    sigma: realization.sigma,
                });
            }
        }
    }
    Ok(())
}

/// KS statistic of the matched records' scaled values against each IM's
/// target CDF.
///
/// Values outside the target support contribute their empirical
/// probability (or its complement) rather than failing; a numeric failure
/// (empty target CDF, which construction-time validation rules out)
/// aborts the run.
fn replicate_ks_diffs(
    scaled: &crate::scale::ScaledDatabase,
    target: &TargetDistribution,
    matches: &[MatchedRecord],
) -> Result<Vec<f64>, SelectionError> {
    target
        .ims()
        .iter()
        .enumerate()
        .map(|(i, im)| {
            let values: Vec<f64> = matches
                .iter()
                .map(|m| scaled.value(m.record_index, i))
                .collect();
            ks_statistic(&values, im.target_cdf())
        })
        .collect()
}
