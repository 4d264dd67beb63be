//! Error-path coverage for `select_ground_motions`.

use std::collections::HashMap;

use poseidon_engine::{
    GroundMotionDatabase, GroundMotionRecord, IntensityMeasure, NullSink, Realization,
    SelectionConfig, SelectionError, TargetDistribution, select_ground_motions,
};

fn cdf() -> Vec<(f64, f64)> {
    (1..100)
        .map(|i| {
            let p = i as f64 / 100.0;
            (p * 4.0 + 0.1, p)
        })
        .collect()
}

fn im(name: &str, weight: f64, realizations: Vec<Realization>) -> IntensityMeasure {
    IntensityMeasure::new(name, weight, cdf(), realizations).unwrap()
}

fn uniform_realizations(n: usize) -> Vec<Realization> {
    (0..n)
        .map(|i| Realization::new(0.5 + 0.1 * i as f64, 0.4))
        .collect()
}

fn make_db(n_records: usize) -> GroundMotionDatabase {
    let records = (0..n_records)
        .map(|i| {
            let mut ims = HashMap::new();
            ims.insert("PGA".to_string(), 0.2 + 0.05 * i as f64);
            ims.insert("PGV".to_string(), 1.0 + 0.3 * i as f64);
            GroundMotionRecord::new(
                "NGA",
                format!("gm-{i}"),
                "ev-0",
                6.0,
                10.0,
                400.0,
                0.2,
                ims,
            )
        })
        .collect();
    GroundMotionDatabase::new(records)
}

fn target(ims: Vec<IntensityMeasure>, n_realizations: usize) -> TargetDistribution {
    TargetDistribution::new("PGA", 0.4, 0.02, n_realizations, ims).unwrap()
}

#[test]
fn zero_realizations_rejected() {
    let t = target(vec![im("PGV", 1.0, Vec::new())], 0);
    let err = select_ground_motions(&t, &make_db(5), &SelectionConfig::new(), &NullSink)
        .unwrap_err();
    assert!(matches!(err, SelectionError::NoRealizations));
}

#[test]
fn empty_database_rejected() {
    let t = target(vec![im("PGV", 1.0, uniform_realizations(5))], 5);
    let err = select_ground_motions(
        &t,
        &GroundMotionDatabase::default(),
        &SelectionConfig::new().with_n_gms(3),
        &NullSink,
    )
    .unwrap_err();
    assert!(matches!(err, SelectionError::EmptyDatabase));
}

#[test]
fn invalid_alpha_rejected() {
    let t = target(vec![im("PGV", 1.0, uniform_realizations(5))], 5);
    let config = SelectionConfig::new().with_n_gms(3).with_alpha(0.5);
    let err = select_ground_motions(&t, &make_db(5), &config, &NullSink).unwrap_err();
    assert!(matches!(err, SelectionError::InvalidConfig { .. }));
}

#[test]
fn zero_weight_sum_rejected() {
    let t = target(vec![im("PGV", 0.0, uniform_realizations(5))], 5);
    let err = select_ground_motions(
        &t,
        &make_db(5),
        &SelectionConfig::new().with_n_gms(3),
        &NullSink,
    )
    .unwrap_err();
    assert!(matches!(err, SelectionError::ZeroWeightSum { .. }));
}

#[test]
fn non_positive_realization_rejected() {
    let mut realizations = uniform_realizations(5);
    realizations[2] = Realization::new(0.0, 0.4);
    let t = target(vec![im("PGV", 1.0, realizations)], 5);
    let err = select_ground_motions(
        &t,
        &make_db(5),
        &SelectionConfig::new().with_n_gms(3),
        &NullSink,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SelectionError::NonPositiveRealization { index: 2, .. }
    ));
}

#[test]
fn invalid_realization_sigma_rejected() {
    let mut realizations = uniform_realizations(5);
    realizations[4] = Realization::new(1.0, -0.1);
    let t = target(vec![im("PGV", 1.0, realizations)], 5);
    let err = select_ground_motions(
        &t,
        &make_db(5),
        &SelectionConfig::new().with_n_gms(3),
        &NullSink,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SelectionError::InvalidRealizationSigma { index: 4, .. }
    ));
}

#[test]
fn record_missing_im_rejected() {
    let t = target(vec![im("PGV", 1.0, uniform_realizations(5))], 5);
    let mut ims = HashMap::new();
    ims.insert("PGA".to_string(), 0.3);
    let db = GroundMotionDatabase::new(vec![GroundMotionRecord::new(
        "NGA", "gm-0", "ev-0", 6.0, 10.0, 400.0, 0.2, ims,
    )]);
    let err = select_ground_motions(
        &t,
        &db,
        &SelectionConfig::new().with_n_gms(3),
        &NullSink,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SelectionError::MissingIntensityMeasure { .. }
    ));
}

#[test]
fn zero_counts_rejected_before_any_work() {
    let t = target(vec![im("PGV", 1.0, uniform_realizations(5))], 5);
    for config in [
        SelectionConfig::new().with_n_gms(0),
        SelectionConfig::new().with_n_replicates(0),
    ] {
        let err =
            select_ground_motions(&t, &make_db(5), &config, &NullSink).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidConfig { .. }));
    }
}
