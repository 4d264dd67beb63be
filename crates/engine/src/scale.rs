//! Amplitude scaling of candidate records to the target conditioning level.

use poseidon_gcim::{GroundMotionDatabase, ImCategory, TargetDistribution};

use crate::error::SelectionError;

/// Run-scoped scaled view of a ground-motion database.
///
/// Holds the per-record scale factor and a flat row-major
/// `n_records x n_ims` matrix of scaled IM values aligned with the target
/// distribution's IM order. The snapshot is built once per run and shared
/// read-only across replicate workers; the underlying database is never
/// mutated, so repeated runs against different targets are safe.
#[derive(Debug, Clone)]
pub struct ScaledDatabase {
    n_ims: usize,
    scale_factors: Vec<f64>,
    values: Vec<f64>,
}

impl ScaledDatabase {
    /// Returns the number of records in the snapshot.
    pub fn n_records(&self) -> usize {
        self.scale_factors.len()
    }

    /// Returns the number of IM columns (the target's IM count).
    pub fn n_ims(&self) -> usize {
        self.n_ims
    }

    /// Returns the scale factor applied to `record`.
    pub fn scale_factor(&self, record: usize) -> f64 {
        self.scale_factors[record]
    }

    /// Returns the scaled value of IM column `im` for `record`.
    pub fn value(&self, record: usize, im: usize) -> f64 {
        self.values[record * self.n_ims + im]
    }

    /// Returns the scaled IM row for `record`, in target IM order.
    pub fn row(&self, record: usize) -> &[f64] {
        &self.values[record * self.n_ims..(record + 1) * self.n_ims]
    }
}

/// Scales every database record so its conditioning IM matches the target
/// level.
///
/// With `p_j` the conditioning IM's category exponent, each record receives
/// `scale_factor = (IML / raw_j)^(1/p_j)`; every target IM value then scales
/// as `raw * scale_factor^p` with `p` that IM's own exponent (duration 0,
/// amplitude 1, energy 2).
///
/// # Errors
///
/// All failures are fatal (`InvalidInput` class): an empty database, a
/// non-positive target level, a scale-invariant conditioning IM, a record
/// missing a participating IM, or a non-positive/non-finite IM value that
/// would poison the downstream logarithmic residual.
pub fn scale_database(
    db: &GroundMotionDatabase,
    target: &TargetDistribution,
) -> Result<ScaledDatabase, SelectionError> {
    if db.is_empty() {
        return Err(SelectionError::EmptyDatabase);
    }

    let iml = target.conditioning_im_level();
    if !iml.is_finite() || iml <= 0.0 {
        return Err(SelectionError::InvalidConditioningLevel { level: iml });
    }

    let conditioning_name = target.conditioning_im_name();
    let p_j = ImCategory::classify(conditioning_name)?.exponent();
    if p_j == 0.0 {
        return Err(SelectionError::NonScalableConditioningIm {
            name: conditioning_name.to_string(),
        });
    }

    let exponents: Vec<f64> = target
        .ims()
        .iter()
        .map(|im| im.category().exponent())
        .collect();

    let n_ims = target.ims().len();
    let mut scale_factors = Vec::with_capacity(db.len());
    let mut values = Vec::with_capacity(db.len() * n_ims);

    for record in db.iter() {
        let raw_j = positive_im(record, conditioning_name)?;
        let scale_factor = (iml / raw_j).powf(1.0 / p_j);
        scale_factors.push(scale_factor);

        for (im, &p) in target.ims().iter().zip(&exponents) {
            let raw = positive_im(record, im.name())?;
            values.push(raw * scale_factor.powf(p));
        }
    }

    Ok(ScaledDatabase {
        n_ims,
        scale_factors,
        values,
    })
}

/// Looks up a record's raw IM value, requiring it to be positive and finite.
fn positive_im(
    record: &poseidon_gcim::GroundMotionRecord,
    name: &str,
) -> Result<f64, SelectionError> {
    let value = record
        .raw_im(name)
        .ok_or_else(|| SelectionError::MissingIntensityMeasure {
            gm_id: record.gm_id().to_string(),
            name: name.to_string(),
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(SelectionError::NonPositiveIntensity {
            gm_id: record.gm_id().to_string(),
            name: name.to_string(),
            value,
        });
    }
    Ok(value)
}
