//! Lower-bound binary search and piecewise-linear interpolation over
//! sorted (key, value) pairs.

use crate::error::NumericError;

/// Finds the index of the first pair whose key is `>= x`.
///
/// Treats the first coordinate of each pair as a non-decreasing key.
/// Returns `None` when `pairs` is empty or `x` falls outside
/// `[first.key, last.key]`. Among duplicate keys the *first* matching
/// index is returned. O(log n).
pub fn lower_bound(pairs: &[(f64, f64)], x: f64) -> Option<usize> {
    if pairs.is_empty() || x < pairs[0].0 || x > pairs[pairs.len() - 1].0 {
        return None;
    }
    Some(pairs.partition_point(|p| p.0 < x))
}

/// Linearly interpolates `pairs` at `x`.
///
/// Locates the bracketing points with [`lower_bound`]. When the bracketing
/// index is 0, or the two bracketing keys coincide (duplicate keys), the
/// stored value at the found index is returned without division.
///
/// # Errors
///
/// Returns [`NumericError::OutOfRange`] when `x` is outside the key bounds,
/// or [`NumericError::EmptyData`] for an empty slice.
pub fn interpolate(pairs: &[(f64, f64)], x: f64) -> Result<f64, NumericError> {
    if pairs.is_empty() {
        return Err(NumericError::EmptyData);
    }
    let i = lower_bound(pairs, x).ok_or(NumericError::OutOfRange {
        x,
        lo: pairs[0].0,
        hi: pairs[pairs.len() - 1].0,
    })?;
    if i == 0 || pairs[i].0 == pairs[i - 1].0 {
        return Ok(pairs[i].1);
    }
    let (x0, y0) = pairs[i - 1];
    let (x1, y1) = pairs[i];
    Ok(y0 + (x - x0) / (x1 - x0) * (y1 - y0))
}
