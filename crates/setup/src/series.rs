//! Observation series and input matrix repair.
//!
//! Puts the input matrix in regressor-by-time orientation, derives the
//! forecast horizon from any future input columns, and trims leading and
//! trailing missing values from the series.

use ndarray::{Array2, Axis};
use tracing::{debug, warn};

use crate::error::SetupError;

/// Series, input matrix and horizon after preprocessing.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    /// Observations, trimmed of leading/trailing missing values.
    pub y: Vec<f64>,
    /// Input matrix, regressors by row and time by column, or the 1x2 sentinel.
    pub u: Array2<f64>,
    /// Forecast horizon; still `None` if neither given nor derivable.
    pub h: Option<f64>,
}

/// Returns `true` when `u` carries real regressors rather than the sentinel.
pub fn has_regressors(u: &Array2<f64>) -> bool {
    u.ncols() > 2
}

/// Repairs the series and input matrix for model setup.
///
/// 1. Transposes `u` when it has fewer (nonzero) columns than rows.
/// 2. Replaces an empty `u` with a 1x2 zero sentinel.
/// 3. With real regressors, requires `ncols >= y.len()` and sets
///    `h = ncols - y.len()`, overriding the caller's horizon. A matrix of
///    at most two columns is treated like the sentinel and leaves `h` alone.
/// 4. Trims leading/trailing `NaN`s from `y`. Regressor columns are trimmed
///    to the same span, and any future columns are kept after it.
///
/// Interior missing values are left in place.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SetupError::EmptySeries`] | `y` is empty or entirely missing |
/// | [`SetupError::LengthMismatch`] | regressors cover fewer time steps than `y` |
pub fn preprocess(
    mut y: Vec<f64>,
    u: Array2<f64>,
    h: Option<f64>,
) -> Result<Preprocessed, SetupError> {
    let n = y.len();
    if n == 0 {
        return Err(SetupError::EmptySeries);
    }

    let mut u = if u.ncols() != 0 && u.ncols() < u.nrows() {
        debug!(rows = u.nrows(), cols = u.ncols(), "transposing input matrix");
        u.reversed_axes()
    } else {
        u
    };

    let mut h = h;
    if u.is_empty() {
        u = Array2::zeros((1, 2));
    } else if has_regressors(&u) {
        if n > u.ncols() {
            return Err(SetupError::LengthMismatch {
                series: n,
                columns: u.ncols(),
            });
        }
        let derived = (u.ncols() - n) as f64;
        if let Some(requested) = h
            && requested != derived
        {
            warn!(
                requested,
                derived, "horizon taken from input matrix, overriding requested value"
            );
        }
        h = Some(derived);
    }

    let leading = y.first().is_some_and(|v| v.is_nan());
    let trailing = y.last().is_some_and(|v| v.is_nan());
    if leading || trailing {
        let first = y
            .iter()
            .position(|v| !v.is_nan())
            .ok_or(SetupError::EmptySeries)?;
        let last = y
            .iter()
            .rposition(|v| !v.is_nan())
            .ok_or(SetupError::EmptySeries)?;

        if has_regressors(&u) {
            let cols: Vec<usize> = (first..=last).chain(n..u.ncols()).collect();
            u = u.select(Axis(1), &cols);
        }
        y.truncate(last + 1);
        y.drain(..first);
        debug!(first, last, n_kept = y.len(), "trimmed missing values");
    }

    Ok(Preprocessed { y, u, h })
}
