//! Seasonal period derivation.

use crate::error::SetupError;

/// Resolves the period list for a series of the given frequency.
///
/// Explicit `periods` pass through unchanged. Otherwise a frequency above 1
/// yields the fundamental period followed by its harmonics,
/// `frequency / k` for `k = 1..=floor(frequency / 2)`, and any frequency of 1
/// or less (zero and negative included) yields `[1.0]`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SetupError::InvalidArgument`] | `frequency` is NaN or infinite |
/// | [`SetupError::MissingConfiguration`] | no periods derivable (1 < frequency < 2) |
///
/// # Example
///
/// ```
/// use stsm_setup::derive_periods;
///
/// let periods = derive_periods(4.0, None).unwrap();
/// assert_eq!(periods, vec![4.0, 2.0]);
/// ```
pub fn derive_periods(frequency: f64, periods: Option<&[f64]>) -> Result<Vec<f64>, SetupError> {
    if !frequency.is_finite() {
        return Err(SetupError::InvalidArgument {
            name: "frequency",
            reason: format!("must be finite, got {frequency}"),
        });
    }

    let periods = match periods {
        Some(p) => p.to_vec(),
        None if frequency > 1.0 => {
            let n_harmonics = (frequency / 2.0).floor() as usize;
            (1..=n_harmonics).map(|k| frequency / k as f64).collect()
        }
        None => vec![1.0],
    };

    if periods.is_empty() {
        return Err(SetupError::MissingConfiguration);
    }
    Ok(periods)
}
