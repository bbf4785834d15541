//! Pipeline entry point.

use tracing::debug;

use crate::descriptor::normalize;
use crate::error::SetupError;
use crate::options::ModelOptions;
use crate::periods::derive_periods;
use crate::request::ModelRequest;
use crate::series::preprocess;

/// Validates inputs and builds a [`ModelRequest`] for estimation.
///
/// Pipeline: option validation -> period derivation -> series repair ->
/// model normalization -> assembly. Nothing is estimated.
///
/// # Arguments
///
/// * `y` — Observed series; `NaN` marks missing values.
/// * `frequency` — Observations per cycle (12 for monthly data).
/// * `options` — Caller options, see [`ModelOptions`].
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SetupError::InvalidArgument`] | an option or the frequency breaks its contract |
/// | [`SetupError::MissingConfiguration`] | no periods supplied or derivable |
/// | [`SetupError::EmptySeries`] | `y` has no observed values |
/// | [`SetupError::LengthMismatch`] | regressors cover fewer time steps than `y` |
/// | [`SetupError::EmptyModel`] | the model has nothing to fit or search |
///
/// # Example
///
/// ```
/// use stsm_setup::{ModelOptions, setup};
///
/// let y: Vec<f64> = (0..48).map(|t| (t % 12) as f64).collect();
/// let options = ModelOptions::new().with_model("llt/equal/arma(0,0)");
/// let request = setup(y, 12.0, options).unwrap();
///
/// assert_eq!(request.model().to_string(), "llt/none/equal/arma(0,0)");
/// assert_eq!(request.periods(), &[12.0, 6.0, 4.0, 3.0, 2.4, 2.0]);
/// assert_eq!(request.h(), 18);
/// ```
#[tracing::instrument(skip(y, options), fields(n = y.len()))]
pub fn setup(
    y: Vec<f64>,
    frequency: f64,
    options: ModelOptions,
) -> Result<ModelRequest, SetupError> {
    options.validate()?;

    let periods = derive_periods(frequency, options.periods())?;
    debug!(n_periods = periods.len(), fundamental = periods[0], "periods resolved");

    let series = preprocess(y, options.u().clone(), options.h())?;
    debug!(
        n = series.y.len(),
        n_inputs = series.u.nrows(),
        "series preprocessed"
    );

    let normalized = normalize(
        options.model(),
        &periods,
        series.h,
        options.p0(),
        options.p(),
    )?;

    Ok(ModelRequest::assemble(
        frequency, series, periods, normalized, &options,
    ))
}
