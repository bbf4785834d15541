//! The assembled model request and its bookkeeping record.

use ndarray::Array2;
use serde::Serialize;

use crate::descriptor::{Descriptor, Normalized};
use crate::options::{Criterion, ModelOptions};
use crate::series::Preprocessed;

/// Fields reserved for estimation, filtering and validation stages.
///
/// Every field is `None` when a [`ModelRequest`] is assembled. Later stages
/// fill the fields they own and attach the record to a copy of the request
/// with [`ModelRequest::with_bookkeeping`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bookkeeping {
    /// Validation diagnostics table, one line per entry.
    pub diagnostics: Option<Vec<String>>,
    /// Likelihood gradient at the estimate.
    pub gradient: Option<Vec<f64>>,
    /// Achieved value of the information criterion.
    pub criterion_value: Option<f64>,
    /// Number of estimated parameters.
    pub n_par: Option<usize>,
    /// Time indices flagged as outliers.
    pub outlier_flags: Option<Vec<usize>>,
    /// Estimated parameters.
    pub parameters: Option<Vec<f64>>,
    /// One-step-ahead innovations.
    pub innovations: Option<Vec<f64>>,
    /// Point forecasts over the horizon.
    pub forecasts: Option<Vec<f64>>,
    /// Forecast variances over the horizon.
    pub forecast_variances: Option<Vec<f64>>,
    /// Fitted values.
    pub fitted: Option<Vec<f64>>,
    /// Component estimates, one row per component.
    pub components: Option<Array2<f64>>,
    /// Component variances, one row per component.
    pub component_variances: Option<Array2<f64>>,
    /// State estimates, one row per state.
    pub states: Option<Array2<f64>>,
    /// State variances, one row per state.
    pub state_variances: Option<Array2<f64>>,
    /// State perturbation estimates.
    pub state_perturbations: Option<Array2<f64>>,
    /// Observation perturbation estimates.
    pub observation_perturbations: Option<Vec<f64>>,
}

/// A validated, normalized request for structural model estimation.
///
/// Produced by [`setup`](crate::setup). Fields are read-only; downstream
/// stages extend a copy rather than mutating this one.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRequest {
    y: Vec<f64>,
    u: Array2<f64>,
    model: Descriptor,
    h: usize,
    periods: Vec<f64>,
    rhos: Vec<f64>,
    frequency: f64,
    outlier: Option<f64>,
    t_test: bool,
    stepwise: bool,
    verbose: bool,
    c_llik: bool,
    arma: bool,
    criterion: Criterion,
    p0: Option<Vec<f64>>,
    p: Option<Vec<f64>>,
    bookkeeping: Bookkeeping,
}

impl ModelRequest {
    /// Packages normalized values with an empty [`Bookkeeping`] record.
    pub(crate) fn assemble(
        frequency: f64,
        series: Preprocessed,
        periods: Vec<f64>,
        normalized: Normalized,
        options: &ModelOptions,
    ) -> Self {
        Self {
            y: series.y,
            u: series.u,
            model: normalized.descriptor,
            h: normalized.h,
            periods,
            rhos: normalized.rhos,
            frequency,
            outlier: options.outlier(),
            t_test: options.t_test(),
            stepwise: options.stepwise(),
            verbose: options.verbose(),
            c_llik: options.c_llik(),
            arma: options.arma(),
            criterion: options.criterion(),
            p0: normalized.p0,
            p: normalized.p,
            bookkeeping: Bookkeeping::default(),
        }
    }

    /// Returns a copy of this request carrying `bookkeeping`.
    pub fn with_bookkeeping(mut self, bookkeeping: Bookkeeping) -> Self {
        self.bookkeeping = bookkeeping;
        self
    }

    /// Returns the trimmed observation series.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Returns the input matrix (regressors by row) or the 1x2 sentinel.
    pub fn u(&self) -> &Array2<f64> {
        &self.u
    }

    /// Returns the canonical model descriptor.
    pub fn model(&self) -> &Descriptor {
        &self.model
    }

    /// Returns the forecast horizon.
    pub fn h(&self) -> usize {
        self.h
    }

    /// Returns the periods; the first is the fundamental period.
    pub fn periods(&self) -> &[f64] {
        &self.periods
    }

    /// Returns the per-period coefficient defaults.
    pub fn rhos(&self) -> &[f64] {
        &self.rhos
    }

    /// Returns the series frequency.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Returns the outlier critical value, if detection is enabled.
    pub fn outlier(&self) -> Option<f64> {
        self.outlier
    }

    /// Returns whether t-tests are enabled.
    pub fn t_test(&self) -> bool {
        self.t_test
    }

    /// Returns whether stepwise identification is enabled.
    pub fn stepwise(&self) -> bool {
        self.stepwise
    }

    /// Returns whether verbose estimation output is enabled.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns whether the concentrated likelihood is used.
    pub fn c_llik(&self) -> bool {
        self.c_llik
    }

    /// Returns whether ARMA irregulars are allowed.
    pub fn arma(&self) -> bool {
        self.arma
    }

    /// Returns the information criterion.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Returns the fixed initial parameters, if any survived normalization.
    pub fn p0(&self) -> Option<&[f64]> {
        self.p0.as_deref()
    }

    /// Returns the fixed final parameters, if any survived normalization.
    pub fn p(&self) -> Option<&[f64]> {
        self.p.as_deref()
    }

    /// Returns the bookkeeping record.
    pub fn bookkeeping(&self) -> &Bookkeeping {
        &self.bookkeeping
    }

    /// Returns `true` if the input matrix carries real regressors.
    pub fn has_inputs(&self) -> bool {
        crate::series::has_regressors(&self.u)
    }
}
