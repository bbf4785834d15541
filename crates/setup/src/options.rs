//! Caller options for model setup and their declarative validation schema.

use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use serde::Serialize;

use crate::error::SetupError;

/// Default model descriptor: identify trend, seasonal and irregular, no cycle.
pub const DEFAULT_MODEL: &str = "?/none/?/?";

/// Information criterion used by identification search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Akaike Information Criterion.
    #[default]
    Aic,
    /// Bayesian (Schwarz) Information Criterion.
    Bic,
    /// Small-sample corrected AIC.
    Aicc,
}

impl FromStr for Criterion {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aic" => Ok(Criterion::Aic),
            "bic" => Ok(Criterion::Bic),
            "aicc" => Ok(Criterion::Aicc),
            other => Err(SetupError::InvalidArgument {
                name: "criterion",
                reason: format!("expected one of aic, bic, aicc, got {other:?}"),
            }),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Criterion::Aic => "aic",
            Criterion::Bic => "bic",
            Criterion::Aicc => "aicc",
        };
        f.write_str(s)
    }
}

/// Options accepted by [`setup`](crate::setup).
///
/// Use the builder methods to override defaults.
///
/// # Example
///
/// ```
/// use stsm_setup::{Criterion, ModelOptions};
///
/// let options = ModelOptions::new()
///     .with_model("llt/equal/arma(0,0)")
///     .with_criterion(Criterion::Bic);
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ModelOptions {
    /// Input (regressor) matrix; empty means no inputs.
    u: Array2<f64>,
    /// Explicit periods; `None` derives harmonics from the frequency.
    periods: Option<Vec<f64>>,
    /// Raw model descriptor.
    model: String,
    /// Forecast horizon; `None` resolves to the default later.
    h: Option<f64>,
    /// Outlier detection critical value; `None` disables detection.
    outlier: Option<f64>,
    t_test: bool,
    stepwise: bool,
    verbose: bool,
    c_llik: bool,
    arma: bool,
    /// Fixed initial parameters.
    p0: Option<Vec<f64>>,
    /// Fixed final parameters.
    p: Option<Vec<f64>>,
    criterion: Criterion,
}

impl ModelOptions {
    /// Creates options with every default applied.
    ///
    /// Defaults: no inputs, periods derived from frequency,
    /// `model = "?/none/?/?"`, `h` unset, outlier detection disabled,
    /// `t_test = stepwise = verbose = false`, `c_llik = arma = true`,
    /// no fixed parameters, `criterion = aic`.
    pub fn new() -> Self {
        Self {
            u: Array2::zeros((0, 0)),
            periods: None,
            model: DEFAULT_MODEL.to_string(),
            h: None,
            outlier: None,
            t_test: false,
            stepwise: false,
            verbose: false,
            c_llik: true,
            arma: true,
            p0: None,
            p: None,
            criterion: Criterion::Aic,
        }
    }

    /// Sets the input matrix. Either orientation is accepted.
    pub fn with_u(mut self, u: Array2<f64>) -> Self {
        self.u = u;
        self
    }

    /// Sets explicit periods; the first is the fundamental period.
    pub fn with_periods(mut self, periods: Vec<f64>) -> Self {
        self.periods = Some(periods);
        self
    }

    /// Sets the raw model descriptor.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the forecast horizon.
    pub fn with_h(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    /// Enables outlier detection at the given critical value.
    pub fn with_outlier(mut self, outlier: f64) -> Self {
        self.outlier = Some(outlier);
        self
    }

    /// Enables t-tests on estimated components.
    pub fn with_t_test(mut self, t_test: bool) -> Self {
        self.t_test = t_test;
        self
    }

    /// Enables stepwise identification.
    pub fn with_stepwise(mut self, stepwise: bool) -> Self {
        self.stepwise = stepwise;
        self
    }

    /// Enables verbose estimation output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Selects concentrated likelihood.
    pub fn with_c_llik(mut self, c_llik: bool) -> Self {
        self.c_llik = c_llik;
        self
    }

    /// Allows ARMA irregulars during identification.
    pub fn with_arma(mut self, arma: bool) -> Self {
        self.arma = arma;
        self
    }

    /// Sets fixed initial parameters.
    pub fn with_p0(mut self, p0: Vec<f64>) -> Self {
        self.p0 = Some(p0);
        self
    }

    /// Sets fixed final parameters.
    pub fn with_p(mut self, p: Vec<f64>) -> Self {
        self.p = Some(p);
        self
    }

    /// Sets the information criterion.
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    // --- Accessors ---

    /// Returns the input matrix.
    pub fn u(&self) -> &Array2<f64> {
        &self.u
    }

    /// Returns the explicit periods, if set.
    pub fn periods(&self) -> Option<&[f64]> {
        self.periods.as_deref()
    }

    /// Returns the raw model descriptor.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the forecast horizon, if set.
    pub fn h(&self) -> Option<f64> {
        self.h
    }

    /// Returns the outlier critical value, if enabled.
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

    /// Returns whether verbose output is enabled.
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

    /// Returns the fixed initial parameters, if set.
    pub fn p0(&self) -> Option<&[f64]> {
        self.p0.as_deref()
    }

    /// Returns the fixed final parameters, if set.
    pub fn p(&self) -> Option<&[f64]> {
        self.p.as_deref()
    }

    /// Returns the information criterion.
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    /// Validates every option against [`SCHEMA`], in table order.
    ///
    /// Returns the first violation as [`SetupError::InvalidArgument`].
    pub fn validate(&self) -> Result<(), SetupError> {
        for rule in SCHEMA {
            (rule.check)(self).map_err(|reason| SetupError::InvalidArgument {
                name: rule.name,
                reason,
            })?;
        }
        Ok(())
    }
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of the option schema.
pub struct OptionRule {
    /// Option name as reported in errors.
    pub name: &'static str,
    /// Human-readable default.
    pub default: &'static str,
    check: fn(&ModelOptions) -> Result<(), String>,
}

/// Declared option schema.
///
/// Boolean flags and `criterion` are enforced by their types and carry an
/// always-passing predicate so the table lists the complete option set.
pub static SCHEMA: &[OptionRule] = &[
    OptionRule {
        name: "u",
        default: "empty",
        check: |o| check_finite_matrix(&o.u),
    },
    OptionRule {
        name: "periods",
        default: "derived from frequency",
        check: |o| o.periods.as_deref().map_or(Ok(()), check_periods),
    },
    OptionRule {
        name: "model",
        default: DEFAULT_MODEL,
        check: |o| check_model(&o.model),
    },
    OptionRule {
        name: "h",
        default: "unset",
        check: |o| o.h.map_or(Ok(()), check_horizon),
    },
    OptionRule {
        name: "outlier",
        default: "disabled",
        check: |o| o.outlier.map_or(Ok(()), check_outlier),
    },
    OptionRule {
        name: "tTest",
        default: "false",
        check: |_| Ok(()),
    },
    OptionRule {
        name: "stepwise",
        default: "false",
        check: |_| Ok(()),
    },
    OptionRule {
        name: "verbose",
        default: "false",
        check: |_| Ok(()),
    },
    OptionRule {
        name: "cLlik",
        default: "true",
        check: |_| Ok(()),
    },
    OptionRule {
        name: "arma",
        default: "true",
        check: |_| Ok(()),
    },
    OptionRule {
        name: "p0",
        default: "unset",
        check: |o| o.p0.as_deref().map_or(Ok(()), check_finite_vector),
    },
    OptionRule {
        name: "p",
        default: "unset",
        check: |o| o.p.as_deref().map_or(Ok(()), check_finite_vector),
    },
    OptionRule {
        name: "criterion",
        default: "aic",
        check: |_| Ok(()),
    },
];

fn check_finite_matrix(u: &Array2<f64>) -> Result<(), String> {
    match u.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((r, c), v)) => Err(format!("non-finite value {v} at ({r}, {c})")),
        None => Ok(()),
    }
}

fn check_periods(periods: &[f64]) -> Result<(), String> {
    if periods.is_empty() {
        return Err("must not be empty".to_string());
    }
    if let Some(&p) = periods.iter().find(|p| !p.is_finite() || **p <= 0.0) {
        return Err(format!("every period must be finite and > 0, got {p}"));
    }
    let mut sorted = periods.to_vec();
    sorted.sort_by(f64::total_cmp);
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(format!("periods must be unique, {} repeats", w[0]));
    }
    Ok(())
}

fn check_model(model: &str) -> Result<(), String> {
    let n_tokens = model.split('/').count();
    if !(2..=4).contains(&n_tokens) {
        return Err(format!(
            "expected 2 to 4 slash-separated components, got {n_tokens} in {model:?}"
        ));
    }
    Ok(())
}

pub(crate) fn check_horizon(h: f64) -> Result<(), String> {
    if !h.is_finite() || h < 0.0 {
        return Err(format!("must be finite and >= 0, got {h}"));
    }
    Ok(())
}

fn check_outlier(outlier: f64) -> Result<(), String> {
    if !outlier.is_finite() || outlier <= 0.0 {
        return Err(format!("critical value must be finite and > 0, got {outlier}"));
    }
    Ok(())
}

fn check_finite_vector(values: &[f64]) -> Result<(), String> {
    if values.is_empty() {
        return Err("must not be empty".to_string());
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(format!("non-finite value {} at index {i}", values[i])),
        None => Ok(()),
    }
}
