//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};
use ndarray::Array2;

use stsm_setup::{Criterion, ModelOptions};

use crate::config::ModelToml;

/// Builds [`ModelOptions`] from the TOML model table and an optional input matrix.
///
/// Option contracts are checked later by [`ModelOptions::validate`]; only the
/// criterion name is parsed here.
pub fn build_model_options(model: &ModelToml, u: Option<Array2<f64>>) -> Result<ModelOptions> {
    let criterion: Criterion = model
        .criterion
        .parse()
        .context("invalid criterion in config")?;

    let mut options = ModelOptions::new()
        .with_model(&model.model)
        .with_t_test(model.t_test)
        .with_stepwise(model.stepwise)
        .with_verbose(model.verbose)
        .with_c_llik(model.c_llik)
        .with_arma(model.arma)
        .with_criterion(criterion);
    if let Some(ref periods) = model.periods {
        options = options.with_periods(periods.clone());
    }
    if let Some(h) = model.h {
        options = options.with_h(h);
    }
    if let Some(outlier) = model.outlier {
        options = options.with_outlier(outlier);
    }
    if let Some(ref p0) = model.p0 {
        options = options.with_p0(p0.clone());
    }
    if let Some(ref p) = model.p {
        options = options.with_p(p.clone());
    }
    if let Some(u) = u {
        options = options.with_u(u);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_gives_default_options() {
        let options = build_model_options(&ModelToml::default(), None).unwrap();
        assert_eq!(options.model(), "?/none/?/?");
        assert_eq!(options.criterion(), Criterion::Aic);
        assert!(options.c_llik());
        assert!(options.periods().is_none());
        assert!(options.u().is_empty());
    }

    #[test]
    fn fields_are_forwarded() {
        let toml = ModelToml {
            model: "llt/equal/none".to_string(),
            periods: Some(vec![12.0, 6.0]),
            h: Some(6.0),
            outlier: Some(2.5),
            p0: Some(vec![0.3]),
            criterion: "aicc".to_string(),
            ..ModelToml::default()
        };
        let options = build_model_options(&toml, Some(Array2::ones((2, 30)))).unwrap();
        assert_eq!(options.model(), "llt/equal/none");
        assert_eq!(options.periods(), Some(&[12.0, 6.0][..]));
        assert_eq!(options.h(), Some(6.0));
        assert_eq!(options.outlier(), Some(2.5));
        assert_eq!(options.p0(), Some(&[0.3][..]));
        assert_eq!(options.criterion(), Criterion::Aicc);
        assert_eq!(options.u().dim(), (2, 30));
    }

    #[test]
    fn unknown_criterion_fails() {
        let toml = ModelToml {
            criterion: "hqc".to_string(),
            ..ModelToml::default()
        };
        let err = build_model_options(&toml, None).unwrap_err();
        assert!(format!("{err:#}").contains("criterion"));
    }
}
