use serde::Deserialize;

/// Top-level setup file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StsmConfig {
    /// Observations per cycle (12 for monthly data).
    pub frequency: f64,

    /// Model options.
    #[serde(default)]
    pub model: ModelToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub periods: Option<Vec<f64>>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(default)]
    pub outlier: Option<f64>,
    #[serde(default, alias = "tTest")]
    pub t_test: bool,
    #[serde(default)]
    pub stepwise: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_true", alias = "cLlik")]
    pub c_llik: bool,
    #[serde(default = "default_true")]
    pub arma: bool,
    #[serde(default)]
    pub p0: Option<Vec<f64>>,
    #[serde(default)]
    pub p: Option<Vec<f64>>,
    #[serde(default = "default_criterion")]
    pub criterion: String,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            model: default_model(),
            periods: None,
            h: None,
            outlier: None,
            t_test: false,
            stepwise: false,
            verbose: false,
            c_llik: true,
            arma: true,
            p0: None,
            p: None,
            criterion: default_criterion(),
        }
    }
}

fn default_model() -> String {
    stsm_setup::DEFAULT_MODEL.to_string()
}
fn default_true() -> bool {
    true
}
fn default_criterion() -> String {
    "aic".to_string()
}
