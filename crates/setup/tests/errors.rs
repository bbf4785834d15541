//! Integration tests for SetupError variants.

use ndarray::Array2;
use stsm_setup::{ModelOptions, SetupError, setup};

fn series(n: usize) -> Vec<f64> {
    (0..n).map(|t| t as f64).collect()
}

#[test]
fn error_invalid_option() {
    let options = ModelOptions::new().with_h(-2.0);
    let result = setup(series(10), 12.0, options);
    assert!(matches!(
        result,
        Err(SetupError::InvalidArgument { name: "h", .. })
    ));
}

#[test]
fn error_non_finite_frequency() {
    let result = setup(series(10), f64::NAN, ModelOptions::new());
    assert!(matches!(
        result,
        Err(SetupError::InvalidArgument {
            name: "frequency",
            ..
        })
    ));
}

#[test]
fn error_malformed_model() {
    let options = ModelOptions::new().with_model("llt");
    let result = setup(series(10), 12.0, options);
    assert!(matches!(
        result,
        Err(SetupError::InvalidArgument { name: "model", .. })
    ));
}

#[test]
fn error_length_mismatch() {
    let options = ModelOptions::new().with_u(Array2::ones((3, 10)));
    let result = setup(series(20), 12.0, options);
    assert!(matches!(
        result,
        Err(SetupError::LengthMismatch {
            series: 20,
            columns: 10
        })
    ));
}

#[test]
fn error_missing_configuration() {
    let result = setup(series(10), 1.5, ModelOptions::new());
    assert!(matches!(result, Err(SetupError::MissingConfiguration)));
}

#[test]
fn error_empty_model() {
    let options = ModelOptions::new().with_model("NONE/none/None/none");
    let result = setup(series(10), 12.0, options);
    assert!(matches!(
        result,
        Err(SetupError::EmptyModel { model }) if model == "none/none/none/none"
    ));
}

#[test]
fn error_empty_series() {
    let result = setup(vec![f64::NAN; 5], 12.0, ModelOptions::new());
    assert!(matches!(result, Err(SetupError::EmptySeries)));
}
