//! Error types for the stsm-setup crate.

/// Error type for all fallible operations in the stsm-setup crate.
///
/// Every variant is a validation failure raised while building a
/// [`ModelRequest`](crate::ModelRequest); nothing downstream runs once one is
/// returned.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SetupError {
    /// Returned when an option violates its declared type or shape contract.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending option.
        name: &'static str,
        /// Description of the violation.
        reason: String,
    },

    /// Returned when the regressor history is shorter than the series.
    #[error("input matrix has {columns} columns but the series has {series} observations")]
    LengthMismatch {
        /// Length of the observation series.
        series: usize,
        /// Number of time columns in the input matrix.
        columns: usize,
    },

    /// Returned when no period information can be derived.
    #[error("no periods supplied and none derivable from the frequency")]
    MissingConfiguration,

    /// Returned when the model specifies nothing to fit or search.
    #[error("model `{model}` has no components to fit or identify")]
    EmptyModel {
        /// The offending descriptor, after case folding.
        model: String,
    },

    /// Returned when the series holds no observed values.
    #[error("series has no observed values")]
    EmptySeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_argument() {
        let err = SetupError::InvalidArgument {
            name: "h",
            reason: "must be finite and >= 0, got -1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument `h`: must be finite and >= 0, got -1"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let err = SetupError::LengthMismatch {
            series: 20,
            columns: 10,
        };
        assert_eq!(
            err.to_string(),
            "input matrix has 10 columns but the series has 20 observations"
        );
    }

    #[test]
    fn error_missing_configuration() {
        let err = SetupError::MissingConfiguration;
        assert_eq!(
            err.to_string(),
            "no periods supplied and none derivable from the frequency"
        );
    }

    #[test]
    fn error_empty_model() {
        let err = SetupError::EmptyModel {
            model: "none/none/none/none".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "model `none/none/none/none` has no components to fit or identify"
        );
    }

    #[test]
    fn error_empty_series() {
        assert_eq!(
            SetupError::EmptySeries.to_string(),
            "series has no observed values"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SetupError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SetupError>();
    }
}
