//! Error types for the hydrostat-extremes crate.

use crate::family::DistributionFamily;

/// Error type for distribution fitting and evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Returned when the sample is too small to fit.
    #[error("insufficient sample: {n} values, need at least {min}")]
    InsufficientSample {
        /// Sample size.
        n: usize,
        /// Required minimum.
        min: usize,
    },

    /// Returned when the sample contains NaN or infinite values.
    #[error("sample contains non-finite values")]
    NonFiniteSample,

    /// Returned when a positive-support family receives a value <= 0.
    #[error("{family} requires positive values, got {value}")]
    NonPositiveSample {
        /// Family being fitted.
        family: DistributionFamily,
        /// First offending value.
        value: f64,
    },

    /// Returned when all sample values are equal.
    #[error("sample has zero spread")]
    ConstantSample,

    /// Returned when the likelihood optimizer fails or ends on invalid parameters.
    #[error("{family} fit did not converge: {reason}")]
    Convergence {
        /// Family being fitted.
        family: DistributionFamily,
        /// Description of the failure.
        reason: String,
    },

    /// Returned when a probability is outside (0, 1).
    #[error("probability must be in (0, 1), got {p}")]
    InvalidProbability {
        /// The rejected probability.
        p: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_insufficient_sample() {
        let err = FitError::InsufficientSample { n: 7, min: 10 };
        assert_eq!(err.to_string(), "insufficient sample: 7 values, need at least 10");
    }

    #[test]
    fn display_convergence() {
        let err = FitError::Convergence {
            family: DistributionFamily::PearsonTypeIII,
            reason: "no best parameter".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "pearson_type_iii fit did not converge: no best parameter"
        );
    }

    #[test]
    fn display_non_positive() {
        let err = FitError::NonPositiveSample {
            family: DistributionFamily::LogNormal,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "log_normal requires positive values, got -1");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<FitError>();
    }
}
