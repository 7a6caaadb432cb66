//! Error types for the hydrostat-lowflow crate.

/// Error type for low-flow detection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LowFlowError {
    /// Returned when configuration parameters are out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the input spans more than one hydrological year.
    #[error("records span several hydrological years: {first} and {found}")]
    MixedYears {
        /// Year of the first record.
        first: i32,
        /// Conflicting year.
        found: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_config() {
        let err = LowFlowError::InvalidConfig {
            reason: "min_length must be >= 1".to_string(),
        };
        assert_eq!(err.to_string(), "invalid configuration: min_length must be >= 1");
    }

    #[test]
    fn display_mixed_years() {
        let err = LowFlowError::MixedYears {
            first: 2001,
            found: 2002,
        };
        assert_eq!(
            err.to_string(),
            "records span several hydrological years: 2001 and 2002"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<LowFlowError>();
    }
}
