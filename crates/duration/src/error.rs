//! Error types for the hydrostat-duration crate.

/// Error type for duration-frequency table construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DurationError {
    /// Returned when the series has no non-null stage value.
    #[error("no stage data: the series has no non-null H values")]
    NoStageData,

    /// Returned when the bin width is zero.
    #[error("invalid bin width: {width} cm")]
    InvalidBinWidth {
        /// The rejected width.
        width: u32,
    },

    /// Returned when the stage range needs more intervals than allowed,
    /// usually because of a corrupt `H` value.
    #[error("stage range {min_h}..{max_h} cm needs {bins} intervals, more than {max}")]
    TooManyBins {
        min_h: f64,
        max_h: f64,
        bins: f64,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            DurationError::NoStageData.to_string(),
            "no stage data: the series has no non-null H values"
        );
        assert_eq!(
            DurationError::InvalidBinWidth { width: 0 }.to_string(),
            "invalid bin width: 0 cm"
        );
        assert_eq!(
            DurationError::TooManyBins {
                min_h: 50.0,
                max_h: 1e9,
                bins: 1e8,
                max: 10_000
            }
            .to_string(),
            "stage range 50..1000000000 cm needs 100000000 intervals, more than 10000"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<DurationError>();
    }
}
