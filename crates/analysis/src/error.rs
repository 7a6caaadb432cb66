//! Error types for the hydrostat-analysis crate.

/// Error type for station-level analysis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Returned when configuration parameters are out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the requested period has no records.
    #[error("no data for station {station} in {period}")]
    DataGap {
        /// Station id, or `-` for an empty series.
        station: String,
        /// The requested period.
        period: String,
    },

    /// Returned when no flow threshold is configured and SNQ cannot be derived.
    #[error("no flow threshold configured and no discharge minima to derive SNQ from")]
    MissingThreshold,

    /// Series error.
    #[error(transparent)]
    Series(#[from] hydrostat_series::SeriesError),

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] hydrostat_calendar::CalendarError),

    /// Duration-frequency error.
    #[error(transparent)]
    Duration(#[from] hydrostat_duration::DurationError),

    /// Low-flow error.
    #[error(transparent)]
    LowFlow(#[from] hydrostat_lowflow::LowFlowError),

    /// Zonation error.
    #[error(transparent)]
    Zonation(#[from] hydrostat_zonation::ZonationError),
}
