//! Error types for the hydrostat-series crate.

/// Error type for all fallible operations in the hydrostat-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when two records share the same date.
    #[error("duplicate record for {year}-{month:02}-{day:02}")]
    DuplicateDate {
        /// Hydrological year label.
        year: i32,
        /// Hydrological month label.
        month: u8,
        /// Day of month.
        day: u8,
    },

    /// Returned when a record precedes its predecessor.
    #[error("record {index} ({year}-{month:02}-{day:02}) is out of chronological order")]
    OutOfOrder {
        /// Position of the offending record.
        index: usize,
        /// Hydrological year label.
        year: i32,
        /// Hydrological month label.
        month: u8,
        /// Day of month.
        day: u8,
    },

    /// Returned when records from different stations are mixed.
    #[error("mixed stations: expected {expected}, found {found}")]
    MixedStations {
        /// Station id of the first record.
        expected: u32,
        /// Conflicting station id.
        found: u32,
    },

    /// Returned when a record has an impossible month or day.
    #[error("invalid date {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Hydrological year label.
        year: i32,
        /// Hydrological month label.
        month: u8,
        /// Day of month.
        day: u8,
    },

    /// Wraps an error originating from the hydrostat-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when a confidence level is outside (0, 1).
    #[error("confidence level must be in (0, 1), got {level}")]
    InvalidConfidenceLevel {
        /// The rejected level.
        level: f64,
    },
}

impl From<hydrostat_calendar::CalendarError> for SeriesError {
    fn from(e: hydrostat_calendar::CalendarError) -> Self {
        SeriesError::Calendar {
            reason: e.to_string(),
        }
    }
}
