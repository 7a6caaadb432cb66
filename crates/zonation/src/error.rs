//! Error types for the hydrostat-zonation crate.

/// Error type for the zonation solver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZonationError {
    /// Returned when the table has fewer than two intervals.
    #[error("degenerate duration curve: {rows} interval(s), need at least 2")]
    DegenerateCurve {
        /// Number of rows in the table.
        rows: usize,
    },

    /// Returned when the reference point is not finite.
    #[error("invalid reference point ({duration_days}, {stage_cm})")]
    InvalidReference {
        /// Cumulative duration, days.
        duration_days: f64,
        /// Stage, cm.
        stage_cm: f64,
    },
}
