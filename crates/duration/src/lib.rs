//! # hydrostat-duration
//!
//! Duration-frequency table of water stage.
//!
//! Stage observations are binned into half-open intervals `[from, to)` of a
//! fixed width (10 cm by default). Each row counts observations per
//! hydrological month and in total, and the cumulative columns read the
//! table from the highest interval down: "cumulative count including higher"
//! at a row is the number of days the stage reached that interval or above,
//! which is the duration axis of the duration curve.
//!
//! ```ignore
//! use hydrostat_duration::build_duration_frequency;
//!
//! let table = build_duration_frequency(&series, 10)?;
//! let top = &table.rows()[0];
//! assert_eq!(top.cumulative_count_including_lower, table.n_observations());
//! ```

mod error;
mod table;

pub use error::DurationError;
pub use table::{
    DEFAULT_BIN_WIDTH_CM, DurationFrequencyRow, DurationFrequencyTable, MAX_BINS,
    build_duration_frequency,
};
