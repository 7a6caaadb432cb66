//! # hydrostat-io
//!
//! Boundary between files and the hydrostat data model. Reads normalized
//! gauge tables from CSV into [`StationSeries`](hydrostat_series::StationSeries)
//! and [`HalfYearRecord`](hydrostat_series::HalfYearRecord) values, and
//! writes analysis reports as JSON.
//!
//! Agency-specific layouts (fixed-width yearbooks, zipped exports, year
//! offsets) are resolved upstream; this crate only accepts the normalized
//! columns:
//!
//! | File | Columns |
//! |------|---------|
//! | daily | `station_id,year,month,day,H,Q,T` |
//! | half-year | `station_id,year,winter_min,winter_mean,winter_max,summer_min,summer_mean,summer_max,year_mean` |
//!
//! Empty fields and `NaN` are read as missing values. Rows that cannot be
//! parsed are dropped with a warning and listed in the result, unless the
//! reader is strict.

mod error;
mod reader;
mod rows;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{
    LoadedHalfYears, LoadedSeries, MalformedRecord, ReaderConfig, read_daily_csv,
    read_half_year_csv,
};
pub use writer::{WriterConfig, write_json};
