//! # hydrostat-series
//!
//! In-memory data model for gauge records and the arithmetic derived from it.
//!
//! A [`StationSeries`] is the immutable, validated daily record of one
//! station. Everything else in this crate is a pure function of it that
//! returns a new value: the day-of-hydrological-year index
//! ([`IndexedSeries`]), the leap-day normalized series, annual extremes and
//! the descriptive summaries (characteristic values, daily and monthly
//! statistics).
//!
//! Record `year`/`month` fields are hydrological labels: the year is the
//! hydrological year and month 1 is the first month of it. Resolving agency
//! specific offsets is the ingestion layer's job.
//!
//! # Quick Start
//!
//! ```ignore
//! use hydrostat_series::{DailyRecord, IndexedSeries, StationSeries};
//!
//! let records = vec![
//!     DailyRecord::new(150160180, 2001, 1, 1, 120.0, 8.4, 6.1),
//!     DailyRecord::new(150160180, 2001, 1, 2, 118.0, 8.1, 5.9),
//! ];
//! let series = StationSeries::new(records)?;
//! let indexed = IndexedSeries::from_series(&series);
//! assert_eq!(indexed.records()[1].day_of_hydrological_year, 2);
//! ```

mod characteristic;
mod daily;
mod error;
mod extremes;
mod half_year;
mod index;
mod monthly;
mod normalize;
mod record;
mod series;

pub use characteristic::{CharacteristicLevel, CharacteristicValues, characteristic_values};
pub use daily::{DayOfYearStats, daily_statistics};
pub use error::SeriesError;
pub use extremes::{AnnualExtremeSeries, AnnualExtremes};
pub use half_year::HalfYearRecord;
pub use index::{IndexedRecord, IndexedSeries};
pub use monthly::{MonthlyAggregate, MonthlyStats, monthly_statistics};
pub use normalize::normalize_leap_days;
pub use record::{DailyRecord, Variable};
pub use series::StationSeries;
