//! # hydrostat-calendar
//!
//! Pure date arithmetic for hydrological years.
//!
//! Gauge records arrive labelled with a hydrological year and a hydrological
//! month index (1 = first month of the hydrological year). This crate maps
//! between those labels and the Gregorian calendar, assigns the running
//! day-of-hydrological-year index and describes the fixed 366-slot year
//! layout used for leap-day normalization.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month)"] -->|"hydrological_year()"| B["hydrological year"]
//!     A -->|"hydrological_month()"| C["hydrological month"]
//!     C -->|"calendar_month()"| A
//!     D["year labels"] -->|"day_of_hydrological_year()"| E["1-based day index"]
//!     F["YearLayout"] -->|".slot()"| G["slot 1..=366"]
//!     F -->|".slot_exists()"| H["leap placeholder?"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use hydrostat_calendar::{YearLayout, day_of_hydrological_year, hydrological_year};
//!
//! // November-start hydrological year (Polish convention)
//! assert_eq!(hydrological_year(2000, 11, 11).unwrap(), 2001);
//!
//! // Running index within each year group
//! let idx = day_of_hydrological_year(&[2000, 2000, 2001]);
//! assert_eq!(idx, vec![1, 2, 1]);
//!
//! // February 29 is hydrological month 4 with a November start
//! let layout = YearLayout::new(11).unwrap();
//! assert!(!layout.slot_exists(2001, layout.slot(4, 29).unwrap()).unwrap());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `hydro_year` | Hydrological year and month conversions |
//! | `month` | Gregorian month lengths and leap years |
//! | `index` | Day-of-hydrological-year indexing |
//! | `layout` | Fixed 366-slot year layout |
//! | `error` | Error types |

mod error;
mod hydro_year;
mod index;
mod layout;
mod month;

pub use error::CalendarError;
pub use hydro_year::{
    DEFAULT_START_MONTH, calendar_month, calendar_year, hydrological_month, hydrological_year,
};
pub use index::day_of_hydrological_year;
pub use layout::{SLOTS_PER_YEAR, YearLayout};
pub use month::{days_in_month, is_leap_year, max_days_in_month};
