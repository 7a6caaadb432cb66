//! # hydrostat-zonation
//!
//! Low, medium and high water zones from a stage duration-frequency table
//! by the Rybczyński method.
//!
//! The duration curve is read as stage (interval middle) against
//! cumulative duration in days (cumulative count including higher). A
//! straight line joins its two ends; the line parallel to it through a
//! reference point chosen on the curve fixes the high-water boundary one
//! bin width below the reference stage. The low-water boundary is the
//! modal stage: the middle of the interval observed most often.
//!
//! ```ignore
//! use hydrostat_zonation::{ReferencePoint, WaterZone, solve_zonation};
//!
//! let zones = solve_zonation(&table, ReferencePoint::new(66.0, 145.0))?;
//! assert_eq!(zones.classify(zones.high_water_lower + 1.0), WaterZone::High);
//! ```

mod error;
mod solve;

pub use error::ZonationError;
pub use solve::{ReferencePoint, WaterZone, ZoneBoundaries, solve_zonation};
