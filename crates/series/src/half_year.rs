//! Half-year summary records.

use serde::Serialize;

/// Winter and summer half-year summary of one hydrological year.
///
/// Published by gauge agencies alongside the daily series; used as an
/// alternative source of annual extremes and characteristic values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HalfYearRecord {
    pub station_id: u32,
    /// Hydrological year label.
    pub year: i32,
    pub winter_min: f64,
    pub winter_mean: f64,
    pub winter_max: f64,
    pub summer_min: f64,
    pub summer_mean: f64,
    pub summer_max: f64,
    pub year_mean: f64,
}

impl HalfYearRecord {
    /// Larger of the two half-year maxima; `NaN` if either is missing.
    pub fn year_max(&self) -> f64 {
        if self.winter_max.is_nan() || self.summer_max.is_nan() {
            return f64::NAN;
        }
        self.winter_max.max(self.summer_max)
    }

    /// Smaller of the two half-year minima; `NaN` if either is missing.
    pub fn year_min(&self) -> f64 {
        if self.winter_min.is_nan() || self.summer_min.is_nan() {
            return f64::NAN;
        }
        self.winter_min.min(self.summer_min)
    }
}
