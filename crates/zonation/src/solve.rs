//! Rybczyński zone-boundary solver.

use hydrostat_duration::DurationFrequencyTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ZonationError;

/// Point on the duration curve: cumulative duration (days) and stage (cm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub duration_days: f64,
    pub stage_cm: f64,
}

impl ReferencePoint {
    pub fn new(duration_days: f64, stage_cm: f64) -> Self {
        Self {
            duration_days,
            stage_cm,
        }
    }
}

/// Water zone of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterZone {
    Low,
    Medium,
    High,
}

/// Zone boundaries and the construction lines that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneBoundaries {
    /// Upper bound of low water (NTW), cm.
    pub low_water_upper: f64,
    /// Lower bound of high water, cm.
    pub high_water_lower: f64,
    /// Slope of the end-to-end line, cm per day.
    pub slope: f64,
    pub intercept: f64,
    /// Intercept of the parallel line through the reference point.
    pub parallel_intercept: f64,
    /// `(duration, stage)` of the curve's upper end.
    pub line_start: (f64, f64),
    /// `(duration, stage)` of the curve's lower end.
    pub line_end: (f64, f64),
    pub reference: ReferencePoint,
}

impl ZoneBoundaries {
    /// Zone of `stage`: high at or above the high-water boundary, low at or
    /// below the low-water boundary, medium in between.
    pub fn classify(&self, stage: f64) -> WaterZone {
        if stage >= self.high_water_lower {
            WaterZone::High
        } else if stage <= self.low_water_upper {
            WaterZone::Low
        } else {
            WaterZone::Medium
        }
    }

    /// Stage of the end-to-end line at `duration_days`.
    pub fn line_stage(&self, duration_days: f64) -> f64 {
        self.slope * duration_days + self.intercept
    }

    /// Stage of the parallel line at `duration_days`.
    pub fn parallel_stage(&self, duration_days: f64) -> f64 {
        self.slope * duration_days + self.parallel_intercept
    }
}

/// Derives water-zone boundaries from a duration-frequency table.
///
/// The end-to-end line runs from `(min cum_higher, max middle)` to
/// `(max cum_higher, min middle)`. The high-water boundary is the reference
/// stage minus the table's bin width; the low-water boundary is the middle
/// of the first row (from the top) with the largest total count. An
/// inverted result (low above high) is returned with a warning.
///
/// # Errors
///
/// - [`ZonationError::InvalidReference`] if the reference point is not finite.
/// - [`ZonationError::DegenerateCurve`] if the table has fewer than two rows.
pub fn solve_zonation(
    table: &DurationFrequencyTable,
    reference: ReferencePoint,
) -> Result<ZoneBoundaries, ZonationError> {
    if !reference.duration_days.is_finite() || !reference.stage_cm.is_finite() {
        return Err(ZonationError::InvalidReference {
            duration_days: reference.duration_days,
            stage_cm: reference.stage_cm,
        });
    }
    let rows = table.rows();
    if rows.len() < 2 {
        return Err(ZonationError::DegenerateCurve { rows: rows.len() });
    }

    let x = |r: &hydrostat_duration::DurationFrequencyRow| r.cumulative_count_including_higher as f64;
    let x_start = rows.iter().map(x).fold(f64::INFINITY, f64::min);
    let x_end = rows.iter().map(x).fold(f64::NEG_INFINITY, f64::max);
    let y_start = rows.iter().map(|r| r.middle).fold(f64::NEG_INFINITY, f64::max);
    let y_end = rows.iter().map(|r| r.middle).fold(f64::INFINITY, f64::min);
    if x_end <= x_start {
        return Err(ZonationError::DegenerateCurve { rows: rows.len() });
    }

    let slope = (y_end - y_start) / (x_end - x_start);
    let intercept = y_start - slope * x_start;
    let parallel_intercept = reference.stage_cm - slope * reference.duration_days;

    let high_water_lower = reference.stage_cm - f64::from(table.bin_width_cm());
    let low_water_upper = table.modal_row().middle;

    if low_water_upper > high_water_lower {
        warn!(
            low_water_upper,
            high_water_lower, "low-water boundary lies above high-water boundary"
        );
    }
    debug!(
        slope,
        intercept, parallel_intercept, low_water_upper, high_water_lower, "zonation solved"
    );

    Ok(ZoneBoundaries {
        low_water_upper,
        high_water_lower,
        slope,
        intercept,
        parallel_intercept,
        line_start: (x_start, y_start),
        line_end: (x_end, y_end),
        reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hydrostat_duration::build_duration_frequency;
    use hydrostat_series::{DailyRecord, StationSeries};

    fn table(stages: &[f64]) -> DurationFrequencyTable {
        let records = stages
            .iter()
            .enumerate()
            .map(|(i, &h)| DailyRecord::new(1, 2001, (i / 28) as u8 + 1, (i % 28) as u8 + 1, h, 1.0, 1.0))
            .collect();
        build_duration_frequency(&StationSeries::new(records).unwrap(), 10).unwrap()
    }

    #[test]
    fn line_through_curve_ends() {
        // rows top-down: 120-130 (1), 110-120 (3), 100-110 (2)
        let t = table(&[101.0, 102.0, 111.0, 112.0, 113.0, 125.0]);
        let z = solve_zonation(&t, ReferencePoint::new(2.0, 121.0)).unwrap();
        assert_eq!(z.line_start, (1.0, 125.0));
        assert_eq!(z.line_end, (6.0, 105.0));
        assert_relative_eq!(z.slope, -4.0);
        assert_relative_eq!(z.intercept, 129.0);
        assert_relative_eq!(z.parallel_intercept, 129.0);
        assert_relative_eq!(z.high_water_lower, 111.0);
        assert_relative_eq!(z.low_water_upper, 115.0);
    }

    #[test]
    fn classify_zones() {
        let t = table(&[101.0, 102.0, 103.0, 111.0, 125.0, 135.0, 145.0]);
        let z = solve_zonation(&t, ReferencePoint::new(3.0, 140.0)).unwrap();
        assert_relative_eq!(z.low_water_upper, 105.0);
        assert_relative_eq!(z.high_water_lower, 130.0);
        assert_eq!(z.classify(100.0), WaterZone::Low);
        assert_eq!(z.classify(118.0), WaterZone::Medium);
        assert_eq!(z.classify(130.0), WaterZone::High);
    }

    #[test]
    fn single_row_is_degenerate() {
        let t = table(&[101.0, 102.0, 105.0]);
        let err = solve_zonation(&t, ReferencePoint::new(1.0, 100.0)).unwrap_err();
        assert_eq!(err, ZonationError::DegenerateCurve { rows: 1 });
    }

    #[test]
    fn non_finite_reference_rejected() {
        let t = table(&[101.0, 125.0]);
        assert!(matches!(
            solve_zonation(&t, ReferencePoint::new(f64::NAN, 100.0)),
            Err(ZonationError::InvalidReference { .. })
        ));
    }
}
