//! Daily gauge record.

use serde::Serialize;

/// One day of gauge observations.
///
/// Missing values and leap-day placeholders are `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRecord {
    pub station_id: u32,
    /// Hydrological year label.
    pub year: i32,
    /// Hydrological month label (1 = first month of the hydrological year).
    pub month: u8,
    pub day: u8,
    /// Stage, cm.
    #[serde(rename = "H")]
    pub h: f64,
    /// Discharge, m³/s.
    #[serde(rename = "Q")]
    pub q: f64,
    /// Water temperature, °C.
    #[serde(rename = "T")]
    pub t: f64,
}

impl DailyRecord {
    pub fn new(station_id: u32, year: i32, month: u8, day: u8, h: f64, q: f64, t: f64) -> Self {
        Self {
            station_id,
            year,
            month,
            day,
            h,
            q,
            t,
        }
    }

    /// Placeholder record with `NaN` observations.
    pub fn placeholder(station_id: u32, year: i32, month: u8, day: u8) -> Self {
        Self::new(station_id, year, month, day, f64::NAN, f64::NAN, f64::NAN)
    }

    /// `true` if every observation is `NaN`.
    pub fn is_placeholder(&self) -> bool {
        self.h.is_nan() && self.q.is_nan() && self.t.is_nan()
    }

    /// Sort key `(year, month, day)`.
    pub fn date_key(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Value of the selected variable.
    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Stage => self.h,
            Variable::Discharge => self.q,
            Variable::Temperature => self.t,
        }
    }
}

/// Observed quantity of a gauge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Variable {
    #[serde(rename = "H")]
    Stage,
    #[serde(rename = "Q")]
    Discharge,
    #[serde(rename = "T")]
    Temperature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_all_nan() {
        let r = DailyRecord::placeholder(1, 2001, 4, 29);
        assert!(r.is_placeholder());
        assert!(!DailyRecord::new(1, 2001, 4, 28, 100.0, f64::NAN, f64::NAN).is_placeholder());
    }

    #[test]
    fn value_selects_field() {
        let r = DailyRecord::new(1, 2001, 1, 1, 120.0, 8.5, 4.0);
        assert_eq!(r.value(Variable::Stage), 120.0);
        assert_eq!(r.value(Variable::Discharge), 8.5);
        assert_eq!(r.value(Variable::Temperature), 4.0);
    }
}
