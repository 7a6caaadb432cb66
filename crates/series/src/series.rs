//! Validated daily series of one station.

use crate::error::SeriesError;
use crate::record::{DailyRecord, Variable};

/// Chronologically ordered daily records of a single station.
///
/// Construction checks that dates are unique and strictly increasing, that
/// month and day labels are in range, and that every record belongs to the
/// same station. The series is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationSeries {
    station_id: Option<u32>,
    records: Vec<DailyRecord>,
}

impl StationSeries {
    /// Validates `records` and wraps them.
    ///
    /// An empty vector is accepted; operations on it yield empty results.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::InvalidDate`] for a month outside 1..=12 or a day outside 1..=31.
    /// - [`SeriesError::MixedStations`] if station ids differ.
    /// - [`SeriesError::DuplicateDate`] if two records share a date.
    /// - [`SeriesError::OutOfOrder`] if a record precedes its predecessor.
    pub fn new(records: Vec<DailyRecord>) -> Result<Self, SeriesError> {
        let station_id = records.first().map(|r| r.station_id);

        for (i, r) in records.iter().enumerate() {
            if !(1..=12).contains(&r.month) || !(1..=31).contains(&r.day) {
                return Err(SeriesError::InvalidDate {
                    year: r.year,
                    month: r.month,
                    day: r.day,
                });
            }
            if let Some(expected) = station_id
                && r.station_id != expected
            {
                return Err(SeriesError::MixedStations {
                    expected,
                    found: r.station_id,
                });
            }
            if i > 0 {
                let prev = records[i - 1].date_key();
                let cur = r.date_key();
                if cur == prev {
                    return Err(SeriesError::DuplicateDate {
                        year: r.year,
                        month: r.month,
                        day: r.day,
                    });
                }
                if cur < prev {
                    return Err(SeriesError::OutOfOrder {
                        index: i,
                        year: r.year,
                        month: r.month,
                        day: r.day,
                    });
                }
            }
        }

        Ok(Self {
            station_id,
            records,
        })
    }

    /// Station id, `None` for an empty series.
    pub fn station_id(&self) -> Option<u32> {
        self.station_id
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct hydrological years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.dedup();
        years
    }

    /// Records of one hydrological year. Empty if the year is absent.
    pub fn year_slice(&self, year: i32) -> &[DailyRecord] {
        let start = self.records.partition_point(|r| r.year < year);
        let end = self.records.partition_point(|r| r.year <= year);
        &self.records[start..end]
    }

    /// Values of one variable, in record order. Missing days stay `NaN`.
    pub fn values(&self, variable: Variable) -> Vec<f64> {
        self.records.iter().map(|r| r.value(variable)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, month: u8, day: u8) -> DailyRecord {
        DailyRecord::new(7, year, month, day, 100.0, 1.0, 5.0)
    }

    #[test]
    fn accepts_ordered_records() {
        let s = StationSeries::new(vec![rec(2001, 1, 1), rec(2001, 1, 2), rec(2002, 1, 1)]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.station_id(), Some(7));
        assert_eq!(s.years(), vec![2001, 2002]);
        assert_eq!(s.year_slice(2001).len(), 2);
        assert!(s.year_slice(1999).is_empty());
    }

    #[test]
    fn empty_is_valid() {
        let s = StationSeries::new(Vec::new()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.station_id(), None);
        assert!(s.years().is_empty());
    }

    #[test]
    fn rejects_duplicate() {
        let err = StationSeries::new(vec![rec(2001, 1, 1), rec(2001, 1, 1)]).unwrap_err();
        assert!(matches!(err, SeriesError::DuplicateDate { .. }));
    }

    #[test]
    fn rejects_out_of_order() {
        let err = StationSeries::new(vec![rec(2001, 2, 1), rec(2001, 1, 31)]).unwrap_err();
        assert!(matches!(err, SeriesError::OutOfOrder { index: 1, .. }));
    }

    #[test]
    fn rejects_mixed_stations() {
        let mut other = rec(2001, 1, 2);
        other.station_id = 8;
        let err = StationSeries::new(vec![rec(2001, 1, 1), other]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::MixedStations {
                expected: 7,
                found: 8
            }
        );
    }

    #[test]
    fn rejects_invalid_month() {
        let err = StationSeries::new(vec![rec(2001, 13, 1)]).unwrap_err();
        assert!(matches!(err, SeriesError::InvalidDate { month: 13, .. }));
    }
}
