//! Day-of-hydrological-year index.

use hydrostat_calendar::day_of_hydrological_year;
use serde::Serialize;

use crate::record::DailyRecord;
use crate::series::StationSeries;

/// A record paired with its 1-based position inside its hydrological year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexedRecord {
    #[serde(flatten)]
    pub record: DailyRecord,
    pub day_of_hydrological_year: u16,
}

/// A station series with every record indexed by day of hydrological year.
///
/// The index is the running count of records within each year label, so on
/// a leap-normalized series it equals the slot of the 366-day layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexedSeries {
    station_id: Option<u32>,
    records: Vec<IndexedRecord>,
}

impl IndexedSeries {
    pub fn from_series(series: &StationSeries) -> Self {
        let years: Vec<i32> = series.records().iter().map(|r| r.year).collect();
        let index = day_of_hydrological_year(&years);
        let records = series
            .records()
            .iter()
            .zip(index)
            .map(|(&record, day_of_hydrological_year)| IndexedRecord {
                record,
                day_of_hydrological_year,
            })
            .collect();
        Self {
            station_id: series.station_id(),
            records,
        }
    }

    pub fn station_id(&self) -> Option<u32> {
        self.station_id
    }

    pub fn records(&self) -> &[IndexedRecord] {
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
        let mut years: Vec<i32> = self.records.iter().map(|r| r.record.year).collect();
        years.dedup();
        years
    }

    /// Indexed records of one hydrological year. Empty if absent.
    pub fn year(&self, year: i32) -> &[IndexedRecord] {
        let start = self.records.partition_point(|r| r.record.year < year);
        let end = self.records.partition_point(|r| r.record.year <= year);
        &self.records[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_restarts_each_year() {
        let records = vec![
            DailyRecord::new(1, 2001, 12, 30, 1.0, 1.0, 1.0),
            DailyRecord::new(1, 2001, 12, 31, 1.0, 1.0, 1.0),
            DailyRecord::new(1, 2002, 1, 1, 1.0, 1.0, 1.0),
        ];
        let series = StationSeries::new(records).unwrap();
        let indexed = IndexedSeries::from_series(&series);
        let idx: Vec<u16> = indexed
            .records()
            .iter()
            .map(|r| r.day_of_hydrological_year)
            .collect();
        assert_eq!(idx, vec![1, 2, 1]);
        assert_eq!(indexed.year(2002).len(), 1);
        assert_eq!(indexed.years(), vec![2001, 2002]);
    }
}
