//! Leap-day normalization onto the 366-slot hydrological year.

use hydrostat_calendar::{SLOTS_PER_YEAR, YearLayout};
use tracing::debug;

use crate::error::SeriesError;
use crate::record::DailyRecord;
use crate::series::StationSeries;

/// Inserts a `NaN` placeholder at every slot that does not exist in a year.
///
/// In practice this is February 29 of common years: after normalization every
/// complete hydrological year holds 366 records, so the day-of-year index of
/// a given calendar date is the same in leap and common years. Existing
/// records are never altered or removed, and a record already present at a
/// missing slot is left alone.
///
/// # Errors
///
/// Returns [`SeriesError::Calendar`] if a record's month/day does not fit the
/// layout (for example day 31 of a 30-day month).
pub fn normalize_leap_days(
    series: &StationSeries,
    layout: &YearLayout,
) -> Result<StationSeries, SeriesError> {
    let Some(station_id) = series.station_id() else {
        return Ok(series.clone());
    };

    let mut out = Vec::with_capacity(series.len() + series.years().len());
    let mut inserted = 0usize;

    for year in series.years() {
        let mut slotted: Vec<(u16, DailyRecord)> = series
            .year_slice(year)
            .iter()
            .map(|r| Ok((layout.slot(r.month, r.day)?, *r)))
            .collect::<Result<_, SeriesError>>()?;

        for slot in 1..=SLOTS_PER_YEAR {
            if layout.slot_exists(year, slot)? || slotted.iter().any(|&(s, _)| s == slot) {
                continue;
            }
            let (month, day) = layout.month_day(slot)?;
            slotted.push((slot, DailyRecord::placeholder(station_id, year, month, day)));
            inserted += 1;
        }

        slotted.sort_by_key(|&(slot, _)| slot);
        out.extend(slotted.into_iter().map(|(_, r)| r));
    }

    debug!(station_id, inserted, "leap-day placeholders inserted");
    StationSeries::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_year(year: i32, layout: &YearLayout) -> Vec<DailyRecord> {
        (1..=SLOTS_PER_YEAR)
            .filter(|&s| layout.slot_exists(year, s).unwrap())
            .map(|s| {
                let (m, d) = layout.month_day(s).unwrap();
                DailyRecord::new(1, year, m, d, s as f64, 1.0, 1.0)
            })
            .collect()
    }

    #[test]
    fn common_year_gets_one_placeholder() {
        let layout = YearLayout::new(11).unwrap();
        let series = StationSeries::new(full_year(2023, &layout)).unwrap();
        assert_eq!(series.len(), 365);

        let normalized = normalize_leap_days(&series, &layout).unwrap();
        assert_eq!(normalized.len(), 366);
        let feb29 = normalized.records()[120];
        assert_eq!((feb29.month, feb29.day), (4, 29));
        assert!(feb29.is_placeholder());
        // March 1 keeps its original value
        assert_eq!(normalized.records()[121].h, 122.0);
    }

    #[test]
    fn leap_year_unchanged() {
        let layout = YearLayout::new(11).unwrap();
        let series = StationSeries::new(full_year(2024, &layout)).unwrap();
        let normalized = normalize_leap_days(&series, &layout).unwrap();
        assert_eq!(normalized, series);
    }

    #[test]
    fn empty_series_passes_through() {
        let layout = YearLayout::new(11).unwrap();
        let series = StationSeries::new(Vec::new()).unwrap();
        assert!(normalize_leap_days(&series, &layout).unwrap().is_empty());
    }
}
