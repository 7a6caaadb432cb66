//! Characteristic values of a gauge (WW/SW/ZW/NW, WS/SS/ZS/NS, WN/SN/ZN/NN).
//!
//! Polish hydrological convention: the first letter names the statistic
//! taken across years (W highest, S mean, Z median, N lowest), the second
//! letter the annual quantity it is taken over (W annual maxima, S annual
//! means, N annual minima). `SNQ` (mean of annual minimum discharges) is the
//! customary low-flow threshold.

use hydrostat_stats::{finite_sorted, mean, median};
use serde::Serialize;

use crate::half_year::HalfYearRecord;
use crate::record::Variable;
use crate::series::StationSeries;

/// Highest, mean, median and lowest of one set of annual values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CharacteristicLevel {
    pub highest: f64,
    pub mean: f64,
    pub median: f64,
    pub lowest: f64,
}

impl CharacteristicLevel {
    fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = finite_sorted(values);
        Some(Self {
            highest: *sorted.last()?,
            mean: mean(&sorted),
            median: median(&sorted),
            lowest: *sorted.first()?,
        })
    }
}

/// Characteristic values of one variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CharacteristicValues {
    pub variable: Variable,
    /// Number of years contributing.
    pub years: usize,
    /// Over annual maxima: WW, SW, ZW, NW.
    pub maxima: CharacteristicLevel,
    /// Over annual means: WS, SS, ZS, NS.
    pub means: CharacteristicLevel,
    /// Over annual minima: WN, SN, ZN, NN.
    pub minima: CharacteristicLevel,
}

impl CharacteristicValues {
    /// Mean of annual minima (SN). For discharge this is SNQ.
    pub fn mean_of_minima(&self) -> f64 {
        self.minima.mean
    }

    /// Characteristic discharge values from half-year summaries.
    ///
    /// Half-year records carry discharge only, so the result is always
    /// labelled [`Variable::Discharge`]. Records with any missing field are
    /// skipped. The maxima and minima sets
    /// pool the winter and summer columns; their median is the mean of the
    /// two column medians.
    pub fn from_half_years(records: &[HalfYearRecord]) -> Option<Self> {
        let complete: Vec<&HalfYearRecord> = records
            .iter()
            .filter(|r| {
                [
                    r.winter_min,
                    r.winter_mean,
                    r.winter_max,
                    r.summer_min,
                    r.summer_mean,
                    r.summer_max,
                    r.year_mean,
                ]
                .iter()
                .all(|v| v.is_finite())
            })
            .collect();

        let pooled = |winter: fn(&HalfYearRecord) -> f64, summer: fn(&HalfYearRecord) -> f64| {
            let w: Vec<f64> = complete.iter().map(|r| winter(r)).collect();
            let s: Vec<f64> = complete.iter().map(|r| summer(r)).collect();
            let mut level = CharacteristicLevel::from_values(&[w.as_slice(), s.as_slice()].concat())?;
            level.median = (median(&finite_sorted(&w)) + median(&finite_sorted(&s))) / 2.0;
            Some(level)
        };

        let maxima = pooled(|r| r.winter_max, |r| r.summer_max)?;
        let minima = pooled(|r| r.winter_min, |r| r.summer_min)?;
        let year_means: Vec<f64> = complete.iter().map(|r| r.year_mean).collect();
        let means = CharacteristicLevel::from_values(&year_means)?;

        Some(Self {
            variable: Variable::Discharge,
            years: complete.len(),
            maxima,
            means,
            minima,
        })
    }
}

/// Characteristic values of one variable of the daily series.
///
/// Annual maximum, mean and minimum are taken over the finite values of each
/// hydrological year; years with none are skipped. Returns `None` when no
/// year contributes.
pub fn characteristic_values(series: &StationSeries, variable: Variable) -> Option<CharacteristicValues> {
    let mut maxima = Vec::new();
    let mut means = Vec::new();
    let mut minima = Vec::new();

    for year in series.years() {
        let values: Vec<f64> = series
            .year_slice(year)
            .iter()
            .map(|r| r.value(variable))
            .collect();
        let sorted = finite_sorted(&values);
        let (Some(&lo), Some(&hi)) = (sorted.first(), sorted.last()) else {
            continue;
        };
        maxima.push(hi);
        means.push(mean(&sorted));
        minima.push(lo);
    }

    Some(CharacteristicValues {
        variable,
        years: maxima.len(),
        maxima: CharacteristicLevel::from_values(&maxima)?,
        means: CharacteristicLevel::from_values(&means)?,
        minima: CharacteristicLevel::from_values(&minima)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DailyRecord;
    use approx::assert_relative_eq;

    #[test]
    fn daily_characteristics() {
        // 2001: Q 1,2,3; 2002: Q 4,5,9; 2003: Q 2,2,2
        let mut records = Vec::new();
        for (year, qs) in [(2001, [1.0, 2.0, 3.0]), (2002, [4.0, 5.0, 9.0]), (2003, [2.0, 2.0, 2.0])] {
            for (i, q) in qs.iter().enumerate() {
                records.push(DailyRecord::new(1, year, 1, i as u8 + 1, 100.0, *q, 1.0));
            }
        }
        let series = StationSeries::new(records).unwrap();
        let cv = characteristic_values(&series, Variable::Discharge).unwrap();

        assert_eq!(cv.years, 3);
        assert_relative_eq!(cv.maxima.highest, 9.0);
        assert_relative_eq!(cv.maxima.mean, 14.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(cv.maxima.median, 3.0);
        assert_relative_eq!(cv.maxima.lowest, 2.0);
        assert_relative_eq!(cv.means.highest, 6.0);
        assert_relative_eq!(cv.minima.lowest, 1.0);
        assert_relative_eq!(cv.mean_of_minima(), 7.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_series_has_no_characteristics() {
        let series = StationSeries::new(Vec::new()).unwrap();
        assert!(characteristic_values(&series, Variable::Discharge).is_none());
    }

    #[test]
    fn half_year_characteristics_pool_columns() {
        let mk = |year, wmin, wmax, smin, smax, ym| HalfYearRecord {
            station_id: 1,
            year,
            winter_min: wmin,
            winter_mean: 5.0,
            winter_max: wmax,
            summer_min: smin,
            summer_mean: 5.0,
            summer_max: smax,
            year_mean: ym,
        };
        let records = [
            mk(2001, 1.0, 10.0, 2.0, 20.0, 5.0),
            mk(2002, 3.0, 30.0, 4.0, 40.0, 7.0),
            mk(2003, f64::NAN, 99.0, 0.1, 99.0, 9.0),
        ];
        let cv = CharacteristicValues::from_half_years(&records).unwrap();
        assert_eq!(cv.years, 2);
        assert_relative_eq!(cv.maxima.highest, 40.0);
        assert_relative_eq!(cv.maxima.mean, 25.0);
        // column medians 20 and 30
        assert_relative_eq!(cv.maxima.median, 25.0);
        assert_relative_eq!(cv.minima.mean, 2.5);
        assert_relative_eq!(cv.means.mean, 6.0);
    }
}
