//! Annual maximum and minimum series.

use serde::Serialize;
use tracing::debug;

use crate::half_year::HalfYearRecord;
use crate::record::Variable;
use crate::series::StationSeries;

/// Maximum and minimum of one hydrological year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualExtremes {
    pub year: i32,
    pub max: f64,
    pub min: f64,
}

/// One [`AnnualExtremes`] per hydrological year, ascending by year.
///
/// Years without a usable maximum and minimum are skipped, so every entry
/// is finite.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnnualExtremeSeries {
    years: Vec<AnnualExtremes>,
}

impl AnnualExtremeSeries {
    /// Annual extremes from half-year summaries.
    ///
    /// `max = max(winter_max, summer_max)`, `min = min(winter_min, summer_min)`.
    pub fn from_half_years(records: &[HalfYearRecord]) -> Self {
        let mut years: Vec<AnnualExtremes> = records
            .iter()
            .map(|r| AnnualExtremes {
                year: r.year,
                max: r.year_max(),
                min: r.year_min(),
            })
            .filter(|e| e.max.is_finite() && e.min.is_finite())
            .collect();
        years.sort_by_key(|e| e.year);
        let skipped = records.len() - years.len();
        if skipped > 0 {
            debug!(skipped, "half-year records with missing extremes skipped");
        }
        Self { years }
    }

    /// Annual extremes of one variable of the daily series.
    pub fn from_daily(series: &StationSeries, variable: Variable) -> Self {
        let years = series
            .years()
            .into_iter()
            .filter_map(|year| {
                let values = series.year_slice(year).iter().map(|r| r.value(variable));
                let (min, max) = values
                    .filter(|v| v.is_finite())
                    .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                        None => Some((v, v)),
                        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                    })?;
                Some(AnnualExtremes { year, max, min })
            })
            .collect();
        Self { years }
    }

    pub fn years(&self) -> &[AnnualExtremes] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Annual maxima, ascending by year.
    pub fn maxima(&self) -> Vec<f64> {
        self.years.iter().map(|e| e.max).collect()
    }

    /// Annual minima, ascending by year.
    pub fn minima(&self) -> Vec<f64> {
        self.years.iter().map(|e| e.min).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DailyRecord;

    #[test]
    fn daily_extremes_skip_nan() {
        let series = StationSeries::new(vec![
            DailyRecord::new(1, 2001, 1, 1, 100.0, 5.0, 1.0),
            DailyRecord::new(1, 2001, 1, 2, 140.0, f64::NAN, 1.0),
            DailyRecord::new(1, 2001, 1, 3, 90.0, 2.0, 1.0),
            DailyRecord::new(1, 2002, 1, 1, 80.0, f64::NAN, 1.0),
        ])
        .unwrap();
        let q = AnnualExtremeSeries::from_daily(&series, Variable::Discharge);
        assert_eq!(q.len(), 1);
        assert_eq!(q.years()[0], AnnualExtremes { year: 2001, max: 5.0, min: 2.0 });

        let h = AnnualExtremeSeries::from_daily(&series, Variable::Stage);
        assert_eq!(h.maxima(), vec![140.0, 80.0]);
        assert_eq!(h.minima(), vec![90.0, 80.0]);
    }

    #[test]
    fn half_year_extremes_sorted() {
        let mk = |year, wmax, smax| HalfYearRecord {
            station_id: 1,
            year,
            winter_min: 1.0,
            winter_mean: 2.0,
            winter_max: wmax,
            summer_min: 0.5,
            summer_mean: 2.0,
            summer_max: smax,
            year_mean: 2.0,
        };
        let s = AnnualExtremeSeries::from_half_years(&[
            mk(2003, 10.0, 12.0),
            mk(2001, 30.0, 20.0),
            mk(2002, f64::NAN, 5.0),
        ]);
        assert_eq!(s.maxima(), vec![30.0, 12.0]);
        assert_eq!(s.minima(), vec![0.5, 0.5]);
    }
}
