//! Statistics per day of the hydrological year across years.

use std::collections::BTreeMap;

use hydrostat_stats::{Summary, summarize};
use serde::Serialize;

use crate::index::IndexedSeries;
use crate::record::Variable;

/// Summary of one day of the hydrological year over all years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayOfYearStats {
    pub day_of_hydrological_year: u16,
    #[serde(flatten)]
    pub summary: Summary,
}

/// Max/mean/median/min/count of `variable` for every day of the
/// hydrological year, ascending by day. Days with no finite value in any
/// year are omitted.
pub fn daily_statistics(series: &IndexedSeries, variable: Variable) -> Vec<DayOfYearStats> {
    let mut by_day: BTreeMap<u16, Vec<f64>> = BTreeMap::new();
    for r in series.records() {
        by_day
            .entry(r.day_of_hydrological_year)
            .or_default()
            .push(r.record.value(variable));
    }
    by_day
        .into_iter()
        .filter_map(|(day, values)| {
            Some(DayOfYearStats {
                day_of_hydrological_year: day,
                summary: summarize(&values)?,
            })
        })
        .collect()
}
