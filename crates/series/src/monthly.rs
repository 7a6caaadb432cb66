//! Monthly statistics with a normal confidence interval of the mean.
//!
//! Each (year, month) is first reduced to one aggregate value, so the
//! interval is computed across years rather than across autocorrelated days.

use std::collections::BTreeMap;
use std::fmt;

use hydrostat_stats::{Summary, finite_sorted, mean, summarize};
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::SeriesError;
use crate::record::Variable;
use crate::series::StationSeries;

/// Reduction applied to the daily values of one month of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthlyAggregate {
    Min,
    #[default]
    Mean,
    Max,
}

impl MonthlyAggregate {
    /// Reduces `values`, ignoring non-finite entries. `None` if none remain.
    fn reduce(self, values: &[f64]) -> Option<f64> {
        let sorted = finite_sorted(values);
        match self {
            MonthlyAggregate::Min => sorted.first().copied(),
            MonthlyAggregate::Max => sorted.last().copied(),
            MonthlyAggregate::Mean if sorted.is_empty() => None,
            MonthlyAggregate::Mean => Some(mean(&sorted)),
        }
    }
}

impl fmt::Display for MonthlyAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MonthlyAggregate::Min => "min",
            MonthlyAggregate::Mean => "mean",
            MonthlyAggregate::Max => "max",
        })
    }
}

impl std::str::FromStr for MonthlyAggregate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" => Ok(MonthlyAggregate::Min),
            "mean" => Ok(MonthlyAggregate::Mean),
            "max" => Ok(MonthlyAggregate::Max),
            other => Err(format!("unknown monthly aggregate: {other:?}")),
        }
    }
}

/// Summary of one hydrological month over all years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyStats {
    /// Hydrological month label.
    pub month: u8,
    /// Per-year reduction the summary is taken over.
    pub aggregate: MonthlyAggregate,
    /// Summary of the per-year aggregates; `count` is the number of years.
    #[serde(flatten)]
    pub summary: Summary,
    /// Lower bound of the confidence interval of the mean, clipped at zero.
    /// `None` with fewer than two years.
    pub ci_lower: Option<f64>,
    pub ci_upper: Option<f64>,
}

/// Statistics of `variable` per hydrological month, ascending by month.
///
/// Every (year, month) with at least one finite value contributes one
/// `aggregate` value. The interval is `mean ± z·sd/√n` over those values,
/// with `n` the number of years and `z` the two-sided standard normal
/// quantile for `confidence_level`. Months without finite values are omitted.
///
/// # Errors
///
/// Returns [`SeriesError::InvalidConfidenceLevel`] unless `0 < confidence_level < 1`.
pub fn monthly_statistics(
    series: &StationSeries,
    variable: Variable,
    aggregate: MonthlyAggregate,
    confidence_level: f64,
) -> Result<Vec<MonthlyStats>, SeriesError> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(SeriesError::InvalidConfidenceLevel {
            level: confidence_level,
        });
    }
    let z = Normal::standard().inverse_cdf((1.0 + confidence_level) / 2.0);

    let mut by_year_month: BTreeMap<(u8, i32), Vec<f64>> = BTreeMap::new();
    for r in series.records() {
        by_year_month
            .entry((r.month, r.year))
            .or_default()
            .push(r.value(variable));
    }
    let mut by_month: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for ((month, _), values) in by_year_month {
        if let Some(v) = aggregate.reduce(&values) {
            by_month.entry(month).or_default().push(v);
        }
    }

    Ok(by_month
        .into_iter()
        .filter_map(|(month, values)| {
            let summary = summarize(&values)?;
            let (ci_lower, ci_upper) = if summary.count >= 2 {
                let half = z * summary.sd / (summary.count as f64).sqrt();
                (Some((summary.mean - half).max(0.0)), Some(summary.mean + half))
            } else {
                (None, None)
            };
            Some(MonthlyStats {
                month,
                aggregate,
                summary,
                ci_lower,
                ci_upper,
            })
        })
        .collect())
}
