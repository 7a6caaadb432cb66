//! Result values of a station analysis.

use hydrostat_duration::DurationFrequencyTable;
use hydrostat_extremes::{
    DistributionFamily, FitError, FittedDistribution, GoodnessOfFit, PlottingPosition, TailRole,
};
use hydrostat_lowflow::LowFlowSummary;
use hydrostat_series::{AnnualExtremeSeries, CharacteristicValues, DayOfYearStats, MonthlyStats};
use hydrostat_zonation::ZoneBoundaries;
use serde::Serialize;

/// A successful family fit with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub fitted: FittedDistribution,
    pub goodness_of_fit: Option<GoodnessOfFit>,
    pub plotting_positions: Vec<PlottingPosition>,
}

/// Result of fitting one family; failures stay local to the family.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyFit {
    pub family: DistributionFamily,
    pub sample_size: usize,
    pub outcome: Result<FitOutcome, FitError>,
}

impl FamilyFit {
    pub fn report(&self) -> FamilyReport {
        let (fitted, goodness_of_fit, plotting_positions, error) = match &self.outcome {
            Ok(o) => (
                Some(o.fitted.clone()),
                o.goodness_of_fit,
                o.plotting_positions.clone(),
                None,
            ),
            Err(e) => (None, None, Vec::new(), Some(e.to_string())),
        };
        FamilyReport {
            family: self.family,
            role: self.family.role(),
            sample_size: self.sample_size,
            fitted,
            goodness_of_fit,
            plotting_positions,
            error,
        }
    }
}

/// Serializable form of a [`FamilyFit`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyReport {
    pub family: DistributionFamily,
    pub role: TailRole,
    pub sample_size: usize,
    pub fitted: Option<FittedDistribution>,
    pub goodness_of_fit: Option<GoodnessOfFit>,
    pub plotting_positions: Vec<PlottingPosition>,
    pub error: Option<String>,
}

/// Low-flow sequences of one hydrological year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearLowFlow {
    pub year: i32,
    pub sequences: Vec<LowFlowSummary>,
}

/// Everything [`StationAnalysis::run`](crate::StationAnalysis::run) produces.
///
/// Parts that need data the series lacks (stage for the duration table, a
/// threshold for low flow, a reference point for zonation) are `None` or
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub station_id: Option<u32>,
    pub years: Vec<i32>,
    pub n_records: usize,
    pub characteristic_discharge: Option<CharacteristicValues>,
    pub characteristic_stage: Option<CharacteristicValues>,
    pub duration_frequency: Option<DurationFrequencyTable>,
    pub zonation: Option<ZoneBoundaries>,
    pub flow_threshold: Option<f64>,
    pub low_flow: Vec<YearLowFlow>,
    pub annual_extremes: AnnualExtremeSeries,
    pub extremes: Vec<FamilyReport>,
    pub daily_statistics: Vec<DayOfYearStats>,
    pub monthly_statistics: Vec<MonthlyStats>,
}
