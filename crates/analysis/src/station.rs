//! Station analysis facade.

use hydrostat_calendar::YearLayout;
use hydrostat_duration::{DurationError, DurationFrequencyTable, build_duration_frequency};
use hydrostat_extremes::{DistributionFamily, empirical_plotting_positions, fit};
use hydrostat_lowflow::{LowFlowConfig, LowFlowSequence, detect_low_flow_sequences};
use hydrostat_series::{
    AnnualExtremeSeries, CharacteristicValues, DayOfYearStats, HalfYearRecord, IndexedSeries,
    MonthlyStats, StationSeries, Variable, characteristic_values, daily_statistics,
    monthly_statistics, normalize_leap_days,
};
use hydrostat_zonation::{ReferencePoint, ZoneBoundaries, solve_zonation};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::{AnalysisConfig, ExtremeSource};
use crate::error::AnalysisError;
use crate::report::{AnalysisReport, FamilyFit, FitOutcome, YearLowFlow};

/// One station's series prepared for analysis.
///
/// Construction validates the configuration, normalizes leap days (when
/// enabled) and indexes the series by day of hydrological year. All
/// operations are read-only and may be called in any order.
#[derive(Debug, Clone)]
pub struct StationAnalysis {
    config: AnalysisConfig,
    series: StationSeries,
    indexed: IndexedSeries,
    half_years: Vec<HalfYearRecord>,
}

impl StationAnalysis {
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidConfig`] if `config` fails validation.
    /// - [`AnalysisError::DataGap`] if the series is empty.
    /// - [`AnalysisError::Series`] if a record does not fit the year layout.
    pub fn new(series: StationSeries, config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        if series.is_empty() {
            return Err(AnalysisError::DataGap {
                station: "-".to_string(),
                period: "the whole record".to_string(),
            });
        }
        let series = if config.normalize_leap_days() {
            let layout = YearLayout::new(config.start_month())?;
            normalize_leap_days(&series, &layout)?
        } else {
            series
        };
        let indexed = IndexedSeries::from_series(&series);
        info!(
            station_id = series.station_id(),
            records = series.len(),
            years = series.years().len(),
            "station series prepared"
        );
        Ok(Self {
            config,
            series,
            indexed,
            half_years: Vec::new(),
        })
    }

    /// Attaches half-year summary records of the same station.
    pub fn with_half_years(mut self, mut records: Vec<HalfYearRecord>) -> Self {
        records.sort_by_key(|r| r.year);
        self.half_years = records;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The (normalized) daily series.
    pub fn series(&self) -> &StationSeries {
        &self.series
    }

    fn station_label(&self) -> String {
        self.series
            .station_id()
            .map_or_else(|| "-".to_string(), |id| id.to_string())
    }

    /// Stage duration-frequency table.
    #[tracing::instrument(skip(self))]
    pub fn duration_frequency(&self) -> Result<DurationFrequencyTable, AnalysisError> {
        Ok(build_duration_frequency(&self.series, self.config.bin_width_cm())?)
    }

    /// Zone boundaries from the duration-frequency table.
    #[tracing::instrument(skip(self))]
    pub fn zonation(&self, reference: ReferencePoint) -> Result<ZoneBoundaries, AnalysisError> {
        let table = self.duration_frequency()?;
        Ok(solve_zonation(&table, reference)?)
    }

    /// Characteristic values of `variable`.
    ///
    /// Discharge comes from the half-year records when they are the
    /// configured extreme source and loaded. Every other case uses the
    /// daily series.
    pub fn characteristic_values(&self, variable: Variable) -> Option<CharacteristicValues> {
        let from_half_years = variable == Variable::Discharge
            && self.config.extreme_source() == ExtremeSource::HalfYear
            && !self.half_years.is_empty();
        if from_half_years {
            CharacteristicValues::from_half_years(&self.half_years)
        } else {
            characteristic_values(&self.series, variable)
        }
    }

    /// The configured low-flow threshold, or SNQ when none is configured.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingThreshold`] if SNQ cannot be computed.
    pub fn flow_threshold(&self) -> Result<f64, AnalysisError> {
        if let Some(q) = self.config.flow_threshold() {
            return Ok(q);
        }
        let snq = self
            .characteristic_values(Variable::Discharge)
            .map(|cv| cv.mean_of_minima())
            .ok_or(AnalysisError::MissingThreshold)?;
        info!(snq, "flow threshold defaults to SNQ");
        Ok(snq)
    }

    fn low_flow_config(&self) -> Result<LowFlowConfig, AnalysisError> {
        Ok(LowFlowConfig::new(self.flow_threshold()?)
            .with_min_length(self.config.min_length())
            .with_max_gap(self.config.max_gap()))
    }

    /// Low-flow sequences of one hydrological year.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataGap`] if the year has no records.
    #[tracing::instrument(skip(self))]
    pub fn low_flow_sequences(&self, year: i32) -> Result<Vec<LowFlowSequence>, AnalysisError> {
        let records = self.indexed.year(year);
        if records.is_empty() {
            return Err(AnalysisError::DataGap {
                station: self.station_label(),
                period: format!("hydrological year {year}"),
            });
        }
        Ok(detect_low_flow_sequences(records, &self.low_flow_config()?)?)
    }

    /// Low-flow sequences of every year in the series.
    #[tracing::instrument(skip(self))]
    pub fn low_flow_by_year(&self) -> Result<Vec<YearLowFlow>, AnalysisError> {
        let config = self.low_flow_config()?;
        self.indexed
            .years()
            .into_iter()
            .map(|year| {
                let sequences = detect_low_flow_sequences(self.indexed.year(year), &config)?;
                Ok(YearLowFlow {
                    year,
                    sequences: sequences.iter().map(LowFlowSequence::summary).collect(),
                })
            })
            .collect()
    }

    /// Annual maxima and minima of discharge from the configured source.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataGap`] if the half-year source is selected
    /// but no half-year records are attached.
    pub fn annual_extremes(&self) -> Result<AnnualExtremeSeries, AnalysisError> {
        match self.config.extreme_source() {
            ExtremeSource::Daily => Ok(AnnualExtremeSeries::from_daily(
                &self.series,
                Variable::Discharge,
            )),
            ExtremeSource::HalfYear if self.half_years.is_empty() => Err(AnalysisError::DataGap {
                station: self.station_label(),
                period: "half-year records".to_string(),
            }),
            ExtremeSource::HalfYear => Ok(AnnualExtremeSeries::from_half_years(&self.half_years)),
        }
    }

    /// Fits every configured family in parallel.
    ///
    /// Each family's failure is kept in its [`FamilyFit::outcome`], so one
    /// family failing does not hide the others.
    #[tracing::instrument(skip(self))]
    pub fn fit_families(&self) -> Result<Vec<FamilyFit>, AnalysisError> {
        let extremes = self.annual_extremes()?;
        Ok(fit_all(self.config.families(), &extremes))
    }

    /// Per-day-of-year statistics of `variable`.
    pub fn daily_statistics(&self, variable: Variable) -> Vec<DayOfYearStats> {
        daily_statistics(&self.indexed, variable)
    }

    /// Per-month statistics of `variable` over the configured per-year
    /// aggregate, with confidence intervals across years.
    pub fn monthly_statistics(&self, variable: Variable) -> Result<Vec<MonthlyStats>, AnalysisError> {
        Ok(monthly_statistics(
            &self.series,
            variable,
            self.config.monthly_aggregate(),
            self.config.confidence_level(),
        )?)
    }

    /// Runs every analysis and collects the results.
    ///
    /// A series without stage skips the duration table and zonation, and a
    /// missing threshold skips low flow; both are logged. Other failures
    /// are returned.
    #[tracing::instrument(skip(self), fields(station = %self.station_label()))]
    pub fn run(&self) -> Result<AnalysisReport, AnalysisError> {
        let duration_frequency = match self.duration_frequency() {
            Ok(table) => Some(table),
            Err(AnalysisError::Duration(DurationError::NoStageData)) => {
                warn!("no stage data, skipping duration-frequency table and zonation");
                None
            }
            Err(e) => return Err(e),
        };
        let zonation = match (&duration_frequency, self.config.reference()) {
            (Some(table), Some(reference)) => Some(solve_zonation(table, reference)?),
            _ => None,
        };

        let (flow_threshold, low_flow) = match self.flow_threshold() {
            Ok(q) => (Some(q), self.low_flow_by_year()?),
            Err(AnalysisError::MissingThreshold) => {
                warn!("no discharge data, skipping low-flow detection");
                (None, Vec::new())
            }
            Err(e) => return Err(e),
        };

        let annual_extremes = self.annual_extremes()?;
        let extremes = fit_all(self.config.families(), &annual_extremes)
            .iter()
            .map(FamilyFit::report)
            .collect();

        Ok(AnalysisReport {
            station_id: self.series.station_id(),
            years: self.series.years(),
            n_records: self.series.len(),
            characteristic_discharge: self.characteristic_values(Variable::Discharge),
            characteristic_stage: self.characteristic_values(Variable::Stage),
            duration_frequency,
            zonation,
            flow_threshold,
            low_flow,
            annual_extremes,
            extremes,
            daily_statistics: self.daily_statistics(Variable::Discharge),
            monthly_statistics: self.monthly_statistics(Variable::Discharge)?,
        })
    }
}

fn fit_all(families: &[DistributionFamily], extremes: &AnnualExtremeSeries) -> Vec<FamilyFit> {
    families
        .par_iter()
        .map(|&family| {
            let sample = family.sample(extremes);
            let outcome = fit(family, &sample).map(|fitted| FitOutcome {
                goodness_of_fit: fitted.goodness_of_fit(&sample),
                plotting_positions: empirical_plotting_positions(&sample, family.role()),
                fitted,
            });
            match &outcome {
                Ok(o) => info!(
                    %family,
                    n = sample.len(),
                    p_value = o.goodness_of_fit.map(|g| g.p_value),
                    "family fitted"
                ),
                Err(e) => warn!(%family, n = sample.len(), error = %e, "family fit failed"),
            }
            FamilyFit {
                family,
                sample_size: sample.len(),
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydrostat_series::DailyRecord;

    fn two_years() -> StationSeries {
        let mut records = Vec::new();
        for year in [2001, 2002] {
            for i in 0..60u8 {
                let q = if (20..32).contains(&i) { 1.0 } else { 6.0 + f64::from(i % 5) };
                records.push(DailyRecord::new(9, year, i / 30 + 1, i % 30 + 1, 100.0 + f64::from(i), q, 5.0));
            }
        }
        StationSeries::new(records).unwrap()
    }

    fn analysis(config: AnalysisConfig) -> StationAnalysis {
        StationAnalysis::new(two_years(), config.with_normalize_leap_days(false)).unwrap()
    }

    #[test]
    fn empty_series_is_data_gap() {
        let err = StationAnalysis::new(StationSeries::default(), AnalysisConfig::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::DataGap { .. }));
    }

    #[test]
    fn missing_year_is_data_gap() {
        let a = analysis(AnalysisConfig::new().with_flow_threshold(2.0));
        let err = a.low_flow_sequences(1999).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::DataGap {
                station: "9".to_string(),
                period: "hydrological year 1999".to_string(),
            }
        );
    }

    #[test]
    fn low_flow_with_configured_threshold() {
        let a = analysis(AnalysisConfig::new().with_flow_threshold(2.0));
        let seqs = a.low_flow_sequences(2001).unwrap();
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].low_flow_days(), 12);
    }

    #[test]
    fn threshold_defaults_to_snq() {
        let a = analysis(AnalysisConfig::new());
        assert_eq!(a.flow_threshold().unwrap(), 1.0);
        // Q < SNQ never holds when SNQ equals the minimum
        assert!(a.low_flow_sequences(2001).unwrap().is_empty());
    }

    #[test]
    fn half_year_source_without_records() {
        let a = analysis(AnalysisConfig::new().with_extreme_source(ExtremeSource::HalfYear));
        assert!(matches!(a.annual_extremes(), Err(AnalysisError::DataGap { .. })));
    }

    #[test]
    fn short_record_fails_per_family() {
        let a = analysis(AnalysisConfig::new());
        let fits = a.fit_families().unwrap();
        assert_eq!(fits.len(), 4);
        assert!(fits.iter().all(|f| f.outcome.is_err() && f.sample_size == 2));
        assert!(fits[0].report().error.unwrap().contains("insufficient sample"));
    }
}
