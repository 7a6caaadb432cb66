//! Configuration for station analysis.

use hydrostat_calendar::DEFAULT_START_MONTH;
use hydrostat_duration::DEFAULT_BIN_WIDTH_CM;
use hydrostat_extremes::DistributionFamily;
use hydrostat_series::MonthlyAggregate;
use hydrostat_zonation::ReferencePoint;

use crate::error::AnalysisError;

/// Source of the annual extreme series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtremeSource {
    /// Annual max/min of daily discharge.
    #[default]
    Daily,
    /// Winter/summer half-year summaries.
    HalfYear,
}

/// Configuration for [`StationAnalysis`](crate::StationAnalysis).
///
/// # Example
///
/// ```
/// use hydrostat_analysis::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_flow_threshold(2.4)
///     .with_max_gap(3)
///     .with_bin_width_cm(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    flow_threshold: Option<f64>,
    min_length: usize,
    max_gap: usize,
    bin_width_cm: u32,
    confidence_level: f64,
    monthly_aggregate: MonthlyAggregate,
    start_month: u8,
    normalize_leap_days: bool,
    families: Vec<DistributionFamily>,
    extreme_source: ExtremeSource,
    reference: Option<ReferencePoint>,
}

impl AnalysisConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `flow_threshold = None` (SNQ), `min_length = 5`,
    /// `max_gap = 4`, `bin_width_cm = 10`, `confidence_level = 0.95`,
    /// `monthly_aggregate = Mean`, `start_month = 11`, `normalize_leap_days = true`, all four families,
    /// `extreme_source = Daily`, no zonation reference point.
    pub fn new() -> Self {
        Self {
            flow_threshold: None,
            min_length: 5,
            max_gap: 4,
            bin_width_cm: DEFAULT_BIN_WIDTH_CM,
            confidence_level: 0.95,
            monthly_aggregate: MonthlyAggregate::Mean,
            start_month: DEFAULT_START_MONTH,
            normalize_leap_days: true,
            families: DistributionFamily::ALL.to_vec(),
            extreme_source: ExtremeSource::Daily,
            reference: None,
        }
    }

    // --- Builder methods ---

    /// Sets the low-flow discharge threshold, m³/s.
    pub fn with_flow_threshold(mut self, q: f64) -> Self {
        self.flow_threshold = Some(q);
        self
    }

    /// Sets the minimum low-flow run length, days.
    pub fn with_min_length(mut self, n: usize) -> Self {
        self.min_length = n;
        self
    }

    /// Sets the merge gap for low-flow runs, days.
    pub fn with_max_gap(mut self, n: usize) -> Self {
        self.max_gap = n;
        self
    }

    /// Sets the duration-frequency interval width, cm.
    pub fn with_bin_width_cm(mut self, w: u32) -> Self {
        self.bin_width_cm = w;
        self
    }

    /// Sets the confidence level of the monthly mean intervals.
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    /// Sets the per-year reduction behind the monthly statistics.
    pub fn with_monthly_aggregate(mut self, aggregate: MonthlyAggregate) -> Self {
        self.monthly_aggregate = aggregate;
        self
    }

    /// Sets the first calendar month of the hydrological year.
    pub fn with_start_month(mut self, month: u8) -> Self {
        self.start_month = month;
        self
    }

    /// Sets whether leap-day placeholders are inserted.
    pub fn with_normalize_leap_days(mut self, b: bool) -> Self {
        self.normalize_leap_days = b;
        self
    }

    /// Sets the distribution families to fit.
    pub fn with_families(mut self, families: Vec<DistributionFamily>) -> Self {
        self.families = families;
        self
    }

    /// Sets the annual extreme source.
    pub fn with_extreme_source(mut self, source: ExtremeSource) -> Self {
        self.extreme_source = source;
        self
    }

    /// Sets the zonation reference point.
    pub fn with_reference(mut self, reference: ReferencePoint) -> Self {
        self.reference = Some(reference);
        self
    }

    // --- Accessors ---

    pub fn flow_threshold(&self) -> Option<f64> {
        self.flow_threshold
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    pub fn bin_width_cm(&self) -> u32 {
        self.bin_width_cm
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    pub fn monthly_aggregate(&self) -> MonthlyAggregate {
        self.monthly_aggregate
    }

    pub fn start_month(&self) -> u8 {
        self.start_month
    }

    pub fn normalize_leap_days(&self) -> bool {
        self.normalize_leap_days
    }

    pub fn families(&self) -> &[DistributionFamily] {
        &self.families
    }

    pub fn extreme_source(&self) -> ExtremeSource {
        self.extreme_source
    }

    pub fn reference(&self) -> Option<ReferencePoint> {
        self.reference
    }

    /// Validates this configuration.
    ///
    /// Checks that a configured threshold is finite, `min_length >= 1`,
    /// `bin_width_cm >= 1`, `confidence_level` is in (0, 1), `start_month`
    /// is in 1..=12 and the family list is non-empty without duplicates.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let invalid = |reason: String| Err(AnalysisError::InvalidConfig { reason });

        if let Some(q) = self.flow_threshold
            && !q.is_finite()
        {
            return invalid(format!("flow_threshold must be finite, got {q}"));
        }
        if self.min_length < 1 {
            return invalid(format!("min_length must be >= 1, got {}", self.min_length));
        }
        if self.bin_width_cm < 1 {
            return invalid(format!("bin_width_cm must be >= 1, got {}", self.bin_width_cm));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return invalid(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            ));
        }
        if !(1..=12).contains(&self.start_month) {
            return invalid(format!("start_month must be in 1..=12, got {}", self.start_month));
        }
        if self.families.is_empty() {
            return invalid("families must not be empty".to_string());
        }
        for (i, f) in self.families.iter().enumerate() {
            if self.families[..i].contains(f) {
                return invalid(format!("duplicate family {f}"));
            }
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AnalysisConfig::new();
        assert_eq!(cfg.flow_threshold(), None);
        assert_eq!(cfg.min_length(), 5);
        assert_eq!(cfg.max_gap(), 4);
        assert_eq!(cfg.bin_width_cm(), 10);
        assert!((cfg.confidence_level() - 0.95).abs() < f64::EPSILON);
        assert_eq!(cfg.monthly_aggregate(), MonthlyAggregate::Mean);
        assert_eq!(cfg.start_month(), 11);
        assert!(cfg.normalize_leap_days());
        assert_eq!(cfg.families().len(), 4);
        assert_eq!(cfg.extreme_source(), ExtremeSource::Daily);
        assert!(cfg.reference().is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = AnalysisConfig::new()
            .with_flow_threshold(1.5)
            .with_min_length(7)
            .with_max_gap(2)
            .with_bin_width_cm(5)
            .with_confidence_level(0.9)
            .with_monthly_aggregate(MonthlyAggregate::Max)
            .with_start_month(10)
            .with_normalize_leap_days(false)
            .with_families(vec![DistributionFamily::GeneralizedExtremeValue])
            .with_extreme_source(ExtremeSource::HalfYear)
            .with_reference(ReferencePoint::new(66.0, 145.0));
        assert_eq!(cfg.flow_threshold(), Some(1.5));
        assert_eq!(cfg.min_length(), 7);
        assert_eq!(cfg.monthly_aggregate(), MonthlyAggregate::Max);
        assert_eq!(cfg.start_month(), 10);
        assert_eq!(cfg.families(), &[DistributionFamily::GeneralizedExtremeValue]);
        assert_eq!(cfg.reference(), Some(ReferencePoint::new(66.0, 145.0)));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_confidence() {
        let err = AnalysisConfig::new().with_confidence_level(1.0).validate().unwrap_err();
        assert!(err.to_string().contains("confidence_level"));
    }

    #[test]
    fn rejects_start_month() {
        assert!(AnalysisConfig::new().with_start_month(13).validate().is_err());
    }

    #[test]
    fn rejects_duplicate_family() {
        let cfg = AnalysisConfig::new().with_families(vec![
            DistributionFamily::LogNormal,
            DistributionFamily::LogNormal,
        ]);
        assert!(cfg.validate().unwrap_err().to_string().contains("duplicate family"));
    }

    #[test]
    fn rejects_non_finite_threshold() {
        assert!(AnalysisConfig::new().with_flow_threshold(f64::NAN).validate().is_err());
    }
}
