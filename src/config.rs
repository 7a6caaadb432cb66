use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::InputArgs;

/// Top-level hydrostat configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct HydrostatConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Station analysis settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Extreme-value settings.
    #[serde(default)]
    pub extremes: ExtremesToml,

    /// Zonation reference point.
    #[serde(default)]
    pub zonation: ZonationToml,
}

impl HydrostatConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Applies command-line input overrides.
    pub fn apply_input_args(&mut self, args: &InputArgs) {
        if let Some(p) = &args.input {
            self.io.input = Some(p.clone());
        }
        if let Some(p) = &args.half_year_input {
            self.io.half_year_input = Some(p.clone());
        }
        if let Some(p) = &args.output {
            self.io.output = Some(p.clone());
        }
        if let Some(id) = args.station_id {
            self.io.station_id = Some(id);
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub half_year_input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub station_id: Option<u32>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            half_year_input: None,
            output: None,
            station_id: None,
            strict: false,
            delimiter: default_delimiter(),
            pretty: true,
        }
    }
}

fn default_delimiter() -> char {
    ','
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// Low-flow threshold, m³/s. SNQ when absent.
    #[serde(default)]
    pub flow_threshold: Option<f64>,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_gap")]
    pub max_gap: usize,
    #[serde(default = "default_bin_width_cm")]
    pub bin_width_cm: u32,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    /// Per-year reduction for monthly statistics: min, mean or max.
    #[serde(default = "default_monthly_aggregate")]
    pub monthly_aggregate: String,
    #[serde(default = "default_start_month")]
    pub start_month: u8,
    #[serde(default = "default_true")]
    pub normalize_leap_days: bool,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            flow_threshold: None,
            min_length: default_min_length(),
            max_gap: default_max_gap(),
            bin_width_cm: default_bin_width_cm(),
            confidence_level: default_confidence_level(),
            monthly_aggregate: default_monthly_aggregate(),
            start_month: default_start_month(),
            normalize_leap_days: true,
        }
    }
}

fn default_min_length() -> usize {
    5
}
fn default_max_gap() -> usize {
    4
}
fn default_bin_width_cm() -> u32 {
    10
}
fn default_confidence_level() -> f64 {
    0.95
}
fn default_monthly_aggregate() -> String {
    "mean".to_string()
}
fn default_start_month() -> u8 {
    11
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtremesToml {
    #[serde(default = "default_families")]
    pub families: Vec<String>,
    /// `"daily"` or `"half_year"`.
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ExtremesToml {
    fn default() -> Self {
        Self {
            families: default_families(),
            source: default_source(),
        }
    }
}

fn default_families() -> Vec<String> {
    ["log_normal", "generalized_extreme_value", "pearson_type_iii", "fisher_tippett"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_source() -> String {
    "daily".to_string()
}

/// Reference point of the zonation; both fields or neither.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ZonationToml {
    pub duration_days: Option<f64>,
    pub stage_cm: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: HydrostatConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.analysis.min_length, 5);
        assert_eq!(cfg.analysis.start_month, 11);
        assert_eq!(cfg.analysis.monthly_aggregate, "mean");
        assert_eq!(cfg.extremes.families.len(), 4);
        assert_eq!(cfg.extremes.source, "daily");
        assert_eq!(cfg.io.delimiter, ',');
        assert!(cfg.zonation.duration_days.is_none());
    }

    #[test]
    fn full_file_parses() {
        let cfg: HydrostatConfig = toml::from_str(
            r#"
            [io]
            input = "data/daily.csv"
            station_id = 150160180

            [analysis]
            flow_threshold = 2.5
            max_gap = 3

            [extremes]
            families = ["gev", "pearson3"]
            source = "half_year"

            [zonation]
            duration_days = 66.0
            stage_cm = 145.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.io.input, Some(PathBuf::from("data/daily.csv")));
        assert_eq!(cfg.analysis.flow_threshold, Some(2.5));
        assert_eq!(cfg.analysis.max_gap, 3);
        assert_eq!(cfg.analysis.bin_width_cm, 10);
        assert_eq!(cfg.extremes.families, vec!["gev", "pearson3"]);
        assert_eq!(cfg.zonation.stage_cm, Some(145.0));
    }

    #[test]
    fn unknown_key_rejected() {
        let err = toml::from_str::<HydrostatConfig>("[analysis]\nthreshold = 1.0\n").unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }
}
