//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, anyhow, bail};

use hydrostat_analysis::{AnalysisConfig, ExtremeSource};
use hydrostat_extremes::DistributionFamily;
use hydrostat_io::{ReaderConfig, WriterConfig};
use hydrostat_series::MonthlyAggregate;
use hydrostat_zonation::ReferencePoint;

use crate::config::*;

/// Parses family names (canonical or short aliases) in order.
pub fn parse_families(names: &[String]) -> Result<Vec<DistributionFamily>> {
    names
        .iter()
        .map(|n| n.parse::<DistributionFamily>().map_err(|e| anyhow!(e)))
        .collect()
}

/// Parses an extreme source name into the corresponding enum variant.
pub fn parse_source(s: &str) -> Result<ExtremeSource> {
    match s.to_lowercase().as_str() {
        "daily" => Ok(ExtremeSource::Daily),
        "half_year" | "half-year" => Ok(ExtremeSource::HalfYear),
        other => bail!("unknown extreme source: {other:?}"),
    }
}

/// Converts the `[zonation]` table into an optional reference point.
pub fn parse_reference(z: &ZonationToml) -> Result<Option<ReferencePoint>> {
    match (z.duration_days, z.stage_cm) {
        (Some(d), Some(h)) => Ok(Some(ReferencePoint::new(d, h))),
        (None, None) => Ok(None),
        _ => bail!("zonation needs both duration_days and stage_cm, or neither"),
    }
}

/// Builds a validated [`AnalysisConfig`] from the parsed file.
pub fn build_analysis_config(cfg: &HydrostatConfig) -> Result<AnalysisConfig> {
    let a = &cfg.analysis;
    let mut out = AnalysisConfig::new()
        .with_min_length(a.min_length)
        .with_max_gap(a.max_gap)
        .with_bin_width_cm(a.bin_width_cm)
        .with_confidence_level(a.confidence_level)
        .with_monthly_aggregate(
            a.monthly_aggregate
                .parse::<MonthlyAggregate>()
                .map_err(|e| anyhow!(e))?,
        )
        .with_start_month(a.start_month)
        .with_normalize_leap_days(a.normalize_leap_days)
        .with_families(parse_families(&cfg.extremes.families)?)
        .with_extreme_source(parse_source(&cfg.extremes.source)?);
    if let Some(q) = a.flow_threshold {
        out = out.with_flow_threshold(q);
    }
    if let Some(reference) = parse_reference(&cfg.zonation)? {
        out = out.with_reference(reference);
    }
    out.validate().context("invalid analysis configuration")?;
    Ok(out)
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    if !io.delimiter.is_ascii() {
        bail!("delimiter must be an ASCII character, got {:?}", io.delimiter);
    }
    let mut cfg = ReaderConfig::default()
        .with_strict(io.strict)
        .with_delimiter(io.delimiter as u8);
    if let Some(id) = io.station_id {
        cfg = cfg.with_station_id(id);
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoToml) -> WriterConfig {
    WriterConfig::default().with_pretty(io.pretty)
}
