//! Analyse command: full station analysis to a JSON report.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span, warn};

use hydrostat_analysis::{AnalysisReport, StationAnalysis};
use hydrostat_io::{LoadedSeries, MalformedRecord, read_daily_csv, read_half_year_csv, write_json};
use hydrostat_series::HalfYearRecord;

use crate::cli::AnalyseArgs;
use crate::config::HydrostatConfig;
use crate::convert;

/// Report plus the input rows that were dropped while reading.
#[derive(Serialize)]
struct AnalyseOutput<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    dropped_records: &'a [MalformedRecord],
}

/// Files read for one station.
pub(crate) struct StationInputs {
    pub input: PathBuf,
    pub daily: LoadedSeries,
    pub half_years: Vec<HalfYearRecord>,
    pub dropped: Vec<MalformedRecord>,
}

/// Reads the daily CSV and, when configured, the half-year CSV.
pub(crate) fn read_inputs(config: &HydrostatConfig) -> Result<StationInputs> {
    let input = config
        .io
        .input
        .clone()
        .ok_or_else(|| anyhow::anyhow!("no input path: set [io].input in config or use --input"))?;
    let reader_cfg = convert::build_reader_config(&config.io)?;

    info!(path = %input.display(), "reading daily records");
    let daily = read_daily_csv(&input, &reader_cfg)
        .with_context(|| format!("failed to read daily CSV: {}", input.display()))?;
    if daily.series.is_empty() {
        bail!("no valid daily records in {}", input.display());
    }
    let mut dropped = daily.malformed.clone();
    if !dropped.is_empty() {
        warn!(count = dropped.len(), "malformed daily records dropped");
    }

    let half_years = match &config.io.half_year_input {
        Some(path) => {
            info!(path = %path.display(), "reading half-year records");
            let loaded = read_half_year_csv(path, &reader_cfg)
                .with_context(|| format!("failed to read half-year CSV: {}", path.display()))?;
            dropped.extend(loaded.malformed);
            loaded.records
        }
        None => Vec::new(),
    };

    Ok(StationInputs {
        input,
        daily,
        half_years,
        dropped,
    })
}

/// Run the full analysis pipeline.
pub fn run(args: AnalyseArgs) -> Result<()> {
    let _cmd = info_span!("analyse").entered();
    // 1. Load project TOML and apply overrides
    let mut config = HydrostatConfig::load(&args.input.config)?;
    config.apply_input_args(&args.input);
    if let Some(q) = args.flow_threshold {
        config.analysis.flow_threshold = Some(q);
    }
    if let Some(reference) = &args.reference {
        let [days, cm] = reference.as_slice() else {
            bail!("--reference takes DAYS,CM, got {} value(s)", reference.len());
        };
        config.zonation.duration_days = Some(*days);
        config.zonation.stage_cm = Some(*cm);
    }
    let analysis_cfg = convert::build_analysis_config(&config)?;

    // 2. Read inputs
    let inputs = read_inputs(&config)?;

    // 3. Analyse
    let analysis = StationAnalysis::new(inputs.daily.series, analysis_cfg)
        .context("failed to prepare station series")?
        .with_half_years(inputs.half_years);
    let report = analysis.run().context("station analysis failed")?;
    info!(
        station_id = report.station_id,
        years = report.years.len(),
        flow_threshold = report.flow_threshold,
        "analysis complete"
    );

    // 4. Write report
    let output = config
        .io
        .output
        .clone()
        .unwrap_or_else(|| inputs.input.with_extension("report.json"));
    let out = AnalyseOutput {
        report: &report,
        dropped_records: &inputs.dropped,
    };
    write_json(&output, &out, &convert::build_writer_config(&config.io))
        .with_context(|| format!("failed to write report: {}", output.display()))?;
    info!(path = %output.display(), "report written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;
    use std::path::Path;

    use super::*;
    use crate::cli::InputArgs;

    /// Ten hydrological years of 12 x 28 days with one peak and one trough each.
    fn write_daily(dir: &Path) -> PathBuf {
        let mut csv = String::from("station_id,year,month,day,H,Q,T\n");
        for year in 2001..2011 {
            for month in 1..=12 {
                for day in 1..=28 {
                    let mut q = 4.0 + f64::from(month % 3) + 0.01 * f64::from(day);
                    if month == 4 && day == 10 {
                        q = 30.0 + f64::from((year * 7) % 11);
                    }
                    if month == 8 && (5..15).contains(&day) {
                        q = 0.5 + 0.1 * f64::from(year % 4);
                    }
                    writeln!(csv, "42,{year},{month},{day},{},{q},7.0", 60.0 + 5.0 * q).unwrap();
                }
            }
        }
        csv.push_str("42,2011,1,1,oops,1.0,1.0\n");
        let path = dir.join("daily.csv");
        std::fs::write(&path, csv).unwrap();
        path
    }

    #[test]
    fn read_inputs_reports_dropped_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = HydrostatConfig::default();
        config.io.input = Some(write_daily(dir.path()));

        let inputs = read_inputs(&config).unwrap();
        assert_eq!(inputs.daily.series.len(), 10 * 12 * 28);
        assert_eq!(inputs.dropped.len(), 1);
        assert!(inputs.half_years.is_empty());
    }

    #[test]
    fn missing_input_path_is_an_error() {
        let err = read_inputs(&HydrostatConfig::default()).err().unwrap();
        assert!(err.to_string().contains("no input path"));
    }

    #[test]
    fn analyse_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_daily(dir.path());
        let config_path = dir.path().join("hydrostat.toml");
        std::fs::write(
            &config_path,
            "[analysis]\nnormalize_leap_days = false\n\n[extremes]\nfamilies = [\"lognormal\"]\n",
        )
        .unwrap();

        let args = AnalyseArgs {
            input: InputArgs {
                config: config_path,
                input: Some(input.clone()),
                half_year_input: None,
                output: None,
                station_id: None,
            },
            flow_threshold: Some(1.0),
            reference: Some(vec![30.0, 200.0]),
        };
        run(args).unwrap();

        let text = std::fs::read_to_string(input.with_extension("report.json")).unwrap();
        assert!(text.contains("\"station_id\": 42"));
        assert!(text.contains("\"flow_threshold\": 1.0"));
        assert!(text.contains("\"zonation\": {"));
        assert!(text.contains("\"dropped_records\": ["));
    }
}
