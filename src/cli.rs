use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// hydrostat river-gauge frequency analysis.
#[derive(Parser)]
#[command(
    name = "hydrostat",
    version,
    about = "Frequency and extreme-value analysis of river gauge records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full station analysis and write a JSON report.
    Analyse(AnalyseArgs),
    /// Fit extreme-value families to annual extremes only.
    Extremes(ExtremesArgs),
}

/// Input overrides shared by both subcommands.
#[derive(clap::Args)]
pub struct InputArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "hydrostat.toml")]
    pub config: PathBuf,

    /// Override daily CSV input path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override half-year CSV input path from config.
    #[arg(long = "half-year-input")]
    pub half_year_input: Option<PathBuf>,

    /// Override JSON output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Select one station from a multi-station file.
    #[arg(short, long = "station")]
    pub station_id: Option<u32>,
}

/// Arguments for the `analyse` subcommand.
#[derive(clap::Args)]
pub struct AnalyseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override the low-flow threshold (m³/s) from config.
    #[arg(long = "flow-threshold")]
    pub flow_threshold: Option<f64>,

    /// Zonation reference point as DURATION_DAYS,STAGE_CM.
    #[arg(long, value_delimiter = ',', value_name = "DAYS,CM")]
    pub reference: Option<Vec<f64>>,
}

/// Arguments for the `extremes` subcommand.
#[derive(clap::Args)]
pub struct ExtremesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Override the family list from config (comma separated).
    #[arg(long, value_delimiter = ',')]
    pub families: Option<Vec<String>>,

    /// Override the extreme source from config (`daily` or `half_year`).
    #[arg(long)]
    pub source: Option<String>,
}
