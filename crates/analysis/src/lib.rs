//! # hydrostat-analysis
//!
//! Station-level facade over the hydrostat analyses. It owns no algorithm:
//! each operation prepares the input of one component crate, calls it and
//! returns its value.
//!
//! # Pipeline
//!
//! ```text
//!  StationSeries ─► leap normalization ─► IndexedSeries
//!        │                                     │
//!        ├─► duration-frequency table ─► zonation
//!        ├─► annual extremes ─► family fits (parallel) ─► return values, KS
//!        └─► characteristic values (SNQ) ─► low-flow sequences per year
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use hydrostat_analysis::{AnalysisConfig, StationAnalysis};
//!
//! let config = AnalysisConfig::new().with_flow_threshold(1.8);
//! let analysis = StationAnalysis::new(series, config)?;
//! let report = analysis.run()?;
//! ```

mod config;
mod error;
mod report;
mod station;

pub use config::{AnalysisConfig, ExtremeSource};
pub use error::AnalysisError;
pub use report::{AnalysisReport, FamilyFit, FamilyReport, FitOutcome, YearLowFlow};
pub use station::StationAnalysis;
