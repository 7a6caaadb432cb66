//! # hydrostat-lowflow
//!
//! Detection of low-flow sequences: runs of days within one hydrological
//! year on which discharge stays below a threshold.
//!
//! Detection is a two-pass process:
//!
//! ```text
//! year records ──► run detector ──► runs ≥ min_length ──► merge (gap < max_gap) ──► sequences
//! ```
//!
//! The run detector is a two-state machine (outside / accumulating); `NaN`
//! discharge counts as not below the threshold and closes a run. Surviving
//! runs whose separation in days is below `max_gap` are merged into one
//! sequence. An empty result is valid and means no low-flow episode.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `config` | [`LowFlowConfig`] builder and validation |
//! | `detect` | Run detector and merge pass |
//! | `sequence` | [`LowFlowSequence`] and its derived quantities |
//! | `error` | [`LowFlowError`] |

mod config;
mod detect;
mod error;
mod sequence;

pub use config::LowFlowConfig;
pub use detect::detect_low_flow_sequences;
pub use error::LowFlowError;
pub use sequence::{LowFlowSequence, LowFlowSummary, SECONDS_PER_DAY};
