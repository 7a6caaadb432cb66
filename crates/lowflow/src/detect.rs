//! Run detection and merging.

use hydrostat_series::IndexedRecord;
use tracing::{debug, info};

use crate::config::LowFlowConfig;
use crate::error::LowFlowError;
use crate::sequence::LowFlowSequence;

/// Detector state while scanning one year.
enum RunState {
    Outside,
    Accumulating(Vec<IndexedRecord>),
}

/// Finds the low-flow sequences of one hydrological year.
///
/// `year` must be the indexed records of a single hydrological year in date
/// order. Runs of `Q < threshold` shorter than `min_length` are discarded;
/// the remaining runs are merged whenever the number of days separating a
/// run from the previous one (`start − previous_end − 1`) is below
/// `max_gap`. Sequence ids start at 1. An empty vector means no low flow.
///
/// # Errors
///
/// - [`LowFlowError::InvalidConfig`] if the configuration is invalid.
/// - [`LowFlowError::MixedYears`] if `year` holds more than one year label.
pub fn detect_low_flow_sequences(
    year: &[IndexedRecord],
    config: &LowFlowConfig,
) -> Result<Vec<LowFlowSequence>, LowFlowError> {
    config.validate()?;
    if let Some(first) = year.first().map(|r| r.record.year)
        && let Some(other) = year.iter().find(|r| r.record.year != first)
    {
        return Err(LowFlowError::MixedYears {
            first,
            found: other.record.year,
        });
    }

    let runs = find_runs(year, config);
    let n_runs = runs.len();
    let groups = merge_runs(runs, config.max_gap());

    let sequences: Vec<LowFlowSequence> = groups
        .into_iter()
        .enumerate()
        .map(|(i, days)| LowFlowSequence::new(i + 1, config.threshold(), days))
        .collect();

    if let Some(first) = year.first() {
        info!(
            year = first.record.year,
            threshold = config.threshold(),
            runs = n_runs,
            sequences = sequences.len(),
            "low-flow detection complete"
        );
    }
    Ok(sequences)
}

fn find_runs(year: &[IndexedRecord], config: &LowFlowConfig) -> Vec<Vec<IndexedRecord>> {
    let mut runs = Vec::new();
    let mut state = RunState::Outside;

    for r in year {
        // NaN compares false, so missing discharge is never below
        let below = r.record.q < config.threshold();
        state = match (state, below) {
            (RunState::Outside, false) => RunState::Outside,
            (RunState::Outside, true) => RunState::Accumulating(vec![*r]),
            (RunState::Accumulating(mut run), true) => {
                run.push(*r);
                RunState::Accumulating(run)
            }
            (RunState::Accumulating(run), false) => {
                commit(&mut runs, run, config.min_length());
                RunState::Outside
            }
        };
    }
    if let RunState::Accumulating(run) = state {
        commit(&mut runs, run, config.min_length());
    }
    runs
}

fn commit(runs: &mut Vec<Vec<IndexedRecord>>, run: Vec<IndexedRecord>, min_length: usize) {
    if run.len() >= min_length {
        runs.push(run);
    } else {
        debug!(
            start_day = run[0].day_of_hydrological_year,
            len = run.len(),
            "short run discarded"
        );
    }
}

fn merge_runs(runs: Vec<Vec<IndexedRecord>>, max_gap: usize) -> Vec<Vec<IndexedRecord>> {
    let mut groups: Vec<Vec<IndexedRecord>> = Vec::new();
    let mut previous_end: Option<u16> = None;

    for run in runs {
        let start = run[0].day_of_hydrological_year;
        let end = run[run.len() - 1].day_of_hydrological_year;
        let bridged = previous_end.is_some_and(|prev| {
            let gap = i64::from(start) - i64::from(prev) - 1;
            gap < max_gap as i64
        });
        match groups.last_mut() {
            Some(group) if bridged => group.extend(run),
            _ => groups.push(run),
        }
        previous_end = Some(end);
    }
    groups
}
