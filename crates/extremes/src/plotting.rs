//! Empirical plotting positions for annual extremes.

use hydrostat_stats::average_ranks;
use serde::Serialize;

use crate::family::TailRole;

/// One sample point with its Weibull plotting position `rank/(N+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlottingPosition {
    pub value: f64,
    /// Average rank for ties, 1-based.
    pub rank: f64,
    /// `rank/(N+1)`: non-exceedance probability for the exceedance role,
    /// exceedance probability for the non-exceedance role.
    pub probability: f64,
    /// `100·(1 − probability)`, the percentage plotted against return values.
    pub percent: f64,
}

/// Plotting positions of the finite values of `sample`.
///
/// Exceedance samples are ranked ascending, non-exceedance samples
/// descending, so `percent` is the empirical exceedance (respectively
/// non-exceedance) percentage on the same axis as the fitted return values.
pub fn empirical_plotting_positions(sample: &[f64], role: TailRole) -> Vec<PlottingPosition> {
    let mut sorted = hydrostat_stats::finite_sorted(sample);
    if role == TailRole::NonExceedance {
        sorted.reverse();
    }
    let n1 = sorted.len() as f64 + 1.0;
    let ranks = average_ranks(&sorted);
    sorted
        .into_iter()
        .zip(ranks)
        .map(|(value, rank)| {
            let probability = rank / n1;
            PlottingPosition {
                value,
                rank,
                probability,
                percent: 100.0 * (1.0 - probability),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn exceedance_ranks_ascending() {
        let pos = empirical_plotting_positions(&[30.0, 10.0, 20.0], TailRole::Exceedance);
        let values: Vec<f64> = pos.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
        assert_relative_eq!(pos[0].probability, 0.25);
        // the largest value has the smallest exceedance percentage
        assert_relative_eq!(pos[2].percent, 25.0);
    }

    #[test]
    fn non_exceedance_ranks_descending() {
        let pos = empirical_plotting_positions(&[1.0, 3.0, 2.0], TailRole::NonExceedance);
        assert_eq!(pos[0].value, 3.0);
        assert_relative_eq!(pos[0].percent, 75.0);
        // the smallest minimum has the smallest non-exceedance percentage
        assert_relative_eq!(pos[2].percent, 25.0);
    }

    #[test]
    fn ties_share_rank() {
        let pos = empirical_plotting_positions(&[5.0, 5.0, 7.0], TailRole::Exceedance);
        assert_eq!(pos[0].rank, 1.5);
        assert_eq!(pos[1].rank, 1.5);
        assert_eq!(pos[2].rank, 3.0);
    }
}
