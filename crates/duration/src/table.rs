//! Duration-frequency table construction.

use hydrostat_series::StationSeries;
use serde::Serialize;
use tracing::debug;

use crate::error::DurationError;

/// Default stage interval width, cm.
pub const DEFAULT_BIN_WIDTH_CM: u32 = 10;

/// Upper bound on the number of stage intervals of one table.
pub const MAX_BINS: usize = 10_000;

/// One stage interval of the duration-frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationFrequencyRow {
    /// Inclusive lower edge, cm.
    pub from: f64,
    /// Exclusive upper edge, cm.
    pub to: f64,
    pub middle: f64,
    /// Observations per hydrological month; index 0 is month 1.
    pub monthly_counts: [usize; 12],
    pub total_count: usize,
    pub incidence_pct: f64,
    pub cumulative_incidence_pct: f64,
    /// Observations in this interval or any higher one.
    pub cumulative_count_including_higher: usize,
    /// Observations in this interval or any lower one.
    pub cumulative_count_including_lower: usize,
}

/// Stage duration-frequency table, highest interval first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationFrequencyTable {
    bin_width_cm: u32,
    n_observations: usize,
    rows: Vec<DurationFrequencyRow>,
}

impl DurationFrequencyTable {
    pub fn rows(&self) -> &[DurationFrequencyRow] {
        &self.rows
    }

    pub fn bin_width_cm(&self) -> u32 {
        self.bin_width_cm
    }

    /// Number of non-null stage observations, `N`.
    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Row with the largest `total_count`; the topmost one on ties.
    pub fn modal_row(&self) -> &DurationFrequencyRow {
        // rows is never empty: construction fails without stage data
        let mut best = &self.rows[0];
        for row in &self.rows[1..] {
            if row.total_count > best.total_count {
                best = row;
            }
        }
        best
    }
}

/// Builds the duration-frequency table of the series' stage `H`.
///
/// Intervals start at `floor(min(H)/w)·w` and end at the first multiple of
/// `w` strictly above `max(H)`, so every non-null value lands in exactly one
/// row and `Σ total_count == N`. Empty intervals inside the range are kept.
///
/// # Errors
///
/// - [`DurationError::InvalidBinWidth`] if `bin_width_cm` is zero.
/// - [`DurationError::NoStageData`] if no record has a finite `H`.
/// - [`DurationError::TooManyBins`] if the range needs more than [`MAX_BINS`]
///   intervals.
pub fn build_duration_frequency(
    series: &StationSeries,
    bin_width_cm: u32,
) -> Result<DurationFrequencyTable, DurationError> {
    if bin_width_cm == 0 {
        return Err(DurationError::InvalidBinWidth {
            width: bin_width_cm,
        });
    }
    let w = f64::from(bin_width_cm);

    let observations: Vec<(f64, u8)> = series
        .records()
        .iter()
        .filter(|r| r.h.is_finite())
        .map(|r| (r.h, r.month))
        .collect();
    if observations.is_empty() {
        return Err(DurationError::NoStageData);
    }

    let (min_h, max_h) = observations
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(h, _)| {
            (lo.min(h), hi.max(h))
        });
    let lower = (min_h / w).floor() * w;
    let upper = ((max_h / w).floor() + 1.0) * w;
    let bins = ((upper - lower) / w).round();
    if bins > MAX_BINS as f64 {
        return Err(DurationError::TooManyBins {
            min_h,
            max_h,
            bins,
            max: MAX_BINS,
        });
    }
    let n_bins = bins as usize;

    // counts[bin][month - 1], bin 0 is the lowest interval
    let mut counts = vec![[0usize; 12]; n_bins];
    for &(h, month) in &observations {
        let bin = (((h - lower) / w).floor() as usize).min(n_bins - 1);
        counts[bin][usize::from(month - 1)] += 1;
    }

    let n = observations.len();
    let mut rows = Vec::with_capacity(n_bins);
    let mut cum_higher = 0usize;
    let mut cum_incidence = 0.0;
    for (bin, monthly_counts) in counts.into_iter().enumerate().rev() {
        let from = lower + bin as f64 * w;
        let total_count: usize = monthly_counts.iter().sum();
        let incidence_pct = total_count as f64 / n as f64 * 100.0;
        let cumulative_count_including_lower = n - cum_higher;
        cum_higher += total_count;
        cum_incidence += incidence_pct;
        rows.push(DurationFrequencyRow {
            from,
            to: from + w,
            middle: from + w / 2.0,
            monthly_counts,
            total_count,
            incidence_pct,
            cumulative_incidence_pct: cum_incidence,
            cumulative_count_including_higher: cum_higher,
            cumulative_count_including_lower,
        });
    }

    debug!(
        n_observations = n,
        n_bins,
        lower,
        upper,
        "duration-frequency table built"
    );

    Ok(DurationFrequencyTable {
        bin_width_cm,
        n_observations: n,
        rows,
    })
}
