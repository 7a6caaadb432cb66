//! Low-flow sequence and derived quantities.

use hydrostat_series::IndexedRecord;
use serde::Serialize;

/// Seconds in one day, for converting daily discharge to volume.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// One merged low-flow episode inside a hydrological year.
///
/// `days` holds only the below-threshold days of the merged runs; the
/// above-threshold days of a bridged gap are not part of it but are covered
/// by [`span_days`](Self::span_days).
#[derive(Debug, Clone, PartialEq)]
pub struct LowFlowSequence {
    sequence_id: usize,
    threshold: f64,
    days: Vec<IndexedRecord>,
}

impl LowFlowSequence {
    /// `days` must be non-empty and in date order.
    pub(crate) fn new(sequence_id: usize, threshold: f64, days: Vec<IndexedRecord>) -> Self {
        debug_assert!(!days.is_empty());
        Self {
            sequence_id,
            threshold,
            days,
        }
    }

    /// 1-based id in discovery order.
    pub fn sequence_id(&self) -> usize {
        self.sequence_id
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn days(&self) -> &[IndexedRecord] {
        &self.days
    }

    pub fn start(&self) -> &IndexedRecord {
        &self.days[0]
    }

    pub fn end(&self) -> &IndexedRecord {
        &self.days[self.days.len() - 1]
    }

    /// Number of below-threshold days.
    pub fn low_flow_days(&self) -> usize {
        self.days.len()
    }

    /// Days from start to end inclusive, bridged gaps included.
    pub fn span_days(&self) -> usize {
        usize::from(self.end().day_of_hydrological_year - self.start().day_of_hydrological_year) + 1
    }

    /// Lowest discharge of the sequence, m³/s.
    pub fn min_flow(&self) -> f64 {
        self.days
            .iter()
            .map(|d| d.record.q)
            .fold(f64::INFINITY, f64::min)
    }

    /// Volume missing to the threshold, `Σ (threshold − Q) · 86400`, m³.
    pub fn deficit_volume_m3(&self) -> f64 {
        self.days
            .iter()
            .map(|d| (self.threshold - d.record.q) * SECONDS_PER_DAY)
            .sum()
    }

    pub fn summary(&self) -> LowFlowSummary {
        let date = |r: &IndexedRecord| (r.record.year, r.record.month, r.record.day);
        LowFlowSummary {
            sequence_id: self.sequence_id,
            start: date(self.start()),
            end: date(self.end()),
            start_day: self.start().day_of_hydrological_year,
            end_day: self.end().day_of_hydrological_year,
            low_flow_days: self.low_flow_days(),
            span_days: self.span_days(),
            min_flow: self.min_flow(),
            deficit_volume_m3: self.deficit_volume_m3(),
        }
    }
}

/// Serializable digest of a [`LowFlowSequence`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowFlowSummary {
    pub sequence_id: usize,
    /// `(year, month, day)` of the first low-flow day.
    pub start: (i32, u8, u8),
    pub end: (i32, u8, u8),
    pub start_day: u16,
    pub end_day: u16,
    pub low_flow_days: usize,
    pub span_days: usize,
    pub min_flow: f64,
    pub deficit_volume_m3: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use hydrostat_series::DailyRecord;

    fn day(doy: u16, q: f64) -> IndexedRecord {
        IndexedRecord {
            record: DailyRecord::new(1, 2001, 8, doy as u8, 100.0, q, 15.0),
            day_of_hydrological_year: doy,
        }
    }

    #[test]
    fn derived_quantities() {
        let seq = LowFlowSequence::new(1, 2.0, vec![day(3, 1.5), day(4, 1.0), day(7, 1.8)]);
        assert_eq!(seq.low_flow_days(), 3);
        assert_eq!(seq.span_days(), 5);
        assert_eq!(seq.min_flow(), 1.0);
        assert_relative_eq!(seq.deficit_volume_m3(), 1.7 * SECONDS_PER_DAY, epsilon = 1e-6);

        let s = seq.summary();
        assert_eq!(s.start, (2001, 8, 3));
        assert_eq!(s.end_day, 7);
    }
}
