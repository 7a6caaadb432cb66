use hydrostat_lowflow::{LowFlowConfig, detect_low_flow_sequences};
use hydrostat_series::{DailyRecord, IndexedRecord, IndexedSeries, StationSeries};

/// A 365-day discharge series with a dry summer and an irregular pattern of
/// short wet spells.
fn synthetic_year() -> IndexedSeries {
    let days_per_month = [30u8, 31, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31];
    let mut records = Vec::new();
    let mut i = 0u32;
    for (m, &days) in days_per_month.iter().enumerate() {
        for day in 1..=days {
            // linear congruential noise, deterministic
            let noise = (i.wrapping_mul(1_103_515_245).wrapping_add(12_345) >> 16) % 100;
            let base = if (200..330).contains(&i) { 2.0 } else { 8.0 };
            let q = base + noise as f64 / 25.0;
            records.push(DailyRecord::new(1, 2005, m as u8 + 1, day, 120.0, q, 12.0));
            i += 1;
        }
    }
    IndexedSeries::from_series(&StationSeries::new(records).unwrap())
}

fn check(year: &[IndexedRecord], config: &LowFlowConfig) {
    let seqs = detect_low_flow_sequences(year, config).unwrap();
    for (i, seq) in seqs.iter().enumerate() {
        assert_eq!(seq.sequence_id(), i + 1);
        assert!(seq.low_flow_days() >= config.min_length());
        assert!(seq.days().iter().all(|d| d.record.q < config.threshold()));
    }
    for pair in seqs.windows(2) {
        let gap = pair[1].start().day_of_hydrological_year as i64
            - pair[0].end().day_of_hydrological_year as i64
            - 1;
        assert!(gap >= config.max_gap() as i64, "gap {gap}");
    }
}

#[test]
fn sequences_respect_length_and_gap() {
    let series = synthetic_year();
    let year = series.year(2005);
    assert_eq!(year.len(), 365);
    for threshold in [3.0, 4.0, 5.0] {
        for (min_length, max_gap) in [(1, 0), (3, 2), (5, 4), (10, 7)] {
            let config = LowFlowConfig::new(threshold)
                .with_min_length(min_length)
                .with_max_gap(max_gap);
            check(year, &config);
        }
    }
}

#[test]
fn dry_summer_is_detected() {
    let series = synthetic_year();
    let seqs = detect_low_flow_sequences(series.year(2005), &LowFlowConfig::new(6.1)).unwrap();
    // base 2.0 plus at most 3.96 stays below 6.1 for the whole dry spell
    assert_eq!(seqs.len(), 1);
    assert_eq!(seqs[0].start().day_of_hydrological_year, 201);
    assert_eq!(seqs[0].end().day_of_hydrological_year, 330);
    assert!(seqs[0].deficit_volume_m3() > 0.0);
}
