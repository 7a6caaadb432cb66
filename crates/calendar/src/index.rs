//! Day-of-hydrological-year indexing.

use std::collections::BTreeMap;

/// Assigns the running day index within each year group.
///
/// `years` holds the hydrological-year label of every record in
/// chronological order. The returned vector has one 1-based index per record:
/// the position of the record within all records sharing its year label.
/// An empty input yields an empty index.
///
/// # Examples
///
/// ```ignore
/// let idx = day_of_hydrological_year(&[1999, 1999, 1999, 2000, 2000]);
/// assert_eq!(idx, vec![1, 2, 3, 1, 2]);
/// ```
pub fn day_of_hydrological_year(years: &[i32]) -> Vec<u16> {
    let mut counters: BTreeMap<i32, u16> = BTreeMap::new();
    years
        .iter()
        .map(|&y| {
            let c = counters.entry(y).or_insert(0);
            *c += 1;
            *c
        })
        .collect()
}
