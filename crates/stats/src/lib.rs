//! Descriptive statistics helpers shared by the hydrostat crates.
//!
//! Gauge series carry `NaN` for missing days and leap-day placeholders, so
//! the summary functions here skip non-finite values; the low-level moment
//! functions expect clean input.

use serde::Serialize;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator (matching pandas' `std()`).
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Moment coefficient of skewness, `m3 / m2^(3/2)` with population moments.
///
/// Returns `None` for fewer than 3 values or zero spread.
pub fn skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let m = mean(data);
    let nf = n as f64;
    let m2 = data.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / nf;
    let m3 = data.iter().map(|&x| (x - m).powi(3)).sum::<f64>() / nf;
    if m2 <= 1e-300 {
        return None;
    }
    Some(m3 / m2.powf(1.5))
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Finite values of `data`, sorted ascending.
pub fn finite_sorted(data: &[f64]) -> Vec<f64> {
    let mut v: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    v.sort_by(f64::total_cmp);
    v
}

/// 1-based ranks of pre-sorted data, ties sharing their average rank.
///
/// Works for ascending or descending order; equal values must be adjacent.
pub fn average_ranks(sorted: &[f64]) -> Vec<f64> {
    let mut ranks = vec![0.0; sorted.len()];
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        // positions i..j share ranks i+1..=j
        let avg = (i + 1 + j) as f64 / 2.0;
        ranks[i..j].iter_mut().for_each(|r| *r = avg);
        i = j;
    }
    ranks
}

/// Max/mean/median/min/count summary of the finite values in a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    /// Sample standard deviation (N-1); 0.0 for a single value.
    pub sd: f64,
    pub count: usize,
}

/// Summarizes the finite values of `data`. Returns `None` if there are none.
pub fn summarize(data: &[f64]) -> Option<Summary> {
    let sorted = finite_sorted(data);
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    Some(Summary {
        max,
        mean: mean(&sorted),
        median: median(&sorted),
        min,
        sd: sd(&sorted),
        count: sorted.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_skewness_symmetric() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(skewness(&data).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_right_tail() {
        let data = [1.0, 1.0, 1.0, 2.0, 10.0];
        assert!(skewness(&data).unwrap() > 1.0);
    }

    #[test]
    fn test_skewness_constant() {
        assert!(skewness(&[3.0, 3.0, 3.0]).is_none());
    }

    #[test]
    fn test_median_odd() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0]), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_median_even() {
        assert_relative_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5, epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "median: input must not be empty")]
    fn test_median_empty_panics() {
        median(&[]);
    }

    #[test]
    fn test_finite_sorted_drops_nan() {
        let v = finite_sorted(&[3.0, f64::NAN, 1.0, f64::INFINITY, 2.0]);
        assert_eq!(v, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_average_ranks_ties() {
        let ranks = average_ranks(&[1.0, 2.0, 2.0, 3.0]);
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn test_average_ranks_descending() {
        let ranks = average_ranks(&[9.0, 7.0, 7.0, 7.0]);
        assert_eq!(ranks, vec![1.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_summarize() {
        let s = summarize(&[4.0, f64::NAN, 1.0, 7.0]).unwrap();
        assert_eq!(s.count, 3);
        assert_relative_eq!(s.max, 7.0);
        assert_relative_eq!(s.min, 1.0);
        assert_relative_eq!(s.mean, 4.0);
        assert_relative_eq!(s.median, 4.0);
        assert_relative_eq!(s.sd, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_summarize_all_nan() {
        assert!(summarize(&[f64::NAN, f64::NAN]).is_none());
    }
}
