//! Two-parameter log-normal distribution (location fixed at zero).
//!
//! `shape` is σ of `ln x` and `scale` is `exp(μ)`.

use statrs::distribution::{ContinuousCDF, Normal};

pub(crate) fn cdf(shape: f64, loc: f64, scale: f64, x: f64) -> f64 {
    let y = x - loc;
    if y <= 0.0 {
        return 0.0;
    }
    Normal::standard().cdf((y / scale).ln() / shape)
}

pub(crate) fn ppf(shape: f64, loc: f64, scale: f64, p: f64) -> f64 {
    loc + scale * (shape * Normal::standard().inverse_cdf(p)).exp()
}

/// Closed-form maximum likelihood with `loc = 0`: `μ` and `σ` are the mean
/// and population standard deviation of `ln x`. Values must be positive.
pub(crate) fn fit(sample: &[f64]) -> (f64, f64, f64) {
    let logs: Vec<f64> = sample.iter().map(|x| x.ln()).collect();
    let n = logs.len() as f64;
    let mu = logs.iter().sum::<f64>() / n;
    let sigma = (logs.iter().map(|l| (l - mu).powi(2)).sum::<f64>() / n).sqrt();
    (sigma, 0.0, mu.exp())
}
