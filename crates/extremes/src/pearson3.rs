//! Pearson type III distribution parameterized by skew, mean and standard
//! deviation.
//!
//! With `z = (x − loc)/scale`, `α = 4/skew²` and `t = (2/skew)(z + 2/skew)`,
//! the standardized variable `t` is Gamma(α, 1). Positive skew bounds the
//! support below at `loc − 2·scale/skew`, negative skew bounds it above.
//! Near-zero skew is the normal distribution.

use argmin::core::CostFunction;
use statrs::distribution::{ContinuousCDF, Gamma, Normal};
use statrs::function::gamma::ln_gamma;

use crate::mle::minimize;

/// Below this absolute skew the normal limit is used.
const NORMAL_EPS: f64 = 1.6e-5;

/// Skews at or beyond this magnitude give `α <= 1` and an unbounded likelihood.
const MAX_ABS_SKEW: f64 = 2.0;

fn standard_gamma(alpha: f64) -> Option<Gamma> {
    Gamma::new(alpha, 1.0).ok()
}

/// Quantile of a unit-rate Gamma by bisection on its CDF.
fn gamma_quantile(g: &Gamma, alpha: f64, p: f64) -> f64 {
    let mut lo = 0.0;
    let mut hi = alpha + 10.0 * alpha.sqrt() + 10.0;
    while g.cdf(hi) < p {
        lo = hi;
        hi *= 2.0;
    }
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if g.cdf(mid) < p {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo <= 1e-14 * hi.max(1.0) {
            break;
        }
    }
    0.5 * (lo + hi)
}

pub(crate) fn cdf(skew: f64, loc: f64, scale: f64, x: f64) -> f64 {
    let z = (x - loc) / scale;
    if skew.abs() < NORMAL_EPS {
        return Normal::standard().cdf(z);
    }
    let alpha = 4.0 / (skew * skew);
    let t = (2.0 / skew) * (z + 2.0 / skew);
    if t <= 0.0 {
        return if skew > 0.0 { 0.0 } else { 1.0 };
    }
    match standard_gamma(alpha) {
        Some(g) if skew > 0.0 => g.cdf(t),
        Some(g) => g.sf(t),
        None => f64::NAN,
    }
}

pub(crate) fn ppf(skew: f64, loc: f64, scale: f64, p: f64) -> f64 {
    if skew.abs() < NORMAL_EPS {
        return loc + scale * Normal::standard().inverse_cdf(p);
    }
    let alpha = 4.0 / (skew * skew);
    let Some(g) = standard_gamma(alpha) else {
        return f64::NAN;
    };
    let t = if skew > 0.0 {
        gamma_quantile(&g, alpha, p)
    } else {
        gamma_quantile(&g, alpha, 1.0 - p)
    };
    let z = t * skew / 2.0 - 2.0 / skew;
    loc + scale * z
}

fn log_pdf(skew: f64, loc: f64, scale: f64, x: f64) -> f64 {
    let z = (x - loc) / scale;
    if skew.abs() < NORMAL_EPS {
        return -0.5 * z * z - 0.5 * (2.0 * std::f64::consts::PI).ln() - scale.ln();
    }
    let alpha = 4.0 / (skew * skew);
    let beta = 2.0 / skew;
    let t = beta * (z + 2.0 / skew);
    if t <= 0.0 {
        return f64::NEG_INFINITY;
    }
    beta.abs().ln() + (alpha - 1.0) * t.ln() - t - ln_gamma(alpha) - scale.ln()
}

/// Negative log-likelihood over `[skew, loc, ln scale]`.
#[derive(Clone)]
struct Pearson3Nll<'a> {
    sample: &'a [f64],
}

impl CostFunction for Pearson3Nll<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<f64, argmin::core::Error> {
        let (skew, loc, scale) = (p[0], p[1], p[2].exp());
        if skew.is_nan() || skew.abs() >= MAX_ABS_SKEW || !scale.is_finite() || scale <= 0.0 {
            return Ok(f64::MAX);
        }
        let ll: f64 = self
            .sample
            .iter()
            .map(|&x| log_pdf(skew, loc, scale, x))
            .sum();
        if ll.is_finite() { Ok(-ll) } else { Ok(f64::MAX) }
    }
}

/// Maximum-likelihood `(skew, loc, scale)`, started from the sample moments.
pub(crate) fn fit(
    sample: &[f64],
    mean: f64,
    sd: f64,
    skew: Option<f64>,
) -> Result<(f64, f64, f64), String> {
    let limit = 0.95 * MAX_ABS_SKEW;
    let mut skew0 = skew.unwrap_or(0.1).clamp(-limit, limit);
    // the starting point must have every sample value inside its support
    while skew0.abs() >= NORMAL_EPS
        && sample
            .iter()
            .any(|&x| !log_pdf(skew0, mean, sd, x).is_finite())
    {
        skew0 *= 0.5;
    }
    let start = [skew0, mean, sd.ln()];
    let steps = [0.1, 0.25 * sd, 0.2];

    let (best, _) = minimize(Pearson3Nll { sample }, &start, &steps)?;
    Ok((best[0], best[1], best[2].exp()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_skew_is_normal() {
        assert_relative_eq!(cdf(0.0, 10.0, 2.0, 10.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(ppf(0.0, 10.0, 2.0, 0.975), 13.919_928, epsilon = 1e-5);
    }

    #[test]
    fn ppf_inverts_cdf() {
        for skew in [-1.2, -0.4, 0.3, 1.0, 1.8] {
            for p in [0.01, 0.2, 0.5, 0.8, 0.99] {
                let x = ppf(skew, 100.0, 20.0, p);
                assert_relative_eq!(cdf(skew, 100.0, 20.0, x), p, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn median_shifts_against_skew() {
        // right skew puts the median below the mean
        assert!(ppf(1.0, 100.0, 20.0, 0.5) < 100.0);
        assert!(ppf(-1.0, 100.0, 20.0, 0.5) > 100.0);
    }

    #[test]
    fn support_bounds() {
        // skew 1: lower bound at loc - 2·scale = 60
        assert_eq!(cdf(1.0, 100.0, 20.0, 59.0), 0.0);
        assert_eq!(cdf(-1.0, 100.0, 20.0, 141.0), 1.0);
    }
}
