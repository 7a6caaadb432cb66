//! Generalized extreme value distribution, shape convention `c = −ξ`.
//!
//! `F(x) = exp(−(1 − c·z)^(1/c))` with `z = (x − loc)/scale`, reducing to
//! the Gumbel `exp(−exp(−z))` at `c = 0`. `c > 0` bounds the support above
//! at `loc + scale/c`, `c < 0` bounds it below.

use argmin::core::CostFunction;

use crate::mle::minimize;

/// Shapes closer to zero than this use the Gumbel limit.
const GUMBEL_EPS: f64 = 1e-9;

/// Euler–Mascheroni constant, for Gumbel moment estimates.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

pub(crate) fn cdf(c: f64, loc: f64, scale: f64, x: f64) -> f64 {
    let z = (x - loc) / scale;
    if c.abs() < GUMBEL_EPS {
        return (-(-z).exp()).exp();
    }
    let t = 1.0 - c * z;
    if t <= 0.0 {
        // beyond the finite endpoint
        return if c > 0.0 { 1.0 } else { 0.0 };
    }
    (-t.powf(1.0 / c)).exp()
}

pub(crate) fn ppf(c: f64, loc: f64, scale: f64, p: f64) -> f64 {
    let y = -p.ln();
    if c.abs() < GUMBEL_EPS {
        loc - scale * y.ln()
    } else {
        loc + scale * (1.0 - y.powf(c)) / c
    }
}

fn log_pdf(c: f64, loc: f64, scale: f64, x: f64) -> f64 {
    let z = (x - loc) / scale;
    if c.abs() < GUMBEL_EPS {
        return -scale.ln() - z - (-z).exp();
    }
    let t = 1.0 - c * z;
    if t <= 0.0 {
        return f64::NEG_INFINITY;
    }
    -scale.ln() + (1.0 / c - 1.0) * t.ln() - t.powf(1.0 / c)
}

/// Negative log-likelihood over `[c, loc, ln scale]`.
#[derive(Clone)]
struct GevNll<'a> {
    sample: &'a [f64],
}

impl CostFunction for GevNll<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<f64, argmin::core::Error> {
        let (c, loc, scale) = (p[0], p[1], p[2].exp());
        // the likelihood is unbounded for c >= 1
        if c.is_nan() || c >= 1.0 || !scale.is_finite() || scale <= 0.0 {
            return Ok(f64::MAX);
        }
        let ll: f64 = self.sample.iter().map(|&x| log_pdf(c, loc, scale, x)).sum();
        if ll.is_finite() { Ok(-ll) } else { Ok(f64::MAX) }
    }
}

/// Maximum-likelihood `(c, loc, scale)`, started from the Gumbel moment fit.
///
/// `mean` and `sd` are the sample moments, `sd > 0`.
pub(crate) fn fit(sample: &[f64], mean: f64, sd: f64) -> Result<(f64, f64, f64), String> {
    let scale0 = 6.0_f64.sqrt() * sd / std::f64::consts::PI;
    let loc0 = mean - EULER_GAMMA * scale0;
    let start = [0.0, loc0, scale0.ln()];
    let steps = [0.1, 0.25 * scale0, 0.2];

    let (best, _) = minimize(GevNll { sample }, &start, &steps)?;
    Ok((best[0], best[1], best[2].exp()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gumbel_median() {
        // F(loc - scale·ln(ln 2)) = 0.5
        let x = 10.0 - 2.0 * std::f64::consts::LN_2.ln();
        assert_relative_eq!(cdf(0.0, 10.0, 2.0, x), 0.5, epsilon = 1e-12);
        assert_relative_eq!(ppf(0.0, 10.0, 2.0, 0.5), x, epsilon = 1e-12);
    }

    #[test]
    fn ppf_inverts_cdf() {
        for c in [-0.3, -0.05, 0.0, 0.1, 0.4] {
            for p in [0.001, 0.1, 0.5, 0.9, 0.999] {
                let x = ppf(c, 100.0, 15.0, p);
                assert_relative_eq!(cdf(c, 100.0, 15.0, x), p, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn bounded_support() {
        // c > 0: upper endpoint at loc + scale/c = 110
        assert_eq!(cdf(0.5, 100.0, 5.0, 111.0), 1.0);
        // c < 0: lower endpoint at loc + scale/c = 90
        assert_eq!(cdf(-0.5, 100.0, 5.0, 89.0), 0.0);
    }

    #[test]
    fn nll_rejects_shape_at_one() {
        let sample = [1.0, 2.0, 3.0];
        let nll = GevNll { sample: &sample };
        assert_eq!(nll.cost(&vec![1.0, 2.0, 0.0]).unwrap(), f64::MAX);
    }
}
