//! Kolmogorov-Smirnov goodness of fit.
//!
//! Samples of up to [`EXACT_MAX_N`] values use the exact distribution of the
//! statistic (Marsaglia, Tsang and Wang, 2003); annual series are usually
//! that short. Longer samples use the asymptotic Kolmogorov series.

use serde::Serialize;

/// One-sample Kolmogorov-Smirnov result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoodnessOfFit {
    /// Largest distance between the empirical and fitted CDF.
    pub statistic: f64,
    /// `P(D ≥ statistic)` under the fitted distribution.
    pub p_value: f64,
}

/// KS test of `sample` against a continuous CDF.
///
/// Non-finite values are ignored. Returns `None` for an empty sample.
pub fn kolmogorov_smirnov(sample: &[f64], cdf: impl Fn(f64) -> f64) -> Option<GoodnessOfFit> {
    let sorted = hydrostat_stats::finite_sorted(sample);
    if sorted.is_empty() {
        return None;
    }
    let n = sorted.len() as f64;

    let mut d = 0.0_f64;
    for (i, &x) in sorted.iter().enumerate() {
        let f = cdf(x);
        let above = (i + 1) as f64 / n - f;
        let below = f - i as f64 / n;
        d = d.max(above).max(below);
    }

    Some(GoodnessOfFit {
        statistic: d,
        p_value: p_value(d, sorted.len()),
    })
}

/// Largest sample size evaluated with the exact distribution.
pub const EXACT_MAX_N: usize = 140;

fn p_value(d: f64, n: usize) -> f64 {
    if n <= EXACT_MAX_N {
        (1.0 - exact_cdf(d, n)).clamp(0.0, 1.0)
    } else {
        kolmogorov_p_value(d, n as f64)
    }
}

const SCALE: f64 = 1e140;
const SCALE_EXP: i32 = 140;

/// `P(D_n < d)` by the Marsaglia-Tsang-Wang matrix power.
fn exact_cdf(d: f64, n: usize) -> f64 {
    let nf = n as f64;
    if d <= 0.5 / nf {
        return 0.0;
    }
    if d >= 1.0 {
        return 1.0;
    }
    // far tail, where the matrix would be large and the result is 1 to
    // within double precision
    let s = d * d * nf;
    if s > 7.24 || (s > 3.76 && n > 99) {
        return 1.0 - 2.0 * (-(2.000071 + 0.331 / nf.sqrt() + 1.409 / nf) * s).exp();
    }

    let k = (nf * d) as usize + 1;
    let m = 2 * k - 1;
    let h = k as f64 - nf * d;

    let mut base = vec![0.0; m * m];
    for i in 0..m {
        for j in 0..m {
            if i + 1 >= j {
                base[i * m + j] = 1.0;
            }
        }
    }
    for i in 0..m {
        base[i * m] -= h.powi(i as i32 + 1);
        base[(m - 1) * m + i] -= h.powi((m - i) as i32);
    }
    if 2.0 * h - 1.0 > 0.0 {
        base[(m - 1) * m] += (2.0 * h - 1.0).powi(m as i32);
    }
    for i in 0..m {
        for j in 0..=(i + 1).min(m - 1) {
            let factorial: f64 = (1..=i + 1 - j).map(|v| v as f64).product();
            base[i * m + j] /= factorial;
        }
    }

    let (power, mut exponent) = matrix_power(base, m, n);
    let mut p = power[(k - 1) * m + (k - 1)];
    for i in 1..=n {
        p = p * i as f64 / nf;
        if p < 1.0 / SCALE {
            p *= SCALE;
            exponent -= SCALE_EXP;
        }
    }
    p * 10f64.powi(exponent)
}

/// `base^n` for an `m × m` matrix, returned with a base-10 exponent that
/// keeps the entries in range.
fn matrix_power(mut base: Vec<f64>, m: usize, mut n: usize) -> (Vec<f64>, i32) {
    let mut result = vec![0.0; m * m];
    for i in 0..m {
        result[i * m + i] = 1.0;
    }
    let (mut result_exp, mut base_exp) = (0, 0);
    while n > 0 {
        if n & 1 == 1 {
            result = matrix_product(&result, &base, m);
            result_exp += base_exp;
            rescale(&mut result, &mut result_exp);
        }
        n >>= 1;
        if n > 0 {
            base = matrix_product(&base, &base, m);
            base_exp *= 2;
            rescale(&mut base, &mut base_exp);
        }
    }
    (result, result_exp)
}

fn matrix_product(a: &[f64], b: &[f64], m: usize) -> Vec<f64> {
    let mut out = vec![0.0; m * m];
    for i in 0..m {
        for l in 0..m {
            let a_il = a[i * m + l];
            if a_il == 0.0 {
                continue;
            }
            for j in 0..m {
                out[i * m + j] += a_il * b[l * m + j];
            }
        }
    }
    out
}

fn rescale(matrix: &mut [f64], exponent: &mut i32) {
    if matrix.iter().any(|v| v.abs() > SCALE) {
        matrix.iter_mut().for_each(|v| *v /= SCALE);
        *exponent += SCALE_EXP;
    }
}

/// `P(D > d)` from the Kolmogorov series at `λ = (√n + 0.12 + 0.11/√n)·d`.
fn kolmogorov_p_value(d: f64, n: f64) -> f64 {
    let sqrt_n = n.sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    // the series converges too slowly below this and the tail is 1
    if lambda < 0.2 {
        return 1.0;
    }
    let mut sum = 0.0;
    for k in 1..=100 {
        let kf = k as f64;
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let term = sign * (-2.0 * kf * kf * lambda * lambda).exp();
        sum += term;
        if term.abs() < 1e-15 {
            break;
        }
    }
    (2.0 * sum).clamp(0.0, 1.0)
}
