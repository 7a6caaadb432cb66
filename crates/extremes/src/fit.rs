//! Fitting entry point and the fitted-distribution value.

use serde::Serialize;
use tracing::debug;

use crate::error::FitError;
use crate::family::{DistributionFamily, TailRole};
use crate::gof::{GoodnessOfFit, kolmogorov_smirnov};
use crate::{gev, lognormal, pearson3};

/// Smallest sample accepted by [`fit`].
pub const MIN_SAMPLE_SIZE: usize = 10;

/// A distribution fitted to annual extremes, with return values at its
/// reporting probabilities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedDistribution {
    family: DistributionFamily,
    shape: f64,
    loc: f64,
    scale: f64,
    probabilities: Vec<f64>,
    return_values: Vec<f64>,
}

impl FittedDistribution {
    pub fn family(&self) -> DistributionFamily {
        self.family
    }

    pub fn role(&self) -> TailRole {
        self.family.role()
    }

    /// Shape parameter: σ of `ln x` (log-normal), `c` (GEV, Fisher-Tippett)
    /// or skew (Pearson III).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// `return_values()[i]` belongs to `probabilities()[i]`.
    pub fn return_values(&self) -> &[f64] {
        &self.return_values
    }

    /// Fitted cumulative distribution function.
    pub fn cdf(&self, x: f64) -> f64 {
        let (s, l, c) = (self.shape, self.loc, self.scale);
        match self.family {
            DistributionFamily::LogNormal => lognormal::cdf(s, l, c, x),
            DistributionFamily::GeneralizedExtremeValue | DistributionFamily::FisherTippett => {
                gev::cdf(s, l, c, x)
            }
            DistributionFamily::PearsonTypeIII => pearson3::cdf(s, l, c, x),
        }
    }

    /// Fitted quantile function.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidProbability`] unless `0 < p < 1`.
    pub fn ppf(&self, p: f64) -> Result<f64, FitError> {
        check_probability(p)?;
        let (s, l, c) = (self.shape, self.loc, self.scale);
        Ok(match self.family {
            DistributionFamily::LogNormal => lognormal::ppf(s, l, c, p),
            DistributionFamily::GeneralizedExtremeValue | DistributionFamily::FisherTippett => {
                gev::ppf(s, l, c, p)
            }
            DistributionFamily::PearsonTypeIII => pearson3::ppf(s, l, c, p),
        })
    }

    /// Value whose exceedance (exceedance role) or non-exceedance
    /// (non-exceedance role) probability is `p`.
    pub fn return_value(&self, p: f64) -> Result<f64, FitError> {
        match self.role() {
            TailRole::Exceedance => {
                check_probability(p)?;
                self.ppf(1.0 - p)
            }
            TailRole::NonExceedance => self.ppf(p),
        }
    }

    /// [`return_value`](Self::return_value) for each probability.
    pub fn return_values_for(&self, probabilities: &[f64]) -> Result<Vec<f64>, FitError> {
        probabilities.iter().map(|&p| self.return_value(p)).collect()
    }

    /// Kolmogorov-Smirnov test of `sample` against this distribution.
    pub fn goodness_of_fit(&self, sample: &[f64]) -> Option<GoodnessOfFit> {
        kolmogorov_smirnov(sample, |x| self.cdf(x))
    }
}

fn check_probability(p: f64) -> Result<(), FitError> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(FitError::InvalidProbability { p })
    }
}

/// Fits `family` to `sample` and evaluates its default return values.
///
/// The sample is the annual maxima for exceedance families and the annual
/// minima for Fisher-Tippett; see [`DistributionFamily::sample`].
///
/// # Errors
///
/// - [`FitError::InsufficientSample`] with fewer than [`MIN_SAMPLE_SIZE`] values.
/// - [`FitError::NonFiniteSample`] if any value is NaN or infinite.
/// - [`FitError::ConstantSample`] if all values are equal.
/// - [`FitError::NonPositiveSample`] for log-normal with a value <= 0.
/// - [`FitError::Convergence`] if the likelihood maximization fails.
pub fn fit(family: DistributionFamily, sample: &[f64]) -> Result<FittedDistribution, FitError> {
    fit_with_probabilities(family, sample, family.default_probabilities())
}

/// [`fit`] with caller-chosen reporting probabilities.
#[tracing::instrument(skip(sample, probabilities), fields(n = sample.len()))]
pub fn fit_with_probabilities(
    family: DistributionFamily,
    sample: &[f64],
    probabilities: &[f64],
) -> Result<FittedDistribution, FitError> {
    if sample.len() < MIN_SAMPLE_SIZE {
        return Err(FitError::InsufficientSample {
            n: sample.len(),
            min: MIN_SAMPLE_SIZE,
        });
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(FitError::NonFiniteSample);
    }
    for &p in probabilities {
        check_probability(p)?;
    }
    let mean = hydrostat_stats::mean(sample);
    let sd = hydrostat_stats::sd(sample);
    if sd <= f64::EPSILON * mean.abs().max(1.0) {
        return Err(FitError::ConstantSample);
    }

    let convergence = |reason: String| FitError::Convergence { family, reason };
    let (shape, loc, scale) = match family {
        DistributionFamily::LogNormal => {
            if let Some(&value) = sample.iter().find(|&&x| x <= 0.0) {
                return Err(FitError::NonPositiveSample { family, value });
            }
            lognormal::fit(sample)
        }
        DistributionFamily::GeneralizedExtremeValue | DistributionFamily::FisherTippett => {
            gev::fit(sample, mean, sd).map_err(convergence)?
        }
        DistributionFamily::PearsonTypeIII => {
            let skew = hydrostat_stats::skewness(sample);
            pearson3::fit(sample, mean, sd, skew).map_err(convergence)?
        }
    };
    if !(shape.is_finite() && loc.is_finite() && scale.is_finite() && scale > 0.0) {
        return Err(convergence(format!(
            "degenerate parameters shape={shape} loc={loc} scale={scale}"
        )));
    }

    let mut fitted = FittedDistribution {
        family,
        shape,
        loc,
        scale,
        probabilities: probabilities.to_vec(),
        return_values: Vec::new(),
    };
    fitted.return_values = fitted.return_values_for(probabilities)?;
    if let Some(bad) = fitted.return_values.iter().find(|v| !v.is_finite()) {
        return Err(convergence(format!("non-finite return value {bad}")));
    }

    debug!(%family, shape, loc, scale, "distribution fitted");
    Ok(fitted)
}
