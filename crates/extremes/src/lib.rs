//! # hydrostat-extremes
//!
//! Extreme-value models for annual maxima and minima.
//!
//! Four distribution families are supported, each with a fixed tail role:
//!
//! | Family | Role | Sample | Return value at `p` |
//! |--------|------|--------|---------------------|
//! | Log-normal (location 0) | exceedance | annual maxima | `ppf(1 − p)` |
//! | Generalized extreme value | exceedance | annual maxima | `ppf(1 − p)` |
//! | Pearson type III | exceedance | annual maxima | `ppf(1 − p)` |
//! | Fisher-Tippett | non-exceedance | annual minima | `ppf(p)` |
//!
//! Parameters follow the `(shape, loc, scale)` convention of the common
//! scientific Python stack: the GEV shape is `c = −ξ` and the Pearson III
//! shape is the skew coefficient with `loc`/`scale` equal to mean and
//! standard deviation. Log-normal has a closed-form likelihood maximum; the
//! other families are fitted by Nelder-Mead on the negative log-likelihood.
//!
//! ```ignore
//! use hydrostat_extremes::{DistributionFamily, fit};
//!
//! let fitted = fit(DistributionFamily::GeneralizedExtremeValue, &annual_maxima)?;
//! let q100 = fitted.return_value(0.01)?;
//! let gof = fitted.goodness_of_fit(&annual_maxima);
//! ```

mod error;
mod family;
mod fit;
mod gev;
mod gof;
mod lognormal;
mod mle;
mod pearson3;
mod plotting;

pub use error::FitError;
pub use family::{
    DistributionFamily, EXCEEDANCE_PROBABILITIES, NON_EXCEEDANCE_PROBABILITIES, TailRole,
};
pub use fit::{FittedDistribution, MIN_SAMPLE_SIZE, fit, fit_with_probabilities};
pub use gof::{GoodnessOfFit, kolmogorov_smirnov};
pub use plotting::{PlottingPosition, empirical_plotting_positions};
