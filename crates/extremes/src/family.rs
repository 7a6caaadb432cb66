//! Distribution families and their tail conventions.

use std::fmt;
use std::str::FromStr;

use hydrostat_series::AnnualExtremeSeries;
use serde::{Deserialize, Serialize};

/// Exceedance probabilities reported by default for exceedance families.
pub const EXCEEDANCE_PROBABILITIES: [f64; 13] = [
    0.9, 0.8, 0.7, 0.6, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01, 0.005, 0.002, 0.001,
];

/// Non-exceedance probabilities reported by default for non-exceedance families.
pub const NON_EXCEEDANCE_PROBABILITIES: [f64; 13] = [
    0.99, 0.95, 0.9, 0.8, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01, 0.005, 0.002, 0.001,
];

/// Which tail of the annual distribution a family describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailRole {
    /// Fitted to annual maxima; `p` is the probability of being exceeded.
    Exceedance,
    /// Fitted to annual minima; `p` is the probability of not being reached.
    NonExceedance,
}

/// Supported extreme-value distribution families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionFamily {
    LogNormal,
    GeneralizedExtremeValue,
    #[serde(rename = "pearson_type_iii")]
    PearsonTypeIII,
    FisherTippett,
}

impl DistributionFamily {
    /// All families in reporting order.
    pub const ALL: [DistributionFamily; 4] = [
        DistributionFamily::LogNormal,
        DistributionFamily::GeneralizedExtremeValue,
        DistributionFamily::PearsonTypeIII,
        DistributionFamily::FisherTippett,
    ];

    pub fn role(self) -> TailRole {
        match self {
            DistributionFamily::FisherTippett => TailRole::NonExceedance,
            _ => TailRole::Exceedance,
        }
    }

    pub fn default_probabilities(self) -> &'static [f64] {
        match self.role() {
            TailRole::Exceedance => &EXCEEDANCE_PROBABILITIES,
            TailRole::NonExceedance => &NON_EXCEEDANCE_PROBABILITIES,
        }
    }

    /// Annual maxima for exceedance families, annual minima otherwise.
    pub fn sample(self, extremes: &AnnualExtremeSeries) -> Vec<f64> {
        match self.role() {
            TailRole::Exceedance => extremes.maxima(),
            TailRole::NonExceedance => extremes.minima(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DistributionFamily::LogNormal => "log_normal",
            DistributionFamily::GeneralizedExtremeValue => "generalized_extreme_value",
            DistributionFamily::PearsonTypeIII => "pearson_type_iii",
            DistributionFamily::FisherTippett => "fisher_tippett",
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionFamily {
    type Err = String;

    /// Accepts the canonical names and the short aliases
    /// `lognormal`, `gev`, `pearson3` and `gumbel_min`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log_normal" | "lognormal" => Ok(DistributionFamily::LogNormal),
            "generalized_extreme_value" | "gev" => Ok(DistributionFamily::GeneralizedExtremeValue),
            "pearson_type_iii" | "pearson3" => Ok(DistributionFamily::PearsonTypeIII),
            "fisher_tippett" | "gumbel_min" => Ok(DistributionFamily::FisherTippett),
            other => Err(format!("unknown distribution family: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles() {
        assert_eq!(DistributionFamily::LogNormal.role(), TailRole::Exceedance);
        assert_eq!(DistributionFamily::GeneralizedExtremeValue.role(), TailRole::Exceedance);
        assert_eq!(DistributionFamily::PearsonTypeIII.role(), TailRole::Exceedance);
        assert_eq!(DistributionFamily::FisherTippett.role(), TailRole::NonExceedance);
    }

    #[test]
    fn default_probabilities_by_role() {
        assert_eq!(DistributionFamily::GeneralizedExtremeValue.default_probabilities()[0], 0.9);
        assert_eq!(DistributionFamily::FisherTippett.default_probabilities()[0], 0.99);
        assert_eq!(DistributionFamily::FisherTippett.default_probabilities().len(), 13);
    }

    #[test]
    fn parse_names_and_aliases() {
        for family in DistributionFamily::ALL {
            assert_eq!(family.name().parse::<DistributionFamily>().unwrap(), family);
        }
        assert_eq!("GEV".parse::<DistributionFamily>().unwrap(), DistributionFamily::GeneralizedExtremeValue);
        assert!("weibull".parse::<DistributionFamily>().is_err());
    }
}
