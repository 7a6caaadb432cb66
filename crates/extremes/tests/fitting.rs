use approx::assert_relative_eq;
use hydrostat_extremes::{DistributionFamily, FitError, TailRole, empirical_plotting_positions, fit};
use hydrostat_series::{AnnualExtremeSeries, HalfYearRecord};

/// 30 synthetic years spread evenly over [80, 150].
fn uniform_years() -> Vec<f64> {
    (0..30).map(|i| 80.0 + 70.0 * (i as f64 + 0.5) / 30.0).collect()
}

/// Right-skewed positive sample (log-normal quantiles).
fn skewed_years() -> Vec<f64> {
    (1..=40)
        .map(|i| {
            let u = i as f64 / 41.0;
            // rough normal quantile via logit
            let z = (u / (1.0 - u)).ln() * 0.6;
            (3.0 + 0.5 * z).exp()
        })
        .collect()
}

#[test]
fn gev_accepts_uniform_sample() {
    let sample = uniform_years();
    let gev = fit(DistributionFamily::GeneralizedExtremeValue, &sample).unwrap();
    let gof = gev.goodness_of_fit(&sample).unwrap();
    assert!(gof.p_value > 0.05, "KS p-value {} (D = {})", gof.p_value, gof.statistic);
}

#[test]
fn ppf_inverts_cdf_for_every_family() {
    let sample = skewed_years();
    for family in DistributionFamily::ALL {
        let fitted = fit(family, &sample).unwrap();
        for &x in &sample {
            let p = fitted.cdf(x);
            if p <= 1e-9 || p >= 1.0 - 1e-9 {
                continue;
            }
            let back = fitted.ppf(p).unwrap();
            assert_relative_eq!(back, x, max_relative = 1e-6);
        }
    }
}

#[test]
fn every_family_fits_skewed_sample() {
    let sample = skewed_years();
    for family in DistributionFamily::ALL {
        let fitted = fit(family, &sample).unwrap();
        let gof = fitted.goodness_of_fit(&sample).unwrap();
        assert!(gof.statistic < 0.2, "{family}: D = {}", gof.statistic);
        assert_eq!(fitted.return_values().len(), fitted.probabilities().len());
    }
}

#[test]
fn fisher_tippett_uses_annual_minima() {
    let records: Vec<HalfYearRecord> = (0..15)
        .map(|i| {
            let f = i as f64;
            HalfYearRecord {
                station_id: 1,
                year: 1990 + i,
                winter_min: 4.0 + (f * 1.7) % 3.0,
                winter_mean: 20.0,
                winter_max: 150.0 + (f * 37.0) % 90.0,
                summer_min: 2.0 + (f * 2.3) % 4.0,
                summer_mean: 15.0,
                summer_max: 90.0 + (f * 53.0) % 120.0,
                year_mean: 18.0,
            }
        })
        .collect();
    let extremes = AnnualExtremeSeries::from_half_years(&records);
    let family = DistributionFamily::FisherTippett;
    assert_eq!(family.role(), TailRole::NonExceedance);

    let minima = family.sample(&extremes);
    assert!(minima.iter().all(|&m| m < 10.0));
    let fitted = fit(family, &minima).unwrap();
    // the 1% non-exceedance flow sits below the median
    assert!(fitted.return_value(0.01).unwrap() < fitted.return_value(0.5).unwrap());
}

#[test]
fn short_series_is_reported_per_family() {
    let sample = &uniform_years()[..8];
    for family in DistributionFamily::ALL {
        assert!(matches!(
            fit(family, sample),
            Err(FitError::InsufficientSample { n: 8, min: 10 })
        ));
    }
}

#[test]
fn plotting_positions_span_open_interval() {
    let sample = uniform_years();
    let pos = empirical_plotting_positions(&sample, TailRole::Exceedance);
    assert_eq!(pos.len(), 30);
    assert_relative_eq!(pos[0].probability, 1.0 / 31.0, epsilon = 1e-12);
    assert_relative_eq!(pos[29].percent, 100.0 / 31.0, epsilon = 1e-9);
}
