//! Nelder-Mead minimization of negative log-likelihoods.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;

/// Minimizes `cost` from `start`, building the initial simplex by stepping
/// each coordinate by `steps[i]`.
///
/// Runs a second pass restarted at the first pass's optimum, which helps the
/// simplex escape a premature collapse near constraint boundaries. Returns
/// the best parameters and their cost.
pub(crate) fn minimize<C>(cost: C, start: &[f64], steps: &[f64]) -> Result<(Vec<f64>, f64), String>
where
    C: CostFunction<Param = Vec<f64>, Output = f64> + Clone,
{
    let (first, _) = run_once(cost.clone(), start, steps)?;
    run_once(cost, &first, steps)
}

fn run_once<C>(cost: C, start: &[f64], steps: &[f64]) -> Result<(Vec<f64>, f64), String>
where
    C: CostFunction<Param = Vec<f64>, Output = f64>,
{
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(start.len() + 1);
    simplex.push(start.to_vec());
    for (i, step) in steps.iter().enumerate() {
        let mut vertex = start.to_vec();
        vertex[i] += step;
        simplex.push(vertex);
    }

    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(1e-10)
        .map_err(|e| e.to_string())?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(2000))
        .run()
        .map_err(|e| e.to_string())?;

    let state = result.state();
    let best = state
        .best_param
        .as_ref()
        .ok_or_else(|| "optimizer returned no parameters".to_string())?;
    let best_cost = state.best_cost;
    if !best_cost.is_finite() || best_cost >= f64::MAX {
        return Err(format!("no valid parameters found (cost {best_cost})"));
    }
    Ok((best.clone(), best_cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Paraboloid;

    impl CostFunction for Paraboloid {
        type Param = Vec<f64>;
        type Output = f64;

        fn cost(&self, p: &Self::Param) -> Result<f64, argmin::core::Error> {
            Ok((p[0] - 1.0).powi(2) + 3.0 * (p[1] + 2.0).powi(2))
        }
    }

    #[test]
    fn finds_minimum() {
        let (best, cost) = minimize(Paraboloid, &[0.0, 0.0], &[0.5, 0.5]).unwrap();
        assert!((best[0] - 1.0).abs() < 1e-4);
        assert!((best[1] + 2.0).abs() < 1e-4);
        assert!(cost < 1e-8);
    }

    #[derive(Clone)]
    struct Infeasible;

    impl CostFunction for Infeasible {
        type Param = Vec<f64>;
        type Output = f64;

        fn cost(&self, _: &Self::Param) -> Result<f64, argmin::core::Error> {
            Ok(f64::MAX)
        }
    }

    #[test]
    fn infeasible_everywhere_is_error() {
        assert!(minimize(Infeasible, &[0.0], &[1.0]).is_err());
    }
}
