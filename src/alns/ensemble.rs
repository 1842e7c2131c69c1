//! Independent multi-start runs.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use crate::error::{Result, RoutingError};
use crate::models::ProblemInstance;
use crate::random::resolve_seed;

use super::config::AlnsConfig;
use super::runner::{AlnsResult, AlnsRunner};

/// Runs `runs` independent ALNS searches and returns the cheapest result.
///
/// Run `i` uses seed `base + i`, where `base` is the configured seed (or a
/// random one). With the `parallel` feature the runs execute on the rayon
/// thread pool; the result is the same either way for a fixed seed.
pub fn solve_multi_start(
    instance: &ProblemInstance,
    config: &AlnsConfig,
    runs: usize,
) -> Result<AlnsResult> {
    if runs == 0 {
        return Err(RoutingError::InvalidConfig("runs must be positive".into()));
    }
    config.validate()?;

    let base = resolve_seed(config.seed);
    let configs: Vec<AlnsConfig> = (0..runs as u64)
        .map(|i| config.clone().with_seed(base.wrapping_add(i)))
        .collect();

    let results: Vec<AlnsResult> = {
        #[cfg(feature = "parallel")]
        let iter = configs.into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = configs.into_iter();

        iter.map(|cfg| AlnsRunner::run(instance, &cfg))
            .collect::<Result<Vec<_>>>()?
    };

    let best = results
        .into_iter()
        .min_by(|a, b| a.best_cost.total_cmp(&b.best_cost))
        .ok_or_else(|| RoutingError::InvalidConfig("no run completed".into()))?;

    info!(runs, base_seed = base, best_cost = best.best_cost, "multi-start finished");
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::SolutionEvaluator;
    use crate::models::Customer;

    fn setup() -> ProblemInstance {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 3),
            Customer::new(2, 2.0, 0.0, 3),
            Customer::new(3, 0.0, 1.0, 4),
            Customer::new(4, 0.0, 2.0, 4),
            Customer::new(5, 1.0, 1.0, 2),
        ];
        ProblemInstance::from_customers(&customers, 10).expect("valid")
    }

    fn config() -> AlnsConfig {
        AlnsConfig::default()
            .with_max_plateau_iterations(50)
            .with_seed(10)
    }

    #[test]
    fn test_zero_runs_rejected() {
        let instance = setup();
        assert!(matches!(
            solve_multi_start(&instance, &config(), 0),
            Err(RoutingError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_best_of_runs() {
        let instance = setup();
        let best = solve_multi_start(&instance, &config(), 3).expect("valid");
        assert!(SolutionEvaluator::new(&instance).is_complete(&best.best));

        for i in 0..3u64 {
            let single = AlnsRunner::run(&instance, &config().with_seed(10 + i)).expect("valid");
            assert!(best.best_cost <= single.best_cost + 1e-9);
        }
    }

    #[test]
    fn test_single_run_matches_runner() {
        let instance = setup();
        let multi = solve_multi_start(&instance, &config(), 1).expect("valid");
        let single = AlnsRunner::run(&instance, &config()).expect("valid");
        assert_eq!(multi.seed, Some(10));
        assert_eq!(multi.best.route_sequences(), single.best.route_sequences());
    }
}
