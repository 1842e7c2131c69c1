//! ALNS execution loop.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, trace};

use crate::constructive::nearest_neighbor;
use crate::error::Result;
use crate::evaluation::SolutionEvaluator;
use crate::models::{ProblemInstance, SolutionState};
use crate::random::{create_rng, resolve_seed};

use super::acceptance::RecordToRecord;
use super::config::AlnsConfig;
use super::destroy::StringRemoval;
use super::repair::GreedyInsertion;
use super::stopping::StoppingCriterion;
use super::types::{AcceptanceCriterion, DestroyOperator, Outcome, RepairOperator};

/// Result of an ALNS optimization run.
#[derive(Debug, Clone)]
pub struct AlnsResult {
    /// The best solution found, with its solve time recorded.
    pub best: SolutionState,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the constructed starting solution.
    pub initial_cost: f64,

    /// Number of destroy-repair iterations performed.
    pub iterations: usize,

    /// Number of new best solutions found.
    pub improvements: usize,

    /// Total wall-clock time including construction.
    pub elapsed: Duration,

    /// Seed the run was started with; `None` for runs driven by a
    /// caller-supplied random stream.
    pub seed: Option<u64>,

    /// Best cost after each improvement, starting with the initial cost.
    pub cost_history: Vec<f64>,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the destroy-repair loop.
pub struct AlnsRunner;

impl AlnsRunner {
    /// Runs the string-removal ALNS on `instance`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvrp_alns::models::{Customer, ProblemInstance};
    /// use cvrp_alns::alns::{AlnsConfig, AlnsRunner};
    ///
    /// let customers = vec![
    ///     Customer::depot(0.0, 0.0),
    ///     Customer::new(1, 1.0, 0.0, 3),
    ///     Customer::new(2, 2.0, 0.0, 3),
    ///     Customer::new(3, 0.0, 1.0, 4),
    ///     Customer::new(4, 0.0, 2.0, 4),
    /// ];
    /// let instance = ProblemInstance::from_customers(&customers, 10).unwrap();
    /// let config = AlnsConfig::default()
    ///     .with_max_plateau_iterations(200)
    ///     .with_seed(42);
    ///
    /// let result = AlnsRunner::run(&instance, &config).unwrap();
    /// assert!(result.best.unassigned().is_empty());
    /// assert!(result.best_cost <= result.initial_cost);
    /// ```
    pub fn run(instance: &ProblemInstance, config: &AlnsConfig) -> Result<AlnsResult> {
        Self::run_inner(instance, config, None)
    }

    /// Runs with a cancellation flag checked once per iteration.
    pub fn run_with_cancel(
        instance: &ProblemInstance,
        config: &AlnsConfig,
        cancel: Arc<AtomicBool>,
    ) -> Result<AlnsResult> {
        Self::run_inner(instance, config, Some(cancel))
    }

    fn run_inner(
        instance: &ProblemInstance,
        config: &AlnsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AlnsResult> {
        config.validate()?;

        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);

        let destroy = StringRemoval::from_config(config);
        let mut acceptance = RecordToRecord::from_config(config);
        let mut stop = StoppingCriterion::from_config(config);
        if let Some(flag) = cancel {
            stop = stop.with_cancel(flag);
        }

        info!(
            instance = instance.name(),
            customers = instance.num_customers(),
            seed,
            "starting ALNS"
        );

        let mut result = Self::run_with(
            instance,
            &destroy,
            &GreedyInsertion,
            &mut acceptance,
            &mut stop,
            &mut rng,
        );
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs the loop with caller-supplied components.
    ///
    /// Builds the initial solution by nearest neighbor, then repeats
    /// destroy → repair → accept until `stop` fires. `acceptance` and `stop`
    /// are reset at the start of the run.
    pub fn run_with<D, RP, A, R>(
        instance: &ProblemInstance,
        destroy: &D,
        repair: &RP,
        acceptance: &mut A,
        stop: &mut StoppingCriterion,
        rng: &mut R,
    ) -> AlnsResult
    where
        D: DestroyOperator,
        RP: RepairOperator,
        A: AcceptanceCriterion,
        R: Rng,
    {
        let start = Instant::now();
        let distances = instance.distances();

        let mut current = nearest_neighbor(instance);
        let mut current_cost = current.cost(distances);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let initial_cost = best_cost;

        acceptance.reset(best_cost);
        stop.reset();

        let mut iterations = 0usize;
        let mut improvements = 0usize;
        let mut cost_history = vec![best_cost];

        while !stop.should_stop(best_cost) {
            let destroyed = destroy.destroy(instance, &current, rng);
            let candidate = repair.repair(instance, destroyed, rng);
            debug_assert!(
                SolutionEvaluator::new(instance).is_complete(&candidate),
                "{} produced an incomplete or infeasible solution",
                repair.name()
            );
            let candidate_cost = candidate.cost(distances);

            let outcome = acceptance.evaluate(best_cost, current_cost, candidate_cost);
            trace!(iteration = iterations, candidate_cost, ?outcome);

            match outcome {
                Outcome::NewBest => {
                    debug_assert!(candidate_cost < best_cost);
                    best = candidate.clone();
                    best_cost = candidate_cost;
                    current = candidate;
                    current_cost = candidate_cost;
                    improvements += 1;
                    cost_history.push(best_cost);
                    debug!(iteration = iterations, best_cost, "new best solution");
                }
                Outcome::Accepted => {
                    current = candidate;
                    current_cost = candidate_cost;
                }
                Outcome::Rejected => {}
            }

            iterations += 1;
        }

        let elapsed = start.elapsed();
        best.set_elapsed(elapsed);

        info!(
            initial_cost,
            best_cost,
            iterations,
            improvements,
            routes = best.num_routes(),
            elapsed_ms = elapsed.as_millis() as u64,
            "ALNS finished"
        );

        AlnsResult {
            best,
            best_cost,
            initial_cost,
            iterations,
            improvements,
            elapsed,
            seed: None,
            cost_history,
            cancelled: stop.is_cancelled(),
        }
    }
}
