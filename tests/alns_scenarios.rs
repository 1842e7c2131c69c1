use std::time::Duration;

use cvrp_alns::alns::{
    AcceptanceCriterion, AlnsConfig, AlnsRunner, DestroyOperator, GreedyInsertion, Outcome,
    RepairOperator, StoppingCriterion, StringRemoval,
};
use cvrp_alns::constructive::nearest_neighbor;
use cvrp_alns::evaluation::SolutionEvaluator;
use cvrp_alns::models::{Customer, ProblemInstance};
use cvrp_alns::random::create_rng;

fn toy() -> ProblemInstance {
    let customers = vec![
        Customer::depot(0.0, 0.0),
        Customer::new(1, 1.0, 0.0, 3),
        Customer::new(2, 2.0, 0.0, 3),
        Customer::new(3, 0.0, 1.0, 4),
        Customer::new(4, 0.0, 2.0, 4),
        Customer::new(5, 1.0, 1.0, 2),
    ];
    ProblemInstance::from_customers(&customers, 10).expect("valid toy instance")
}

struct RejectAll;

impl AcceptanceCriterion for RejectAll {
    fn reset(&mut self, _initial_cost: f64) {}

    fn evaluate(&mut self, _best: f64, _current: f64, _candidate: f64) -> Outcome {
        Outcome::Rejected
    }
}

#[test]
fn toy_instance_end_to_end() {
    let instance = toy();
    let config = AlnsConfig::default()
        .with_max_plateau_iterations(500)
        .with_max_runtime_secs(10.0)
        .with_seed(2024);

    let initial = nearest_neighbor(&instance);
    let initial_cost = initial.cost(instance.distances());

    let result = AlnsRunner::run(&instance, &config).expect("valid config");
    let evaluator = SolutionEvaluator::new(&instance);
    let (cost, violations) = evaluator.evaluate(&result.best);

    assert!(violations.is_empty(), "{violations:?}");
    assert!(result.best.unassigned().is_empty());
    assert_eq!(result.best.num_served(), 5);
    assert!((cost - result.best_cost).abs() < 1e-9);
    assert!((result.initial_cost - initial_cost).abs() < 1e-9);
    assert!(result.best_cost <= initial_cost + 1e-9);
    // Total demand 16 with capacity 10 needs two vehicles
    assert!(result.best.num_routes() >= 2);
}

#[test]
fn repeated_destroy_repair_keeps_partition() {
    let instance = toy();
    let evaluator = SolutionEvaluator::new(&instance);
    let destroy = StringRemoval::new(2, 12);
    let mut rng = create_rng(99);

    let mut solution = nearest_neighbor(&instance);
    for _ in 0..200 {
        let destroyed = destroy.destroy(&instance, &solution, &mut rng);
        assert!(evaluator.check_partition(&destroyed).is_empty());
        solution = GreedyInsertion.repair(&instance, destroyed, &mut rng);
        assert!(evaluator.is_complete(&solution));
    }
}

#[test]
fn plateau_stops_after_exact_iteration_count() {
    let instance = toy();
    let mut stop = StoppingCriterion::new(5, Duration::from_secs(60));
    let mut rng = create_rng(1);

    let result = AlnsRunner::run_with(
        &instance,
        &StringRemoval::new(2, 12),
        &GreedyInsertion,
        &mut RejectAll,
        &mut stop,
        &mut rng,
    );

    assert_eq!(result.iterations, 5);
    assert_eq!(result.improvements, 0);
    assert_eq!(
        result.best.route_sequences(),
        nearest_neighbor(&instance).route_sequences()
    );
    assert_eq!(result.cost_history, vec![result.initial_cost]);
}

#[test]
fn runtime_limit_stops_long_plateau() {
    let instance = toy();
    let config = AlnsConfig::default()
        .with_max_plateau_iterations(usize::MAX)
        .with_max_runtime_secs(0.05)
        .with_seed(3);

    let result = AlnsRunner::run(&instance, &config).expect("valid config");
    assert!(result.elapsed >= Duration::from_millis(50));
    assert!(result.iterations > 0);
}

#[test]
fn fixed_seed_is_reproducible() {
    let instance = toy();
    let config = AlnsConfig::default()
        .with_max_plateau_iterations(300)
        .with_seed(77);

    let a = AlnsRunner::run(&instance, &config).expect("valid config");
    let b = AlnsRunner::run(&instance, &config).expect("valid config");
    assert_eq!(a.best.route_sequences(), b.best.route_sequences());
    assert_eq!(a.best_cost, b.best_cost);
    assert_eq!(a.iterations, b.iterations);
}

#[test]
fn best_cost_never_increases() {
    let instance = toy();
    let config = AlnsConfig::default()
        .with_gaps(0.5, 0.0)
        .with_num_steps(100)
        .with_max_plateau_iterations(300)
        .with_seed(5);

    let result = AlnsRunner::run(&instance, &config).expect("valid config");
    assert!(result
        .cost_history
        .windows(2)
        .all(|pair| pair[1] < pair[0]));
    assert_eq!(result.cost_history.len(), result.improvements + 1);
}
