//! Solution evaluator that checks partition and capacity invariants.

use crate::models::{ProblemInstance, Route, SolutionState, Violation, ViolationType};

/// Evaluates solution states against a problem instance.
///
/// Reports every broken invariant rather than stopping at the first one:
/// capacity overflow per route, and customers missing, duplicated, or
/// foreign to the instance.
///
/// # Examples
///
/// ```
/// use cvrp_alns::models::{Customer, ProblemInstance, SolutionState};
/// use cvrp_alns::evaluation::SolutionEvaluator;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, 10),
///     Customer::new(2, 6.0, 8.0, 20),
/// ];
/// let instance = ProblemInstance::from_customers(&customers, 50).unwrap();
///
/// let evaluator = SolutionEvaluator::new(&instance);
/// let sol = SolutionState::from_sequences(vec![vec![1, 2]], vec![]);
/// let (cost, violations) = evaluator.evaluate(&sol);
/// assert!(violations.is_empty());
/// assert!((cost - 20.0).abs() < 1e-10);
/// ```
pub struct SolutionEvaluator<'a> {
    instance: &'a ProblemInstance,
}

impl<'a> SolutionEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    pub fn new(instance: &'a ProblemInstance) -> Self {
        Self { instance }
    }

    /// Checks one route's load against the vehicle capacity.
    pub fn check_route(&self, route_index: usize, route: &Route) -> Option<Violation> {
        let load = route.load(self.instance);
        let capacity = self.instance.capacity();
        (load > capacity).then(|| {
            Violation::new(ViolationType::CapacityExceeded {
                route_index,
                load,
                capacity,
            })
        })
    }

    /// Checks that every customer appears exactly once across routes and the
    /// unassigned pool.
    pub fn check_partition(&self, solution: &SolutionState) -> Vec<Violation> {
        let dimension = self.instance.dimension();
        let mut seen = vec![0usize; dimension];
        let mut violations = Vec::new();

        let placed = solution
            .routes()
            .iter()
            .flat_map(|r| r.customers().iter().copied())
            .chain(solution.unassigned().iter().copied());

        for cid in placed {
            if cid == 0 || cid >= dimension {
                violations.push(Violation::new(ViolationType::UnknownCustomer {
                    customer_id: cid,
                }));
            } else {
                seen[cid] += 1;
            }
        }

        for (cid, &count) in seen.iter().enumerate().skip(1) {
            match count {
                1 => {}
                0 => violations.push(Violation::new(ViolationType::MissingCustomer {
                    customer_id: cid,
                })),
                occurrences => violations.push(Violation::new(ViolationType::DuplicateCustomer {
                    customer_id: cid,
                    occurrences,
                })),
            }
        }

        violations
    }

    /// Evaluates an entire solution, returning `(cost, violations)`.
    ///
    /// A valid state has an empty violations list.
    pub fn evaluate(&self, solution: &SolutionState) -> (f64, Vec<Violation>) {
        let mut violations: Vec<Violation> = solution
            .routes()
            .iter()
            .enumerate()
            .filter_map(|(idx, route)| self.check_route(idx, route))
            .collect();
        violations.extend(self.check_partition(solution));

        (solution.cost(self.instance.distances()), violations)
    }

    /// Returns `true` when the state covers every customer in capacity-feasible
    /// routes with nothing left unassigned.
    pub fn is_complete(&self, solution: &SolutionState) -> bool {
        solution.unassigned().is_empty() && self.evaluate(solution).1.is_empty()
    }
}
