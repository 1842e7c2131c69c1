//! Greedy cheapest-insertion repair operator.
//!
//! # Reference
//!
//! Ropke, S. & Pisinger, D. (2006). "An Adaptive Large Neighborhood Search
//! Heuristic for the Pickup and Delivery Problem with Time Windows",
//! *Transportation Science* 40(4), 455-472.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{ProblemInstance, Route, SolutionState};

use super::types::RepairOperator;

/// Finds the cheapest capacity-feasible insertion for a customer.
///
/// `loads[ri]` must hold the current load of `routes[ri]`. Returns
/// `(route_index, position, cost_increase)`; ties keep the first candidate
/// found in route/position order.
fn best_insertion(
    instance: &ProblemInstance,
    routes: &[Route],
    loads: &[i32],
    customer_id: usize,
) -> Option<(usize, usize, f64)> {
    let demand = instance.demand(customer_id);
    let mut best: Option<(usize, usize, f64)> = None;

    for (ri, route) in routes.iter().enumerate() {
        if loads[ri] + demand > instance.capacity() {
            continue;
        }

        for pos in 0..=route.len() {
            let cost = route.insertion_cost(instance.distances(), customer_id, pos);
            if best.as_ref().is_none_or(|b| cost < b.2) {
                best = Some((ri, pos, cost));
            }
        }
    }

    best
}

/// Greedy insertion: inserts each unassigned customer at its cheapest position.
///
/// Unassigned customers are shuffled, then placed one at a time at the
/// feasible (route, position) pair with the lowest insertion cost. A customer
/// that fits nowhere opens a new singleton route, so repair always terminates
/// with every customer routed.
///
/// # Examples
///
/// ```
/// use cvrp_alns::models::{Customer, ProblemInstance, SolutionState};
/// use cvrp_alns::alns::{GreedyInsertion, RepairOperator};
/// use cvrp_alns::random::create_rng;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10),
///     Customer::new(2, 2.0, 0.0, 10),
/// ];
/// let instance = ProblemInstance::from_customers(&customers, 30).unwrap();
/// let destroyed = SolutionState::from_sequences(vec![vec![1]], vec![2]);
///
/// let mut rng = create_rng(42);
/// let repaired = GreedyInsertion.repair(&instance, destroyed, &mut rng);
/// assert!(repaired.unassigned().is_empty());
/// assert_eq!(repaired.num_routes(), 1);
/// assert_eq!(repaired.num_served(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyInsertion;

impl RepairOperator for GreedyInsertion {
    fn name(&self) -> &str {
        "greedy_insertion"
    }

    fn repair<R: Rng>(
        &self,
        instance: &ProblemInstance,
        mut solution: SolutionState,
        rng: &mut R,
    ) -> SolutionState {
        let mut unassigned = std::mem::take(solution.unassigned_mut());
        unassigned.shuffle(rng);

        let mut loads: Vec<i32> = solution.routes().iter().map(|r| r.load(instance)).collect();

        for cid in unassigned {
            match best_insertion(instance, solution.routes(), &loads, cid) {
                Some((ri, pos, _)) => {
                    solution.routes_mut()[ri].insert(pos, cid);
                    loads[ri] += instance.demand(cid);
                    debug_assert!(loads[ri] <= instance.capacity());
                }
                None => {
                    solution.routes_mut().push(Route::from(vec![cid]));
                    loads.push(instance.demand(cid));
                }
            }
        }

        solution
    }
}
