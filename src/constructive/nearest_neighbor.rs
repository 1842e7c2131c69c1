//! Nearest-neighbor constructive heuristic.
//!
//! Builds routes greedily: starting from the depot, always visit the nearest
//! unvisited customer that still fits. When no unvisited customer fits the
//! remaining capacity, close the route and start a new one.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.

use tracing::debug;

use crate::models::{ProblemInstance, Route, SolutionState};

/// Constructs a feasible solution using the nearest-neighbor heuristic.
///
/// Every customer ends up in exactly one route and no route exceeds the
/// vehicle capacity. The fleet is unbounded: a new route is opened whenever
/// the current one cannot take any remaining customer. Ties in distance go to
/// the lowest customer id.
///
/// # Examples
///
/// ```
/// use cvrp_alns::models::{Customer, ProblemInstance};
/// use cvrp_alns::constructive::nearest_neighbor;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10),
///     Customer::new(2, 2.0, 0.0, 10),
///     Customer::new(3, 3.0, 0.0, 10),
/// ];
/// let instance = ProblemInstance::from_customers(&customers, 30).unwrap();
///
/// let solution = nearest_neighbor(&instance);
/// assert_eq!(solution.num_served(), 3);
/// assert!(solution.unassigned().is_empty());
/// ```
pub fn nearest_neighbor(instance: &ProblemInstance) -> SolutionState {
    let n = instance.dimension();
    let capacity = instance.capacity();

    let mut visited = vec![false; n];
    visited[0] = true; // depot
    let mut remaining = n - 1;

    let mut routes = Vec::new();

    while remaining > 0 {
        let mut route = Route::new();
        let mut current = 0;
        let mut load: i32 = 0;

        loop {
            // Find nearest unvisited customer that fits capacity
            let mut best: Option<(usize, f64)> = None;
            for i in 1..n {
                if visited[i] || load + instance.demand(i) > capacity {
                    continue;
                }
                let d = instance.distance(current, i);
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((i, d));
                }
            }

            match best {
                Some((next, _)) => {
                    visited[next] = true;
                    remaining -= 1;
                    route.push(next);
                    load += instance.demand(next);
                    current = next;
                }
                None => break,
            }
        }

        debug_assert!(
            !route.is_empty(),
            "every customer demand fits an empty vehicle"
        );
        debug_assert!(load <= capacity);
        routes.push(route);
    }

    debug!(routes = routes.len(), "nearest-neighbor construction done");
    SolutionState::new(routes, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::SolutionEvaluator;
    use crate::models::Customer;

    fn line_instance(capacity: i32) -> ProblemInstance {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 10),
            Customer::new(2, 2.0, 0.0, 10),
            Customer::new(3, 3.0, 0.0, 10),
        ];
        ProblemInstance::from_customers(&customers, capacity).expect("valid")
    }

    #[test]
    fn test_nn_all_on_one_route() {
        let instance = line_instance(100);
        let sol = nearest_neighbor(&instance);
        assert_eq!(sol.num_routes(), 1);
        assert_eq!(sol.num_served(), 3);
        // Should visit in order 1, 2, 3 (nearest each time)
        assert_eq!(sol.routes()[0].customers(), &[1, 2, 3]);
        // Distance: 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        assert!((sol.cost(instance.distances()) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_split_routes() {
        let instance = line_instance(20);
        let sol = nearest_neighbor(&instance);
        // Capacity 20: first route takes customers 1, 2 (20), second takes 3 (10)
        assert_eq!(sol.route_sequences(), vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn test_nn_skips_customer_that_does_not_fit() {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 6),
            Customer::new(2, 2.0, 0.0, 6),
            Customer::new(3, 9.0, 0.0, 4),
        ];
        let instance = ProblemInstance::from_customers(&customers, 10).expect("valid");
        let sol = nearest_neighbor(&instance);
        // After 1 (load 6), customer 2 no longer fits but 3 does
        assert_eq!(sol.route_sequences(), vec![vec![1, 3], vec![2]]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let customers = vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 10.0, 0.0, 5), // far
            Customer::new(2, 1.0, 0.0, 5),  // near
        ];
        let instance = ProblemInstance::from_customers(&customers, 100).expect("valid");
        let sol = nearest_neighbor(&instance);
        assert_eq!(sol.routes()[0].customers(), &[2, 1]);
    }

    #[test]
    fn test_nn_is_feasible() {
        let instance = line_instance(10);
        let sol = nearest_neighbor(&instance);
        assert_eq!(sol.num_routes(), 3);
        assert!(SolutionEvaluator::new(&instance).is_complete(&sol));
    }
}
