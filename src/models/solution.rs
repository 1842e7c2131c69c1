//! Solution state and violation types.

use std::time::Duration;

use crate::distance::DistanceMatrix;

use super::Route;

/// A type of invariant violation in a solution state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route load exceeds vehicle capacity.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i32,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// Customer is neither routed nor unassigned.
    MissingCustomer {
        /// Customer ID.
        customer_id: usize,
    },
    /// Customer appears more than once across routes and the unassigned pool.
    DuplicateCustomer {
        /// Customer ID.
        customer_id: usize,
        /// Number of occurrences found.
        occurrences: usize,
    },
    /// Id outside `[1, dimension)` (including the depot) placed in a route
    /// or the unassigned pool.
    UnknownCustomer {
        /// Offending ID.
        customer_id: usize,
    },
}

/// An invariant violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Partition of customers into routes plus an unassigned pool.
///
/// Every customer id in `[1, dimension)` is expected in exactly one route or
/// in `unassigned`. Cost is derived from the routes on demand; nothing is
/// cached, so a cloned state can never carry a stale cost.
///
/// # Examples
///
/// ```
/// use cvrp_alns::models::{Route, SolutionState};
/// use cvrp_alns::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let sol = SolutionState::new(vec![Route::from(vec![1]), Route::from(vec![2])], vec![]);
/// assert_eq!(sol.num_routes(), 2);
/// // (0→1→0) + (0→2→0) = 2 + 4
/// assert!((sol.cost(&dm) - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolutionState {
    routes: Vec<Route>,
    unassigned: Vec<usize>,
    elapsed: Option<Duration>,
}

impl SolutionState {
    /// Creates a state from routes and an unassigned pool.
    pub fn new(routes: Vec<Route>, unassigned: Vec<usize>) -> Self {
        Self {
            routes,
            unassigned,
            elapsed: None,
        }
    }

    /// Creates a state from raw customer id sequences.
    pub fn from_sequences(routes: Vec<Vec<usize>>, unassigned: Vec<usize>) -> Self {
        Self::new(routes.into_iter().map(Route::from).collect(), unassigned)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    pub fn unassigned(&self) -> &[usize] {
        &self.unassigned
    }

    pub fn unassigned_mut(&mut self) -> &mut Vec<usize> {
        &mut self.unassigned
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of customers currently routed.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Index of the route containing `customer`.
    pub fn find_route(&self, customer: usize) -> Option<usize> {
        self.routes.iter().position(|r| r.contains(customer))
    }

    /// Total travel cost across all routes.
    pub fn cost(&self, distances: &DistanceMatrix) -> f64 {
        self.routes.iter().map(|r| r.cost(distances)).sum()
    }

    /// Removes empty routes.
    pub fn remove_empty_routes(&mut self) {
        self.routes.retain(|r| !r.is_empty());
    }

    /// Routes as plain id sequences, for reporting.
    pub fn route_sequences(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.customers().to_vec()).collect()
    }

    /// Wall-clock time spent producing this state, if recorded.
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }
}
