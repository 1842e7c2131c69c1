//! String removal destroy operator.
//!
//! Removes short strings of consecutive customers from routes that lie close
//! to a random center customer.
//!
//! # Reference
//!
//! Christiaens, J. & Vanden Berghe, G. (2020). "Slack Induction by String
//! Removals for Vehicle Routing Problems", *Transportation Science* 54(2),
//! 417-433.

use rand::Rng;
use tracing::warn;

use crate::models::{ProblemInstance, Route, SolutionState};

use super::config::AlnsConfig;
use super::types::DestroyOperator;

/// Indices of a window of `size` positions in a circular route of length
/// `len` that covers `target`, `offset` positions in from the window start.
///
/// Requires `1 <= size <= len`, `offset < size` and `target < len`. The
/// returned indices are distinct and sorted in descending order, so they can
/// be removed one after another without invalidating the rest.
pub(crate) fn circular_window(len: usize, target: usize, size: usize, offset: usize) -> Vec<usize> {
    debug_assert!(size >= 1 && size <= len);
    debug_assert!(offset < size);
    debug_assert!(target < len);

    let start = (target + len - offset) % len;
    let mut indices: Vec<usize> = (0..size).map(|k| (start + k) % len).collect();
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices
}

/// Removes strings of customers from routes near a random center.
///
/// Customers are visited in order of distance from the center (the center
/// itself first). For each one still routed, whose route has not yet been
/// touched in this call, a random circular string containing it is removed.
/// The call stops once `min(num_routes, max_string_removals)` routes have
/// been touched.
///
/// # Examples
///
/// ```
/// use cvrp_alns::models::{Customer, ProblemInstance, SolutionState};
/// use cvrp_alns::alns::{DestroyOperator, StringRemoval};
/// use cvrp_alns::random::create_rng;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10),
///     Customer::new(2, 2.0, 0.0, 10),
/// ];
/// let instance = ProblemInstance::from_customers(&customers, 30).unwrap();
/// let sol = SolutionState::from_sequences(vec![vec![1, 2]], vec![]);
///
/// let mut rng = create_rng(42);
/// let destroyed = StringRemoval::new(2, 12).destroy(&instance, &sol, &mut rng);
/// assert!(!destroyed.unassigned().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct StringRemoval {
    max_string_removals: usize,
    max_string_size: usize,
}

impl StringRemoval {
    /// Creates a new string removal operator.
    pub fn new(max_string_removals: usize, max_string_size: usize) -> Self {
        Self {
            max_string_removals: max_string_removals.max(1),
            max_string_size: max_string_size.max(1),
        }
    }

    /// Creates the operator from the string parameters of a configuration.
    pub fn from_config(config: &AlnsConfig) -> Self {
        Self::new(config.max_string_removals, config.max_string_size)
    }

    /// Removes a random circular string containing `customer` from `route`.
    ///
    /// Returns the removed customers in removal order (highest index first).
    fn remove_string<R: Rng>(&self, route: &mut Route, customer: usize, rng: &mut R) -> Vec<usize> {
        let len = route.len();
        let Some(target) = route.position(customer) else {
            return Vec::new();
        };

        let size = rng.random_range(1..=len.min(self.max_string_size));
        let offset = rng.random_range(0..size);

        circular_window(len, target, size, offset)
            .into_iter()
            .map(|idx| route.remove(idx))
            .collect()
    }
}

impl DestroyOperator for StringRemoval {
    fn name(&self) -> &str {
        "string_removal"
    }

    fn destroy<R: Rng>(
        &self,
        instance: &ProblemInstance,
        solution: &SolutionState,
        rng: &mut R,
    ) -> SolutionState {
        let mut sol = solution.clone();
        let max_removals = sol.num_routes().min(self.max_string_removals);

        let center = rng.random_range(1..instance.dimension());
        let mut touched: Vec<usize> = Vec::with_capacity(max_removals);

        for customer in instance.distances().neighbors(center) {
            if touched.len() >= max_removals {
                break;
            }

            // Already-unassigned customers have no route
            let Some(ri) = sol.find_route(customer) else {
                continue;
            };
            if touched.contains(&ri) {
                continue;
            }

            let removed = self.remove_string(&mut sol.routes_mut()[ri], customer, rng);
            sol.unassigned_mut().extend(removed);
            touched.push(ri);
        }

        if touched.is_empty() {
            warn!(center, "string removal touched no route");
        }

        // Route indices stay stable until every string is out
        sol.remove_empty_routes();
        sol
    }
}
