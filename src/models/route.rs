//! Route type.

use crate::distance::DistanceMatrix;

use super::ProblemInstance;

const DEPOT: usize = 0;

/// An ordered sequence of customers served by one vehicle.
///
/// The depot is not stored; every route implicitly starts and ends there.
///
/// # Examples
///
/// ```
/// use cvrp_alns::models::Route;
/// use cvrp_alns::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let route = Route::from(vec![1, 2]);
/// // 0→1→2→0 = 1 + 1 + 2
/// assert!((route.cost(&dm) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    customers: Vec<usize>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Customer ids in visit order.
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Number of customer visits (depot excluded).
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn contains(&self, customer: usize) -> bool {
        self.customers.contains(&customer)
    }

    /// Position of `customer` within this route.
    pub fn position(&self, customer: usize) -> Option<usize> {
        self.customers.iter().position(|&c| c == customer)
    }

    /// Appends a customer at the end of the route.
    pub fn push(&mut self, customer: usize) {
        self.customers.push(customer);
    }

    /// Inserts a customer before position `pos` (`pos == len` appends).
    pub fn insert(&mut self, pos: usize, customer: usize) {
        self.customers.insert(pos, customer);
    }

    /// Removes and returns the customer at `pos`.
    pub fn remove(&mut self, pos: usize) -> usize {
        self.customers.remove(pos)
    }

    /// Node flanking insertion position `pos` on the left.
    fn pred(&self, pos: usize) -> usize {
        if pos == 0 {
            DEPOT
        } else {
            self.customers[pos - 1]
        }
    }

    /// Node flanking insertion position `pos` on the right.
    fn succ(&self, pos: usize) -> usize {
        if pos == self.customers.len() {
            DEPOT
        } else {
            self.customers[pos]
        }
    }

    /// Travel cost of the closed tour depot → customers → depot.
    ///
    /// An empty route costs nothing.
    pub fn cost(&self, distances: &DistanceMatrix) -> f64 {
        let (Some(&first), Some(&last)) = (self.customers.first(), self.customers.last()) else {
            return 0.0;
        };
        let inner: f64 = self
            .customers
            .windows(2)
            .map(|w| distances.get(w[0], w[1]))
            .sum();
        distances.get(DEPOT, first) + inner + distances.get(last, DEPOT)
    }

    /// Total demand served by this route.
    pub fn load(&self, instance: &ProblemInstance) -> i32 {
        self.customers.iter().map(|&c| instance.demand(c)).sum()
    }

    /// Cost increase of inserting `customer` before position `pos`.
    ///
    /// `d(pred, c) + d(c, succ) - d(pred, succ)`, with the depot standing in
    /// at either end of the route.
    pub fn insertion_cost(&self, distances: &DistanceMatrix, customer: usize, pos: usize) -> f64 {
        let pred = self.pred(pos);
        let succ = self.succ(pos);
        distances.get(pred, customer) + distances.get(customer, succ) - distances.get(pred, succ)
    }
}

impl From<Vec<usize>> for Route {
    fn from(customers: Vec<usize>) -> Self {
        Self { customers }
    }
}
