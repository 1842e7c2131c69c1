//! Capacitated routing problem instance.

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};

use super::Customer;

const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Immutable description of one CVRP instance.
///
/// Node 0 is the depot, nodes `1..dimension` are customers. Validated on
/// construction: at least one customer, `demand[0] == 0`, non-negative
/// demands each fitting the vehicle capacity, and a symmetric non-negative
/// matrix with a zero diagonal whose size matches the demand vector. Shared read-only by every run that solves it.
///
/// # Examples
///
/// ```
/// use cvrp_alns::models::{Customer, ProblemInstance};
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 3),
///     Customer::new(2, 2.0, 0.0, 4),
/// ];
/// let instance = ProblemInstance::from_customers(&customers, 10).unwrap();
/// assert_eq!(instance.dimension(), 3);
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.demand(2), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    name: String,
    distances: DistanceMatrix,
    demands: Vec<i32>,
    capacity: i32,
}

impl ProblemInstance {
    /// Creates an instance from an explicit matrix and demand vector.
    pub fn new(distances: DistanceMatrix, demands: Vec<i32>, capacity: i32) -> Result<Self> {
        let dimension = demands.len();
        if dimension <= 1 {
            return Err(RoutingError::InvalidInstance(format!(
                "dimension must include at least one customer, got {dimension}"
            )));
        }
        if distances.size() != dimension {
            return Err(RoutingError::InvalidInstance(format!(
                "distance matrix is {0}x{0} but {dimension} demands were given",
                distances.size()
            )));
        }
        let n = distances.size();
        for i in 0..n {
            if distances.get(i, i) != 0.0 {
                return Err(RoutingError::InvalidInstance(format!(
                    "distance from node {i} to itself must be 0, got {}",
                    distances.get(i, i)
                )));
            }
            for j in 0..n {
                let d = distances.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(RoutingError::InvalidInstance(format!(
                        "distance {i} -> {j} must be finite and non-negative, got {d}"
                    )));
                }
            }
        }
        if !distances.is_symmetric(SYMMETRY_TOLERANCE) {
            return Err(RoutingError::InvalidInstance(
                "distance matrix must be symmetric".into(),
            ));
        }
        if capacity <= 0 {
            return Err(RoutingError::InvalidInstance(format!(
                "capacity must be positive, got {capacity}"
            )));
        }
        if demands[0] != 0 {
            return Err(RoutingError::InvalidInstance(format!(
                "depot demand must be 0, got {}",
                demands[0]
            )));
        }
        if let Some((id, &d)) = demands
            .iter()
            .enumerate()
            .find(|&(_, &d)| d < 0 || d > capacity)
        {
            return Err(RoutingError::InvalidInstance(format!(
                "customer {id} has demand {d} outside [0, {capacity}]"
            )));
        }

        Ok(Self {
            name: String::new(),
            distances,
            demands,
            capacity,
        })
    }

    /// Creates an instance with Euclidean distances between customers.
    ///
    /// `customers[i]` is node `i`; `customers[0]` is the depot.
    pub fn from_customers(customers: &[Customer], capacity: i32) -> Result<Self> {
        let distances = DistanceMatrix::from_customers(customers);
        let demands = customers.iter().map(Customer::demand).collect();
        Self::new(distances, demands, capacity)
    }

    /// Attaches a display name (benchmark instance name).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Instance name, empty when unnamed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node count including the depot.
    pub fn dimension(&self) -> usize {
        self.demands.len()
    }

    /// Customer count (depot excluded).
    pub fn num_customers(&self) -> usize {
        self.demands.len() - 1
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Demand of node `id`.
    pub fn demand(&self, id: usize) -> i32 {
        self.demands[id]
    }

    pub fn demands(&self) -> &[i32] {
        &self.demands
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Travel cost between two nodes.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Customer ids `1..dimension`.
    pub fn customer_ids(&self) -> impl Iterator<Item = usize> {
        1..self.dimension()
    }
}
