//! Dense distance matrix.

use crate::models::Customer;

/// A dense n×n distance matrix stored in row-major order.
///
/// Index 0 is the depot; indices `1..n` are customers.
///
/// # Examples
///
/// ```
/// use cvrp_alns::models::Customer;
/// use cvrp_alns::distance::DistanceMatrix;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, 10),
///     Customer::new(2, 6.0, 8.0, 20),
/// ];
/// let dm = DistanceMatrix::from_customers(&customers);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from customer coordinates.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let n = customers.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = customers[i].distance_to(&customers[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes a Euclidean distance matrix from raw `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let n = coords.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = coords[i].0 - coords[j].0;
                let dy = coords[i].1 - coords[j].1;
                let d = (dx * dx + dy * dy).sqrt();
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Customers ranked by ascending distance from `from`, depot excluded.
    ///
    /// When `from` is itself a customer it ranks first (distance zero on the
    /// diagonal). Ties keep ascending id order.
    pub fn neighbors(&self, from: usize) -> Vec<usize> {
        let mut ranked: Vec<usize> = (1..self.size).collect();
        ranked.sort_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customers() -> Vec<Customer> {
        vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 3.0, 4.0, 10),
            Customer::new(2, 0.0, 8.0, 20),
        ]
    }

    #[test]
    fn test_from_customers() {
        let dm = DistanceMatrix::from_customers(&sample_customers());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_coords_matches_customers() {
        let by_customers = DistanceMatrix::from_customers(&sample_customers());
        let by_coords = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]);
        for i in 0..3 {
            for j in 0..3 {
                assert!((by_customers.get(i, j) - by_coords.get(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_customers(&sample_customers());
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_neighbors_excludes_depot() {
        let dm = DistanceMatrix::from_customers(&sample_customers());
        // From depot: 1 at distance 5, 2 at distance 8
        assert_eq!(dm.neighbors(0), vec![1, 2]);
    }

    #[test]
    fn test_neighbors_self_first() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (5.0, 0.0), (2.0, 0.0)]);
        assert_eq!(dm.neighbors(1), vec![1, 3, 2]);
    }

    #[test]
    fn test_neighbors_ties_by_id() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (-1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(dm.neighbors(0), vec![1, 2, 3]);
    }
}
