//! Travel cost matrices.
//!
//! Provides a dense distance matrix for routing problems.

mod matrix;

pub use matrix::DistanceMatrix;
