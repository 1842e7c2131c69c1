//! Constructive heuristics for building initial CVRP solutions.
//!
//! - [`nearest_neighbor`]: greedy nearest-neighbor route building, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
