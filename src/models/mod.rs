//! Domain model types for capacitated vehicle routing.
//!
//! Provides the core abstractions: customers with demands, the immutable
//! problem instance, routes as ordered customer sequences, and the mutable
//! solution state the search operates on.

mod customer;
mod problem;
mod route;
mod solution;

pub use customer::Customer;
pub use problem::ProblemInstance;
pub use route::Route;
pub use solution::{SolutionState, Violation, ViolationType};
