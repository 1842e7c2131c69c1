//! # cvrp-alns
//!
//! Capacitated vehicle routing with a string-removal Adaptive Large
//! Neighborhood Search: nearest-neighbor construction, string removal,
//! greedy cheapest insertion and record-to-record acceptance.
//!
//! ## Modules
//!
//! - [`models`]: domain types (Customer, ProblemInstance, Route, SolutionState)
//! - [`distance`]: dense distance matrix and neighbor ranking
//! - [`evaluation`]: partition and capacity checks, cost evaluation
//! - [`constructive`]: nearest-neighbor initial solution
//! - [`alns`]: operators, acceptance, stopping rule and the search loop
//! - [`io`]: CVRPLIB instances, reference solutions, JSON run records
//! - [`random`]: seeded random streams
//!
//! ## Example
//!
//! ```
//! use cvrp_alns::alns::{AlnsConfig, AlnsRunner};
//! use cvrp_alns::models::{Customer, ProblemInstance};
//!
//! let customers = vec![
//!     Customer::depot(0.0, 0.0),
//!     Customer::new(1, 1.0, 0.0, 3),
//!     Customer::new(2, 2.0, 0.0, 3),
//!     Customer::new(3, 0.0, 1.0, 4),
//! ];
//! let instance = ProblemInstance::from_customers(&customers, 10).unwrap();
//! let config = AlnsConfig::default()
//!     .with_max_plateau_iterations(100)
//!     .with_seed(1);
//!
//! let result = AlnsRunner::run(&instance, &config).unwrap();
//! assert_eq!(result.best.num_served(), 3);
//! ```

pub mod alns;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod random;

pub use error::{Result, RoutingError};
