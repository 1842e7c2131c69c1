//! String-removal ALNS for the CVRP.
//!
//! - [`AlnsRunner`]: destroy-repair loop starting from a nearest-neighbor solution
//! - [`StringRemoval`]: removes circular strings from routes near a random center
//! - [`GreedyInsertion`]: reinserts customers at their cheapest feasible position
//! - [`RecordToRecord`]: acceptance with a linearly decaying threshold
//! - [`StoppingCriterion`]: plateau, wall-clock and cancellation stop
//! - [`solve_multi_start`]: best of several independently seeded runs

mod acceptance;
mod config;
mod destroy;
mod ensemble;
mod repair;
mod runner;
mod stopping;
mod types;

pub use acceptance::RecordToRecord;
pub use config::AlnsConfig;
pub use destroy::StringRemoval;
pub use ensemble::solve_multi_start;
pub use repair::GreedyInsertion;
pub use runner::{AlnsResult, AlnsRunner};
pub use stopping::StoppingCriterion;
pub use types::{AcceptanceCriterion, DestroyOperator, Outcome, RepairOperator};
