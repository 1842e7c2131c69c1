//! Core traits for the destroy-repair loop.

use rand::Rng;

use crate::models::{ProblemInstance, SolutionState};

/// A destroy operator moves part of a solution into the unassigned pool.
///
/// Implementations work on a copy and never mutate the caller's state, so
/// the previously accepted solution stays valid for comparison.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 2
pub trait DestroyOperator: Send + Sync {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Returns a partially destroyed copy of `solution`.
    fn destroy<R: Rng>(
        &self,
        instance: &ProblemInstance,
        solution: &SolutionState,
        rng: &mut R,
    ) -> SolutionState;
}

/// A repair operator reinserts every unassigned customer.
///
/// # References
///
/// Ropke & Pisinger (2006), Section 2
pub trait RepairOperator: Send + Sync {
    /// Returns a human-readable name for this operator.
    fn name(&self) -> &str;

    /// Repairs a destroyed solution; the result has an empty unassigned pool
    /// and capacity-feasible routes.
    fn repair<R: Rng>(
        &self,
        instance: &ProblemInstance,
        solution: SolutionState,
        rng: &mut R,
    ) -> SolutionState;
}

/// Verdict of an acceptance criterion on one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Candidate becomes both best and current.
    NewBest,
    /// Candidate becomes current; best is unchanged.
    Accepted,
    /// Current is left unchanged.
    Rejected,
}

/// Decides whether a repaired candidate replaces the current/best solution.
///
/// Only costs are inspected, never solution structure.
pub trait AcceptanceCriterion {
    /// Prepares the criterion for a new run starting from `initial_cost`.
    fn reset(&mut self, initial_cost: f64);

    /// Judges a candidate. `NewBest` must only be returned when
    /// `candidate_cost < best_cost`.
    fn evaluate(&mut self, best_cost: f64, current_cost: f64, candidate_cost: f64) -> Outcome;
}
