//! Record-to-record travel acceptance with a linearly decaying threshold.
//!
//! # Reference
//!
//! Dueck, G. (1993). "New Optimization Heuristics: The Great Deluge
//! Algorithm and the Record-to-Record Travel", *Journal of Computational
//! Physics* 104(1), 86-92.

use super::config::AlnsConfig;
use super::types::{AcceptanceCriterion, Outcome};

/// Accepts candidates within a shrinking distance of the best known cost.
///
/// On [`reset`](AcceptanceCriterion::reset) with initial cost `C0`:
/// `start = start_gap * C0`, `end = end_gap * C0`,
/// `step = (start - end) / num_steps`. A candidate strictly better than the
/// best becomes the new best outright. Otherwise the threshold is lowered by
/// `step` (never below `end`) and the candidate is accepted as current when
/// `candidate - best <= threshold`.
///
/// # Examples
///
/// ```
/// use cvrp_alns::alns::{AcceptanceCriterion, Outcome, RecordToRecord};
///
/// let mut rrt = RecordToRecord::new(0.1, 0.0, 10);
/// rrt.reset(100.0);
/// assert_eq!(rrt.evaluate(100.0, 100.0, 95.0), Outcome::NewBest);
/// assert_eq!(rrt.evaluate(95.0, 95.0, 100.0), Outcome::Accepted);
/// assert_eq!(rrt.evaluate(95.0, 95.0, 200.0), Outcome::Rejected);
/// ```
#[derive(Debug, Clone)]
pub struct RecordToRecord {
    start_gap: f64,
    end_gap: f64,
    num_steps: usize,
    end_threshold: f64,
    step: f64,
    threshold: f64,
}

impl RecordToRecord {
    /// Creates a criterion; thresholds are set by the first `reset`.
    pub fn new(start_gap: f64, end_gap: f64, num_steps: usize) -> Self {
        Self {
            start_gap,
            end_gap,
            num_steps: num_steps.max(1),
            end_threshold: 0.0,
            step: 0.0,
            threshold: 0.0,
        }
    }

    /// Creates the criterion from the gap parameters of a configuration.
    pub fn from_config(config: &AlnsConfig) -> Self {
        Self::new(config.start_gap, config.end_gap, config.num_steps)
    }

    /// Current acceptance threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Lower bound the threshold decays toward.
    pub fn end_threshold(&self) -> f64 {
        self.end_threshold
    }
}

impl AcceptanceCriterion for RecordToRecord {
    fn reset(&mut self, initial_cost: f64) {
        let start_threshold = self.start_gap * initial_cost;
        self.end_threshold = self.end_gap * initial_cost;
        self.step = (start_threshold - self.end_threshold) / self.num_steps as f64;
        self.threshold = start_threshold;
    }

    fn evaluate(&mut self, best_cost: f64, _current_cost: f64, candidate_cost: f64) -> Outcome {
        if candidate_cost < best_cost {
            return Outcome::NewBest;
        }

        self.threshold = (self.threshold - self.step).max(self.end_threshold);
        if candidate_cost - best_cost <= self.threshold {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_sets_schedule() {
        let mut rrt = RecordToRecord::new(0.02, 0.0, 4);
        rrt.reset(1000.0);
        assert!((rrt.threshold() - 20.0).abs() < 1e-10);
        assert_eq!(rrt.end_threshold(), 0.0);
    }

    #[test]
    fn test_threshold_decrements_per_evaluation() {
        let mut rrt = RecordToRecord::new(0.02, 0.0, 4);
        rrt.reset(1000.0);
        rrt.evaluate(1000.0, 1000.0, 1100.0);
        assert!((rrt.threshold() - 15.0).abs() < 1e-10);
        rrt.evaluate(1000.0, 1000.0, 1100.0);
        assert!((rrt.threshold() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_threshold_clamped_and_monotone() {
        let mut rrt = RecordToRecord::new(0.1, 0.02, 3);
        rrt.reset(100.0);
        let mut previous = rrt.threshold();
        for _ in 0..10 {
            rrt.evaluate(100.0, 100.0, 150.0);
            assert!(rrt.threshold() <= previous);
            assert!(rrt.threshold() >= rrt.end_threshold());
            previous = rrt.threshold();
        }
        assert!((rrt.threshold() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_new_best_does_not_consume_a_step() {
        let mut rrt = RecordToRecord::new(0.1, 0.0, 10);
        rrt.reset(100.0);
        assert_eq!(rrt.evaluate(100.0, 100.0, 90.0), Outcome::NewBest);
        assert!((rrt.threshold() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_accepts_relative_to_best_not_current() {
        let mut rrt = RecordToRecord::new(0.1, 0.0, 10);
        rrt.reset(100.0);
        // Worse than current but within threshold of best
        assert_eq!(rrt.evaluate(100.0, 101.0, 105.0), Outcome::Accepted);
        // Better than current but outside threshold of best
        assert_eq!(rrt.evaluate(100.0, 130.0, 120.0), Outcome::Rejected);
    }

    #[test]
    fn test_equal_to_best_accepted_at_zero_threshold() {
        let mut rrt = RecordToRecord::new(0.0, 0.0, 1);
        rrt.reset(50.0);
        assert_eq!(rrt.evaluate(50.0, 60.0, 50.0), Outcome::Accepted);
        assert_eq!(rrt.evaluate(50.0, 60.0, 50.5), Outcome::Rejected);
    }
}
