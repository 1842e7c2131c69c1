//! Solution invariant checking and cost evaluation.

mod evaluator;

pub use evaluator::SolutionEvaluator;
