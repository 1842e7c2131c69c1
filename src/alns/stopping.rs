//! Plateau and wall-clock stopping rule.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::config::AlnsConfig;

/// Stops the search on a plateau, on timeout, or on external cancellation.
///
/// Each [`should_stop`](Self::should_stop) call compares the current best
/// cost against the best seen so far: an improvement resets the plateau
/// counter, anything else increments it. The search stops when the counter
/// reaches `max_plateau_iterations` or the elapsed time since the last
/// [`reset`](Self::reset) exceeds `max_runtime`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cvrp_alns::alns::StoppingCriterion;
///
/// let mut stop = StoppingCriterion::new(2, Duration::from_secs(60));
/// stop.reset();
/// assert!(!stop.should_stop(10.0)); // first observation
/// assert!(!stop.should_stop(10.0)); // plateau 1
/// assert!(stop.should_stop(10.0));  // plateau 2
/// ```
#[derive(Debug, Clone)]
pub struct StoppingCriterion {
    max_plateau_iterations: usize,
    max_runtime: Duration,
    target: Option<f64>,
    plateau: usize,
    start: Instant,
    cancel: Option<Arc<AtomicBool>>,
}

impl StoppingCriterion {
    /// Creates a criterion; the clock starts at the next [`reset`](Self::reset).
    pub fn new(max_plateau_iterations: usize, max_runtime: Duration) -> Self {
        Self {
            max_plateau_iterations,
            max_runtime,
            target: None,
            plateau: 0,
            start: Instant::now(),
            cancel: None,
        }
    }

    /// Creates the criterion from a validated configuration.
    pub fn from_config(config: &AlnsConfig) -> Self {
        Self::new(config.max_plateau_iterations, config.max_runtime())
    }

    /// Also stop as soon as `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Clears the best-seen cost and plateau counter and restarts the clock.
    pub fn reset(&mut self) {
        self.target = None;
        self.plateau = 0;
        self.start = Instant::now();
    }

    /// Records `best_cost` and reports whether the search should stop.
    pub fn should_stop(&mut self, best_cost: f64) -> bool {
        match self.target {
            Some(target) if best_cost >= target => self.plateau += 1,
            _ => {
                self.target = Some(best_cost);
                self.plateau = 0;
            }
        }

        self.plateau >= self.max_plateau_iterations
            || self.start.elapsed() > self.max_runtime
            || self.is_cancelled()
    }

    /// Consecutive checks without improvement.
    pub fn plateau(&self) -> usize {
        self.plateau
    }

    /// Time since the last reset.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether the cancel flag is set.
    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plateau_counts_non_improving_checks() {
        let mut stop = StoppingCriterion::new(3, Duration::from_secs(60));
        stop.reset();
        assert!(!stop.should_stop(10.0));
        assert_eq!(stop.plateau(), 0);
        assert!(!stop.should_stop(10.0));
        assert!(!stop.should_stop(10.0));
        assert_eq!(stop.plateau(), 2);
        assert!(stop.should_stop(10.0));
    }

    #[test]
    fn test_improvement_resets_plateau() {
        let mut stop = StoppingCriterion::new(2, Duration::from_secs(60));
        stop.reset();
        assert!(!stop.should_stop(10.0));
        assert!(!stop.should_stop(10.0));
        assert!(!stop.should_stop(9.0));
        assert_eq!(stop.plateau(), 0);
        assert!(!stop.should_stop(9.0));
        assert!(stop.should_stop(9.0));
    }

    #[test]
    fn test_timeout_stops() {
        let mut stop = StoppingCriterion::new(usize::MAX, Duration::from_millis(1));
        stop.reset();
        std::thread::sleep(Duration::from_millis(5));
        assert!(stop.should_stop(10.0));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut stop = StoppingCriterion::new(1, Duration::from_secs(60));
        stop.reset();
        stop.should_stop(10.0);
        assert!(stop.should_stop(10.0));
        stop.reset();
        assert!(!stop.should_stop(10.0));
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut stop =
            StoppingCriterion::new(usize::MAX, Duration::from_secs(60)).with_cancel(flag.clone());
        stop.reset();
        assert!(!stop.should_stop(10.0));
        flag.store(true, Ordering::Relaxed);
        assert!(stop.should_stop(10.0));
        assert!(stop.is_cancelled());
    }
}
