//! ALNS configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Configuration for the string-removal ALNS.
///
/// # Acceptance Criterion
///
/// Record-to-record travel: a candidate becomes the current solution when it
/// is within `threshold` of the best known cost. The threshold starts at
/// `start_gap * C0` (C0 = initial cost) and decreases linearly over
/// `num_steps` consulted evaluations down to `end_gap * C0`.
///
/// # Stopping
///
/// The run stops after `max_plateau_iterations` consecutive iterations
/// without a new best, or once `max_runtime_secs` of wall-clock time have
/// elapsed, whichever comes first.
///
/// # Destroy
///
/// Each destroy call removes up to `max_string_removals` strings, one per
/// touched route, each at most `max_string_size` customers long.
///
/// # Examples
///
/// ```
/// use cvrp_alns::alns::AlnsConfig;
///
/// let config = AlnsConfig::default()
///     .with_gaps(0.05, 0.0)
///     .with_num_steps(10_000)
///     .with_max_plateau_iterations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlnsConfig {
    /// Initial acceptance gap as a fraction of the initial cost.
    pub start_gap: f64,

    /// Final acceptance gap as a fraction of the initial cost.
    pub end_gap: f64,

    /// Number of threshold decrements from start to end gap.
    pub num_steps: usize,

    /// Consecutive non-improving iterations before stopping.
    pub max_plateau_iterations: usize,

    /// Wall-clock budget in seconds.
    pub max_runtime_secs: f64,

    /// Maximum number of strings (and routes touched) per destroy call.
    pub max_string_removals: usize,

    /// Maximum number of contiguous customers per removed string.
    pub max_string_size: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AlnsConfig {
    fn default() -> Self {
        Self {
            start_gap: 0.02,
            end_gap: 0.0,
            num_steps: 6000,
            max_plateau_iterations: 2500,
            max_runtime_secs: 30.0,
            max_string_removals: 2,
            max_string_size: 12,
            seed: None,
        }
    }
}

impl AlnsConfig {
    /// Sets the start and end acceptance gaps.
    pub fn with_gaps(mut self, start: f64, end: f64) -> Self {
        self.start_gap = start;
        self.end_gap = end;
        self
    }

    /// Sets the number of threshold decrements.
    pub fn with_num_steps(mut self, n: usize) -> Self {
        self.num_steps = n;
        self
    }

    /// Sets the plateau length that stops the search.
    pub fn with_max_plateau_iterations(mut self, n: usize) -> Self {
        self.max_plateau_iterations = n;
        self
    }

    /// Sets the wall-clock budget in seconds.
    pub fn with_max_runtime_secs(mut self, secs: f64) -> Self {
        self.max_runtime_secs = secs;
        self
    }

    /// Sets the string count and string length limits of the destroy step.
    pub fn with_string_removal(mut self, max_removals: usize, max_size: usize) -> Self {
        self.max_string_removals = max_removals;
        self.max_string_size = max_size;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Wall-clock budget as a [`Duration`].
    ///
    /// Budgets too large for a `Duration` saturate to [`Duration::MAX`].
    /// Only meaningful on a validated configuration.
    pub fn max_runtime(&self) -> Duration {
        Duration::try_from_secs_f64(self.max_runtime_secs).unwrap_or(Duration::MAX)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.start_gap.is_finite() || self.start_gap < 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "start_gap must be finite and non-negative, got {}",
                self.start_gap
            )));
        }
        if !self.end_gap.is_finite() || self.end_gap < 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "end_gap must be finite and non-negative, got {}",
                self.end_gap
            )));
        }
        if self.start_gap < self.end_gap {
            return Err(RoutingError::InvalidConfig(format!(
                "start_gap ({}) must be >= end_gap ({})",
                self.start_gap, self.end_gap
            )));
        }
        if self.num_steps == 0 {
            return Err(RoutingError::InvalidConfig("num_steps must be positive".into()));
        }
        if self.max_plateau_iterations == 0 {
            return Err(RoutingError::InvalidConfig(
                "max_plateau_iterations must be positive".into(),
            ));
        }
        if !self.max_runtime_secs.is_finite() || self.max_runtime_secs <= 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "max_runtime_secs must be finite and positive, got {}",
                self.max_runtime_secs
            )));
        }
        if self.max_string_removals == 0 {
            return Err(RoutingError::InvalidConfig(
                "max_string_removals must be positive".into(),
            ));
        }
        if self.max_string_size == 0 {
            return Err(RoutingError::InvalidConfig("max_string_size must be positive".into()));
        }
        Ok(())
    }
}
