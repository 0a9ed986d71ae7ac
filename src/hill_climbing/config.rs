//! Hill climbing configuration.

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use hospital_siting::hill_climbing::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_max_iterations(2000)
///     .with_max_no_improvement(200)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 2000);
/// assert_eq!(config.max_no_improvement, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Hard cap on the number of iterations.
    pub max_iterations: usize,

    /// Consecutive non-improving iterations before stopping early.
    ///
    /// The check runs after each iteration, so `0` stops after the first
    /// one whatever its outcome.
    pub max_no_improvement: usize,

    /// Emit a progress event every this many iterations. 0 = never.
    pub report_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            max_no_improvement: 100,
            report_interval: 100,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = n;
        self
    }

    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
