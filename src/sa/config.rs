//! SA configuration.

use crate::search::SearchError;

/// Configuration for Simulated Annealing with geometric cooling.
///
/// The temperature starts at `initial_temperature` and is multiplied by
/// `cooling_rate` after every iteration; the run ends once it is no longer
/// above `min_temperature`.
///
/// # Examples
///
/// ```
/// use hospital_siting::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_min_temperature(0.01);
/// assert!(config.validate().is_ok());
/// assert!(config.planned_iterations() > 1000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// The algorithm stops when T drops to or below this. Must be positive.
    ///
    /// A value at or above `initial_temperature` is legal and yields a run
    /// with zero iterations.
    pub min_temperature: f64,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Emit a progress event every this many iterations. 0 = never.
    pub report_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            min_temperature: 0.1,
            max_iterations: 0,
            report_interval: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.initial_temperature.is_finite() {
            return Err(SearchError::NonFiniteTemperature(self.initial_temperature));
        }
        if !self.min_temperature.is_finite() {
            return Err(SearchError::NonFiniteTemperature(self.min_temperature));
        }
        if self.min_temperature <= 0.0 {
            return Err(SearchError::NonPositiveMinTemperature(self.min_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SearchError::InvalidCoolingRate(self.cooling_rate));
        }
        Ok(())
    }

    /// Number of iterations the cooling schedule allows before freezing,
    /// ignoring `max_iterations`. Assumes a valid configuration.
    pub fn planned_iterations(&self) -> usize {
        let mut t = self.initial_temperature;
        let mut n = 0usize;
        while t > self.min_temperature {
            t *= self.cooling_rate;
            n += 1;
        }
        n
    }
}
