//! SA execution loop.

use super::config::SaConfig;
use crate::random::rng_from_seed;
use crate::search::{
    NoopObserver, SearchError, SearchEvent, SearchObserver, SearchState, StopReason,
};
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best state found. Not necessarily the final current state.
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Cost of the initial state.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    pub stop_reason: StopReason,
}

impl<S: Clone> SaResult<S> {
    /// Cost reduction relative to the initial state. Never negative.
    pub fn improvement(&self) -> f64 {
        self.initial_cost - self.best_cost
    }
}

/// Metropolis acceptance probability of a move changing the cost by
/// `delta` at `temperature`.
///
/// Improving moves (`delta < 0`) and sideways moves (`delta == 0`) get 1.
/// `temperature` must be positive.
#[inline]
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else {
        (-delta / temperature).exp()
    }
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial` with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hospital_siting::grid::{GridConfig, GridState};
    /// use hospital_siting::random::create_rng;
    /// use hospital_siting::sa::{SaConfig, SaRunner};
    ///
    /// let initial = GridState::random(&GridConfig::default(), &mut create_rng(3)).unwrap();
    /// let config = SaConfig::default().with_cooling_rate(0.99).with_seed(42);
    /// let result = SaRunner::run(&initial, &config).unwrap();
    /// assert!(result.best_cost <= initial.total_cost());
    /// ```
    pub fn run<S: SearchState>(initial: &S, config: &SaConfig) -> Result<SaResult<S>, SearchError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(initial, config, &mut rng)
    }

    /// Runs SA drawing from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<S: SearchState, R: Rng>(
        initial: &S,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<S>, SearchError> {
        Self::run_observed(initial, config, rng, &mut NoopObserver)
    }

    /// Runs SA, reporting events to `observer`.
    ///
    /// The configuration is validated before anything else; in particular
    /// a non-positive `min_temperature` is rejected since the temperature
    /// would otherwise reach zero inside the acceptance formula.
    #[tracing::instrument(level = "debug", name = "Simulated Annealing", skip_all)]
    pub fn run_observed<S, R, O>(
        initial: &S,
        config: &SaConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SaResult<S>, SearchError>
    where
        S: SearchState,
        R: Rng,
        O: SearchObserver<S>,
    {
        config.validate()?;

        let initial_cost = initial.cost();
        let mut current = initial.clone();
        let mut current_cost = initial_cost;
        let mut best = initial.clone();
        let mut best_cost = initial_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut stop_reason = StopReason::Frozen;

        tracing::debug!(initial_cost, temperature, "starting");
        observer.on_event(SearchEvent::Started {
            state: initial,
            cost: initial_cost,
        });

        while temperature > config.min_temperature {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                stop_reason = StopReason::IterationLimit;
                break;
            }

            let iteration = iterations;
            let neighbor = current.neighbor(rng);
            let neighbor_cost = neighbor.cost();
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    tracing::debug!(iteration, best_cost, temperature, "new best");
                    observer.on_event(SearchEvent::Improved {
                        iteration,
                        state: &best,
                        cost: best_cost,
                    });
                }
            }

            temperature *= config.cooling_rate;
            iterations += 1;

            if config.report_interval > 0 && iterations % config.report_interval == 0 {
                tracing::trace!(iteration, current_cost, temperature, "progress");
                observer.on_event(SearchEvent::Progress {
                    iteration,
                    state: &current,
                    cost: current_cost,
                    temperature: Some(temperature),
                });
            }
        }

        tracing::debug!(
            iterations,
            best_cost,
            final_temperature = temperature,
            accepted_moves,
            %stop_reason,
            "finished"
        );
        observer.on_event(SearchEvent::Finished {
            best: &best,
            best_cost,
            iterations,
            stop_reason,
        });

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            stop_reason,
        })
    }
}
