//! Hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. Price the initial state
//! 2. At each iteration:
//!    a. Draw one neighbor of the current state
//!    b. Move to it only if its cost is strictly lower
//!    c. Otherwise extend the no-improvement streak
//! 3. Stop when the streak reaches `max_no_improvement` or after
//!    `max_iterations` iterations
//!
//! Equal-cost neighbors are rejected, so plateaus are never crossed.

use super::config::HillClimbingConfig;
use crate::random::rng_from_seed;
use crate::search::{NoopObserver, SearchEvent, SearchObserver, SearchState, StopReason};
use rand::Rng;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbingResult<S: Clone> {
    /// The best state observed (possibly the initial one).
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Cost of the initial state.
    pub initial_cost: f64,

    /// Iterations executed (neighbors drawn).
    pub iterations: usize,

    /// Number of accepted (strictly improving) moves.
    pub improving_moves: usize,

    pub stop_reason: StopReason,
}

impl<S: Clone> HillClimbingResult<S> {
    /// Cost reduction relative to the initial state. Never negative.
    pub fn improvement(&self) -> f64 {
        self.initial_cost - self.best_cost
    }
}

/// Executes hill climbing.
pub struct HillClimbingRunner;

impl HillClimbingRunner {
    /// Runs hill climbing from `initial` with a generator seeded from
    /// `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hospital_siting::grid::{GridConfig, GridState};
    /// use hospital_siting::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
    /// use hospital_siting::random::create_rng;
    ///
    /// let config = GridConfig::default().with_size(10, 10).with_houses(8).with_ambulances(2);
    /// let initial = GridState::random(&config, &mut create_rng(1)).unwrap();
    ///
    /// let result = HillClimbingRunner::run(
    ///     &initial,
    ///     &HillClimbingConfig::default().with_max_iterations(500).with_seed(42),
    /// );
    /// assert!(result.best_cost <= initial.total_cost());
    /// ```
    pub fn run<S: SearchState>(initial: &S, config: &HillClimbingConfig) -> HillClimbingResult<S> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(initial, config, &mut rng)
    }

    /// Runs hill climbing drawing from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<S: SearchState, R: Rng>(
        initial: &S,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> HillClimbingResult<S> {
        Self::run_observed(initial, config, rng, &mut NoopObserver)
    }

    /// Runs hill climbing, reporting events to `observer`.
    #[tracing::instrument(level = "debug", name = "Hill Climbing", skip_all)]
    pub fn run_observed<S, R, O>(
        initial: &S,
        config: &HillClimbingConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> HillClimbingResult<S>
    where
        S: SearchState,
        R: Rng,
        O: SearchObserver<S>,
    {
        let initial_cost = initial.cost();
        let mut current = initial.clone();
        let mut current_cost = initial_cost;
        let mut best = initial.clone();
        let mut best_cost = initial_cost;

        let mut no_improvement = 0usize;
        let mut improving_moves = 0usize;
        let mut iterations = 0usize;
        let mut stop_reason = StopReason::IterationLimit;

        tracing::debug!(initial_cost, "starting");
        observer.on_event(SearchEvent::Started {
            state: initial,
            cost: initial_cost,
        });

        while iterations < config.max_iterations {
            let iteration = iterations;
            let neighbor = current.neighbor(rng);
            let neighbor_cost = neighbor.cost();

            if neighbor_cost < current_cost {
                current = neighbor;
                current_cost = neighbor_cost;
                no_improvement = 0;
                improving_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    tracing::debug!(iteration, best_cost, "new best");
                    observer.on_event(SearchEvent::Improved {
                        iteration,
                        state: &best,
                        cost: best_cost,
                    });
                }
            } else {
                no_improvement += 1;
            }

            iterations += 1;

            if config.report_interval > 0 && iterations % config.report_interval == 0 {
                tracing::trace!(iteration, current_cost, "progress");
                observer.on_event(SearchEvent::Progress {
                    iteration,
                    state: &current,
                    cost: current_cost,
                    temperature: None,
                });
            }

            if no_improvement >= config.max_no_improvement {
                stop_reason = StopReason::Stagnated;
                break;
            }
        }

        tracing::debug!(
            iterations,
            best_cost,
            improvement = initial_cost - best_cost,
            %stop_reason,
            "finished"
        );
        observer.on_event(SearchEvent::Finished {
            best: &best,
            best_cost,
            iterations,
            stop_reason,
        });

        HillClimbingResult {
            best,
            best_cost,
            initial_cost,
            iterations,
            improving_moves,
            stop_reason,
        }
    }
}
