//! Hooks for driver-side effects during a run.
//!
//! The runners never display or export anything themselves. A driver that
//! wants to redraw the grid on every new best, or dump a frame every few
//! iterations, passes a [`SearchObserver`] to `run_observed`.

use super::types::StopReason;

/// Something that happened during a run.
#[derive(Debug)]
pub enum SearchEvent<'a, S> {
    /// Before the first iteration.
    Started { state: &'a S, cost: f64 },

    /// The best-so-far state improved at `iteration`.
    Improved {
        iteration: usize,
        state: &'a S,
        cost: f64,
    },

    /// Periodic report of the current state, sent once every
    /// `report_interval` completed iterations. `iteration` is the 0-based
    /// index of the iteration just completed, so an interval of 10 reports
    /// 9, 19, 29 and so on. `temperature` is only set by annealing and holds
    /// the value after that iteration's cooling step.
    Progress {
        iteration: usize,
        state: &'a S,
        cost: f64,
        temperature: Option<f64>,
    },

    /// After the last iteration.
    Finished {
        best: &'a S,
        best_cost: f64,
        iterations: usize,
        stop_reason: StopReason,
    },
}

/// Receives [`SearchEvent`]s. Observers must not assume any particular
/// number of `Progress` events.
pub trait SearchObserver<S> {
    fn on_event(&mut self, event: SearchEvent<'_, S>);
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<S> SearchObserver<S> for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: SearchEvent<'_, S>) {}
}
