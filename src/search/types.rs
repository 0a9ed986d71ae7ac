//! Core trait shared by the local-search runners.

use crate::grid::GridState;
use rand::Rng;
use std::fmt;

/// A state a local search can walk through.
///
/// The runners only need a price and a way to draw one neighbor; they keep
/// their own copies of current and best states, so `neighbor` must return a
/// fresh value and leave `self` untouched.
///
/// # Minimization
///
/// Lower cost is better.
pub trait SearchState: Clone {
    /// Cost of this state. Lower is better.
    fn cost(&self) -> f64;

    /// Draws one neighbor of this state.
    ///
    /// Returning a state equal to `self` is allowed; the runners count it
    /// as a non-improving iteration.
    fn neighbor<R: Rng>(&self, rng: &mut R) -> Self;
}

impl SearchState for GridState {
    #[inline]
    fn cost(&self) -> f64 {
        self.total_cost()
    }

    #[inline]
    fn neighbor<R: Rng>(&self, rng: &mut R) -> Self {
        GridState::neighbor(self, rng)
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Too many consecutive non-improving iterations.
    Stagnated,
    /// The iteration budget ran out.
    IterationLimit,
    /// The temperature reached the floor.
    Frozen,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::Stagnated => "stagnated",
            StopReason::IterationLimit => "iteration limit",
            StopReason::Frozen => "frozen",
        };
        f.write_str(s)
    }
}
