//! Hill climbing.
//!
//! First-improvement local search over randomly drawn neighbors: a
//! neighbor replaces the current state only when it is strictly cheaper.
//! The run ends after a streak of non-improving draws or when the iteration
//! budget is spent.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::{HillClimbingResult, HillClimbingRunner};
