//! Placement of hospitals and ambulances on a grid by local search.
//!
//! A fixed set of houses sits on a rectangular grid. Hospitals and
//! ambulances are placed so as to minimize a weighted sum of
//! nearest-facility distances:
//!
//! - houses to their nearest hospital
//! - ambulances to their nearest hospital
//! - houses to their nearest ambulance
//!
//! Two searches are provided:
//!
//! - **Hill climbing**: accepts strictly improving single-cell moves and
//!   stops after a streak without improvement.
//! - **Simulated Annealing (SA)**: Metropolis acceptance under a geometric
//!   cooling schedule.
//!
//! All randomness flows through an explicit `&mut impl Rng`; runners that
//! take a seed build their generator with [`random::create_rng`].
//!
//! # Example
//!
//! ```
//! use hospital_siting::grid::{GridConfig, GridState};
//! use hospital_siting::hill_climbing::{HillClimbingConfig, HillClimbingRunner};
//! use hospital_siting::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let config = GridConfig::default()
//!     .with_size(12, 12)
//!     .with_houses(15)
//!     .with_ambulances(3)
//!     .with_hospitals(2);
//! let initial = GridState::random(&config, &mut rng).unwrap();
//!
//! let search = HillClimbingConfig::default()
//!     .with_max_iterations(2000)
//!     .with_max_no_improvement(200);
//! let result = HillClimbingRunner::run_with_rng(&initial, &search, &mut rng);
//!
//! let view = result.best.snapshot();
//! assert_eq!(view.houses, initial.houses());
//! assert!(view.cost <= initial.total_cost());
//! ```
//!
//! Rendering, image I/O and command-line drivers are left to callers; see
//! [`grid::Snapshot`] and [`search::SearchObserver`].

pub mod grid;
pub mod hill_climbing;
pub mod random;
pub mod sa;
pub mod search;
