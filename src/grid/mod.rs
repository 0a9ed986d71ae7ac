//! Grid placement model.
//!
//! Houses are fixed demand points; hospitals and ambulances are the
//! decision variables. A [`GridState`] holds one placement and prices it
//! with [`GridState::total_cost`]; [`GridState::neighbor`] relocates a single
//! hospital or ambulance by one cell.

mod config;
mod err;
mod layout;
mod neighbor;
mod position;
mod state;

pub use config::{CostWeights, GridConfig};
pub use err::GridError;
pub use layout::{EntityKind, Layout};
pub use neighbor::{Move, NeighborGenerator};
pub use position::{Direction, Grid, Position};
pub use state::{CostBreakdown, GridState, Snapshot};
