//! Pieces shared by [`hill_climbing`](crate::hill_climbing) and
//! [`sa`](crate::sa): the state trait, stop reasons, errors and observers.

mod err;
mod observer;
mod types;

pub use err::SearchError;
pub use observer::{NoopObserver, SearchEvent, SearchObserver};
pub use types::{SearchState, StopReason};
