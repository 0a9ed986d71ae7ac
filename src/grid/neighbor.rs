//! Single-step relocation of one movable entity.
//!
//! A move is drawn in three stages:
//!
//! 1. a movable class, uniformly from [`EntityKind::MOVABLE`]
//! 2. an entity index, uniformly within that class
//! 3. a unit step, uniformly among those that stay on the grid
//!
//! Stage 2 is skipped when the class is empty and stage 3 produces nothing
//! when the entity is boxed in (only possible on a 1x1 grid). Both cases
//! yield no move at all: the neighbor is an exact copy of its parent and
//! the search spends that iteration without progress.

use super::layout::{EntityKind, Layout};
use super::position::{Grid, Position};
use rand::Rng;

/// One relocation: entity `index` of class `kind` goes from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub kind: EntityKind,
    pub index: usize,
    pub from: Position,
    pub to: Position,
}

/// Draws and applies single-entity moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeighborGenerator;

impl NeighborGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draws a move for `layout`, or `None` for a no-op.
    pub fn propose<R: Rng>(&self, grid: &Grid, layout: &Layout, rng: &mut R) -> Option<Move> {
        let kind = EntityKind::MOVABLE[rng.random_range(0..EntityKind::MOVABLE.len())];
        let positions = layout.get(kind);
        if positions.is_empty() {
            return None;
        }

        let index = rng.random_range(0..positions.len());
        let from = positions[index];
        let steps = grid.valid_steps(from);
        if steps.is_empty() {
            return None;
        }

        let to = steps[rng.random_range(0..steps.len())];
        Some(Move {
            kind,
            index,
            from,
            to,
        })
    }

    /// Writes `mv` into `layout`.
    ///
    /// # Panics
    ///
    /// Panics if `mv.index` is out of range for its class, i.e. the move was
    /// not proposed for this layout.
    pub fn apply(&self, layout: &mut Layout, mv: &Move) {
        layout.get_mut(mv.kind)[mv.index] = mv.to;
    }

    /// Returns a moved copy of `layout` together with the move taken.
    /// `layout` itself is left untouched.
    pub fn neighbor<R: Rng>(
        &self,
        grid: &Grid,
        layout: &Layout,
        rng: &mut R,
    ) -> (Layout, Option<Move>) {
        let mut next = layout.clone();
        let mv = self.propose(grid, layout, rng);
        if let Some(mv) = &mv {
            self.apply(&mut next, mv);
        }
        (next, mv)
    }
}
