//! Entity classes and their position lists.

use super::position::{Grid, Position};
use rand::Rng;
use std::fmt;

/// The three classes of entity placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    House,
    Ambulance,
    Hospital,
}

impl EntityKind {
    /// Classes the neighbor move may relocate, in selection order.
    /// Houses are fixed demand points and never move.
    pub const MOVABLE: [EntityKind; 2] = [EntityKind::Hospital, EntityKind::Ambulance];

    #[inline]
    pub const fn is_movable(self) -> bool {
        !matches!(self, EntityKind::House)
    }

    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::House => "house",
            EntityKind::Ambulance => "ambulance",
            EntityKind::Hospital => "hospital",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three position lists, indexed by entity.
///
/// A `Layout` carries no count or bounds guarantees of its own; those are
/// enforced by [`GridState`](super::GridState), which owns one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub houses: Vec<Position>,
    pub ambulances: Vec<Position>,
    pub hospitals: Vec<Position>,
}

impl Layout {
    pub fn new(houses: Vec<Position>, ambulances: Vec<Position>, hospitals: Vec<Position>) -> Self {
        Self {
            houses,
            ambulances,
            hospitals,
        }
    }

    /// Samples every entity uniformly and independently over `grid`.
    /// Coincident positions are allowed.
    pub fn random<R: Rng>(
        grid: &Grid,
        houses: usize,
        ambulances: usize,
        hospitals: usize,
        rng: &mut R,
    ) -> Self {
        let houses = sample_positions(grid, houses, rng);
        let ambulances = sample_positions(grid, ambulances, rng);
        let hospitals = sample_positions(grid, hospitals, rng);
        Self {
            houses,
            ambulances,
            hospitals,
        }
    }

    #[inline]
    pub fn get(&self, kind: EntityKind) -> &[Position] {
        match kind {
            EntityKind::House => &self.houses,
            EntityKind::Ambulance => &self.ambulances,
            EntityKind::Hospital => &self.hospitals,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, kind: EntityKind) -> &mut Vec<Position> {
        match kind {
            EntityKind::House => &mut self.houses,
            EntityKind::Ambulance => &mut self.ambulances,
            EntityKind::Hospital => &mut self.hospitals,
        }
    }

    /// True when neither hospitals nor ambulances exist, so no move can
    /// ever change the layout.
    pub fn has_no_movable(&self) -> bool {
        self.hospitals.is_empty() && self.ambulances.is_empty()
    }

    /// Every entity with its class and index.
    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, usize, Position)> + '_ {
        [EntityKind::House, EntityKind::Ambulance, EntityKind::Hospital]
            .into_iter()
            .flat_map(move |kind| {
                self.get(kind)
                    .iter()
                    .enumerate()
                    .map(move |(i, &p)| (kind, i, p))
            })
    }
}

fn sample_positions<R: Rng>(grid: &Grid, n: usize, rng: &mut R) -> Vec<Position> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        out.push(grid.random_position(rng));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_counts_and_bounds() {
        let grid = Grid::new(6, 4);
        let mut rng = create_rng(3);
        let layout = Layout::random(&grid, 5, 2, 3, &mut rng);
        assert_eq!(layout.houses.len(), 5);
        assert_eq!(layout.ambulances.len(), 2);
        assert_eq!(layout.hospitals.len(), 3);
        assert!(layout.iter().all(|(_, _, p)| grid.contains(p)));
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let grid = Grid::new(9, 9);
        let a = Layout::random(&grid, 4, 2, 2, &mut create_rng(11));
        let b = Layout::random(&grid, 4, 2, 2, &mut create_rng(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_get_by_kind() {
        let layout = Layout::new(
            vec![Position::new(0, 0)],
            vec![Position::new(1, 1), Position::new(2, 2)],
            vec![],
        );
        assert_eq!(layout.get(EntityKind::House).len(), 1);
        assert_eq!(layout.get(EntityKind::Ambulance).len(), 2);
        assert!(layout.get(EntityKind::Hospital).is_empty());
        assert!(!layout.has_no_movable());
        assert_eq!(layout.iter().count(), 3);
    }

    #[test]
    fn test_movable_classes() {
        assert!(!EntityKind::House.is_movable());
        assert!(EntityKind::MOVABLE.iter().all(|k| k.is_movable()));
        assert_eq!(EntityKind::Ambulance.to_string(), "ambulance");
    }
}
