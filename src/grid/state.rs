//! The placement state searched by the optimizers.

use super::config::{validate_shape, CostWeights, GridConfig};
use super::err::GridError;
use super::layout::{EntityKind, Layout};
use super::neighbor::{Move, NeighborGenerator};
use super::position::{Grid, Position};
use rand::Rng;

/// Houses, ambulances and hospitals placed on a rectangular grid.
///
/// Dimensions, weights and entity counts are fixed at construction and
/// shared by every state derived from this one. Positions always lie on the
/// grid. Derived states ([`neighbor`](Self::neighbor), `clone`) own their
/// own position lists; a parent is never modified by deriving from it.
///
/// # Examples
///
/// ```
/// use hospital_siting::grid::{GridConfig, GridState};
/// use hospital_siting::random::create_rng;
///
/// let config = GridConfig::default().with_size(10, 10).with_houses(8);
/// let mut rng = create_rng(42);
/// let state = GridState::random(&config, &mut rng).unwrap();
/// assert_eq!(state.houses().len(), 8);
/// assert!(state.total_cost() >= 0.0);
///
/// let next = state.neighbor(&mut rng);
/// assert_eq!(next.houses(), state.houses());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    grid: Grid,
    weights: CostWeights,
    layout: Layout,
}

/// The three weighted terms of [`GridState::total_cost`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    pub house_hospital: f64,
    pub ambulance_hospital: f64,
    pub ambulance_house: f64,
}

impl CostBreakdown {
    #[inline]
    pub fn total(&self) -> f64 {
        self.house_hospital + self.ambulance_hospital + self.ambulance_house
    }
}

/// Read-only picture of a state for renderers and exporters.
///
/// Links pair each house and each ambulance with its nearest hospital.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub houses: Vec<Position>,
    pub ambulances: Vec<Position>,
    pub hospitals: Vec<Position>,
    pub cost: f64,
    pub house_links: Vec<(Position, Position)>,
    pub ambulance_links: Vec<(Position, Position)>,
}

impl GridState {
    /// Places every entity uniformly at random.
    pub fn random<R: Rng>(config: &GridConfig, rng: &mut R) -> Result<Self, GridError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height);
        let layout = Layout::random(
            &grid,
            config.num_houses,
            config.num_ambulances,
            config.num_hospitals,
            rng,
        );
        Ok(Self {
            grid,
            weights: config.weights,
            layout,
        })
    }

    /// Builds a state from explicit positions. Counts are taken from the
    /// list lengths.
    pub fn from_positions(
        width: usize,
        height: usize,
        weights: CostWeights,
        houses: Vec<Position>,
        ambulances: Vec<Position>,
        hospitals: Vec<Position>,
    ) -> Result<Self, GridError> {
        validate_shape(
            width,
            height,
            houses.len(),
            ambulances.len(),
            hospitals.len(),
        )?;
        weights.validate()?;

        let grid = Grid::new(width, height);
        let layout = Layout::new(houses, ambulances, hospitals);
        if let Some((kind, index, position)) = layout.iter().find(|&(_, _, p)| !grid.contains(p)) {
            return Err(out_of_bounds(&grid, kind, index, position));
        }

        Ok(Self {
            grid,
            weights,
            layout,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn weights(&self) -> &CostWeights {
        &self.weights
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn houses(&self) -> &[Position] {
        &self.layout.houses
    }

    #[inline]
    pub fn ambulances(&self) -> &[Position] {
        &self.layout.ambulances
    }

    #[inline]
    pub fn hospitals(&self) -> &[Position] {
        &self.layout.hospitals
    }

    #[inline]
    pub fn positions(&self, kind: EntityKind) -> &[Position] {
        self.layout.get(kind)
    }

    #[inline]
    pub fn num_houses(&self) -> usize {
        self.layout.houses.len()
    }

    #[inline]
    pub fn num_ambulances(&self) -> usize {
        self.layout.ambulances.len()
    }

    #[inline]
    pub fn num_hospitals(&self) -> usize {
        self.layout.hospitals.len()
    }

    /// Weighted sum of nearest-facility distances:
    ///
    /// ```text
    /// sum_house     w_hh * min_hospital  d(house, hospital)
    /// + sum_amb     w_ah * min_hospital  d(ambulance, hospital)
    /// + sum_house   w_ha * min_ambulance d(house, ambulance)
    /// ```
    ///
    /// Always equal, bit for bit, to `self.cost_breakdown().total()`.
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.cost_breakdown().total()
    }

    /// The three terms of [`total_cost`](Self::total_cost) separately.
    pub fn cost_breakdown(&self) -> CostBreakdown {
        let w = &self.weights;
        let hospitals = &self.layout.hospitals;
        let ambulances = &self.layout.ambulances;
        let houses = &self.layout.houses;

        CostBreakdown {
            house_hospital: houses
                .iter()
                .map(|h| nearest_distance(h, hospitals) * w.house_hospital)
                .sum(),
            ambulance_hospital: ambulances
                .iter()
                .map(|a| nearest_distance(a, hospitals) * w.ambulance_hospital)
                .sum(),
            ambulance_house: houses
                .iter()
                .map(|h| nearest_distance(h, ambulances) * w.ambulance_house)
                .sum(),
        }
    }

    /// Closest hospital to `pos`. Ties go to the lowest index.
    pub fn nearest_hospital(&self, pos: Position) -> Option<Position> {
        nearest(&pos, &self.layout.hospitals)
    }

    /// Closest ambulance to `pos`. Ties go to the lowest index.
    pub fn nearest_ambulance(&self, pos: Position) -> Option<Position> {
        nearest(&pos, &self.layout.ambulances)
    }

    /// A copy with one hospital or ambulance moved one step.
    ///
    /// See [`NeighborGenerator`] for the move distribution. When the drawn
    /// class is empty or the drawn entity cannot move, the copy equals
    /// `self`.
    pub fn neighbor<R: Rng>(&self, rng: &mut R) -> GridState {
        self.neighbor_with_move(rng).0
    }

    /// Like [`neighbor`](Self::neighbor), also reporting the move applied
    /// (`None` for a no-op).
    pub fn neighbor_with_move<R: Rng>(&self, rng: &mut R) -> (GridState, Option<Move>) {
        let (layout, mv) = NeighborGenerator::new().neighbor(&self.grid, &self.layout, rng);
        let next = GridState {
            grid: self.grid,
            weights: self.weights,
            layout,
        };
        (next, mv)
    }

    /// Replaces one position list wholesale.
    ///
    /// The new list must keep the entity count and stay on the grid;
    /// otherwise the state is left unchanged.
    pub fn replace_positions(
        &mut self,
        kind: EntityKind,
        positions: Vec<Position>,
    ) -> Result<(), GridError> {
        let expected = self.layout.get(kind).len();
        if positions.len() != expected {
            return Err(GridError::CountMismatch {
                kind,
                expected,
                actual: positions.len(),
            });
        }
        if let Some((index, &position)) = positions
            .iter()
            .enumerate()
            .find(|(_, p)| !self.grid.contains(**p))
        {
            return Err(out_of_bounds(&self.grid, kind, index, position));
        }
        *self.layout.get_mut(kind) = positions;
        Ok(())
    }

    /// Captures positions, cost and nearest-hospital links.
    pub fn snapshot(&self) -> Snapshot {
        let link = |p: &Position| self.nearest_hospital(*p).map(|h| (*p, h));
        Snapshot {
            width: self.width(),
            height: self.height(),
            houses: self.layout.houses.clone(),
            ambulances: self.layout.ambulances.clone(),
            hospitals: self.layout.hospitals.clone(),
            cost: self.total_cost(),
            house_links: self.layout.houses.iter().filter_map(link).collect(),
            ambulance_links: self.layout.ambulances.iter().filter_map(link).collect(),
        }
    }
}

/// Distance to the closest target. An empty target set yields zero; states
/// built through the validated constructors never hit that case for a
/// non-empty source list.
fn nearest_distance(from: &Position, targets: &[Position]) -> f64 {
    targets
        .iter()
        .map(|t| from.distance(t))
        .reduce(f64::min)
        .unwrap_or(0.0)
}

fn nearest(from: &Position, targets: &[Position]) -> Option<Position> {
    let mut best: Option<(Position, f64)> = None;
    for &t in targets {
        let d = from.distance(&t);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((t, d));
        }
    }
    best.map(|(p, _)| p)
}

fn out_of_bounds(grid: &Grid, kind: EntityKind, index: usize, position: Position) -> GridError {
    GridError::OutOfBounds {
        kind,
        index,
        position,
        width: grid.width(),
        height: grid.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn fixed_state() -> GridState {
        GridState::from_positions(
            5,
            5,
            CostWeights::default(),
            vec![p(0, 0), p(4, 0), p(0, 3)],
            vec![p(0, 4)],
            vec![p(3, 4)],
        )
        .unwrap()
    }

    // ---- Construction ----

    #[test]
    fn test_random_respects_config() {
        let config = GridConfig::default()
            .with_size(7, 3)
            .with_houses(6)
            .with_ambulances(2)
            .with_hospitals(2);
        let state = GridState::random(&config, &mut create_rng(42)).unwrap();
        assert_eq!(state.width(), 7);
        assert_eq!(state.height(), 3);
        assert_eq!(state.num_houses(), 6);
        assert_eq!(state.num_ambulances(), 2);
        assert_eq!(state.num_hospitals(), 2);
        assert!(state.layout().iter().all(|(_, _, q)| state.grid().contains(q)));
    }

    #[test]
    fn test_random_rejects_bad_config() {
        let mut rng = create_rng(1);
        let config = GridConfig::default().with_hospitals(0);
        assert_eq!(
            GridState::random(&config, &mut rng),
            Err(GridError::NoHospitals)
        );
        let config = GridConfig::default().with_size(0, 0);
        assert!(GridState::random(&config, &mut rng).is_err());
    }

    #[test]
    fn test_from_positions_rejects_out_of_bounds() {
        let err = GridState::from_positions(
            3,
            3,
            CostWeights::default(),
            vec![p(0, 0)],
            vec![p(1, 1)],
            vec![p(3, 0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                kind: EntityKind::Hospital,
                index: 0,
                position: p(3, 0),
                width: 3,
                height: 3,
            }
        );
    }

    #[test]
    fn test_from_positions_rejects_missing_ambulance() {
        let err = GridState::from_positions(
            3,
            3,
            CostWeights::default(),
            vec![p(0, 0), p(1, 0)],
            vec![],
            vec![p(2, 2)],
        )
        .unwrap_err();
        assert_eq!(err, GridError::NoAmbulances { houses: 2 });
    }

    // ---- Cost ----

    #[test]
    fn test_total_cost_hand_computed() {
        let state = fixed_state();
        // house -> hospital (3,4): 5.0, sqrt(17), sqrt(10)
        let hh = 5.0 + 17f64.sqrt() + 10f64.sqrt();
        // ambulance (0,4) -> hospital (3,4): 3.0
        let ah = 3.0;
        // house -> ambulance (0,4): 4.0, sqrt(32), 1.0
        let ha = 4.0 + 32f64.sqrt() + 1.0;
        let expected = hh * 1.0 + ah * 2.0 + ha * 1.5;
        assert!((state.total_cost() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_matches_total() {
        let state = GridState::random(&GridConfig::default(), &mut create_rng(8)).unwrap();
        let breakdown = state.cost_breakdown();
        assert_eq!(breakdown.total().to_bits(), state.total_cost().to_bits());
        assert!(breakdown.house_hospital >= 0.0);
        assert!(breakdown.ambulance_hospital >= 0.0);
        assert!(breakdown.ambulance_house >= 0.0);
    }

    #[test]
    fn test_cost_uses_nearest_facility() {
        let near = GridState::from_positions(
            10,
            1,
            CostWeights::new(1.0, 0.0, 0.0),
            vec![p(0, 0)],
            vec![p(0, 0)],
            vec![p(9, 0), p(2, 0)],
        )
        .unwrap();
        assert!((near.total_cost() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cost_zero_when_colocated() {
        let state = GridState::from_positions(
            4,
            4,
            CostWeights::default(),
            vec![p(2, 2), p(2, 2)],
            vec![p(2, 2)],
            vec![p(2, 2)],
        )
        .unwrap();
        assert_eq!(state.total_cost(), 0.0);
    }

    #[test]
    fn test_cost_without_houses_or_ambulances() {
        let state = GridState::from_positions(
            4,
            4,
            CostWeights::default(),
            vec![],
            vec![],
            vec![p(1, 1)],
        )
        .unwrap();
        assert_eq!(state.total_cost(), 0.0);
    }

    // ---- Copies and neighbors ----

    #[test]
    fn test_clone_is_independent() {
        let original = fixed_state();
        let cost = original.total_cost();
        let mut copy = original.clone();
        assert_eq!(copy.total_cost(), cost);

        copy.replace_positions(EntityKind::Hospital, vec![p(0, 0)])
            .unwrap();
        assert_eq!(original.hospitals(), &[p(3, 4)]);
        assert_eq!(original.total_cost(), cost);
        assert_ne!(copy.total_cost(), cost);
    }

    #[test]
    fn test_neighbor_leaves_parent_untouched() {
        let state = fixed_state();
        let before = state.clone();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let next = state.neighbor(&mut rng);
            assert_eq!(next.houses(), state.houses());
            assert_eq!(next.weights(), state.weights());
            assert_eq!(next.grid(), state.grid());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_neighbor_with_move_reports_change() {
        let state = fixed_state();
        let mut rng = create_rng(3);
        for _ in 0..50 {
            let (next, mv) = state.neighbor_with_move(&mut rng);
            let mv = mv.expect("5x5 grid always has a free step");
            assert_eq!(next.positions(mv.kind)[mv.index], mv.to);
            assert_eq!(state.positions(mv.kind)[mv.index], mv.from);
        }
    }

    #[test]
    fn test_replace_positions_validates() {
        let mut state = fixed_state();
        let err = state
            .replace_positions(EntityKind::House, vec![p(0, 0)])
            .unwrap_err();
        assert_eq!(
            err,
            GridError::CountMismatch {
                kind: EntityKind::House,
                expected: 3,
                actual: 1,
            }
        );

        let err = state
            .replace_positions(EntityKind::Ambulance, vec![p(5, 5)])
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { index: 0, .. }));
        assert_eq!(state, fixed_state());
    }

    // ---- Renderer view ----

    #[test]
    fn test_nearest_hospital_tie_goes_to_first() {
        let state = GridState::from_positions(
            5,
            1,
            CostWeights::default(),
            vec![],
            vec![],
            vec![p(0, 0), p(4, 0)],
        )
        .unwrap();
        assert_eq!(state.nearest_hospital(p(2, 0)), Some(p(0, 0)));
        assert_eq!(state.nearest_hospital(p(3, 0)), Some(p(4, 0)));
        assert_eq!(state.nearest_ambulance(p(3, 0)), None);
    }

    #[test]
    fn test_snapshot_contents() {
        let state = fixed_state();
        let snap = state.snapshot();
        assert_eq!((snap.width, snap.height), (5, 5));
        assert_eq!(snap.houses, state.houses());
        assert_eq!(snap.hospitals, state.hospitals());
        assert_eq!(snap.cost, state.total_cost());
        assert_eq!(snap.house_links.len(), 3);
        assert!(snap.house_links.iter().all(|&(_, h)| h == p(3, 4)));
        assert_eq!(snap.ambulance_links, vec![(p(0, 4), p(3, 4))]);
    }
}
