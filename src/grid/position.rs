//! Cells, unit steps and grid bounds.

use rand::Rng;
use std::fmt;

/// A cell on the grid. `x` indexes columns, `y` indexes rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two cells.
    #[inline]
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four axis-aligned unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(0, +1)`
    South,
    /// `(+1, 0)`
    East,
    /// `(0, -1)`
    North,
    /// `(-1, 0)`
    West,
}

impl Direction {
    /// All steps, in the order candidate moves are enumerated.
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::North,
        Direction::West,
    ];

    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// Rectangular bounds `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates the bounds. Zero dimensions are rejected by the callers that
    /// build states, not here.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub const fn cells(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// The cell one step away in `dir`, or `None` if it leaves the grid.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.delta();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        let next = Position::new(x, y);
        self.contains(next).then_some(next)
    }

    /// In-bounds cells one step away from `pos`, in [`Direction::ALL`] order.
    pub fn valid_steps(&self, pos: Position) -> Vec<Position> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(pos, dir))
            .collect()
    }

    /// A uniformly random cell. Samples `x` first, then `y`.
    ///
    /// The grid must be non-empty.
    pub fn random_position<R: Rng>(&self, rng: &mut R) -> Position {
        let x = rng.random_range(0..self.width);
        let y = rng.random_range(0..self.height);
        Position::new(x, y)
    }
}
