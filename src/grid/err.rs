use super::layout::EntityKind;
use super::position::Position;

/// Rejected grid configuration or placement.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A grid dimension is zero.
    EmptyGrid { width: usize, height: usize },
    /// No hospital to measure distances against.
    NoHospitals,
    /// Houses are present but there is no ambulance to serve them.
    NoAmbulances { houses: usize },
    /// A cost weight is negative, NaN or infinite.
    InvalidWeight { name: &'static str, value: f64 },
    /// A position lies outside the grid.
    OutOfBounds {
        kind: EntityKind,
        index: usize,
        position: Position,
        width: usize,
        height: usize,
    },
    /// A replacement list does not match the fixed entity count.
    CountMismatch {
        kind: EntityKind,
        expected: usize,
        actual: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::EmptyGrid { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            GridError::NoHospitals => write!(f, "at least one hospital is required"),
            GridError::NoAmbulances { houses } => write!(
                f,
                "{houses} houses need at least one ambulance for the ambulance-house cost"
            ),
            GridError::InvalidWeight { name, value } => write!(
                f,
                "weight {name} must be finite and non-negative, got {value}"
            ),
            GridError::OutOfBounds {
                kind,
                index,
                position,
                width,
                height,
            } => write!(
                f,
                "{kind} #{index} at {position} is outside the {width}x{height} grid"
            ),
            GridError::CountMismatch {
                kind,
                expected,
                actual,
            } => write!(f, "expected {expected} {kind} positions, got {actual}"),
        }
    }
}

impl std::error::Error for GridError {}
