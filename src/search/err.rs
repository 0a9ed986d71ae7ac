/// Search parameters that would make a run degenerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchError {
    /// The annealing floor must be strictly positive, otherwise the cooling
    /// loop never ends or divides by a zero temperature.
    NonPositiveMinTemperature(f64),
    /// The cooling rate must lie strictly between 0 and 1.
    InvalidCoolingRate(f64),
    /// A temperature is NaN or infinite.
    NonFiniteTemperature(f64),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::NonPositiveMinTemperature(t) => {
                write!(f, "min_temperature must be positive, got {t}")
            }
            SearchError::InvalidCoolingRate(rate) => {
                write!(f, "cooling_rate must be in (0, 1), got {rate}")
            }
            SearchError::NonFiniteTemperature(t) => {
                write!(f, "temperature must be finite, got {t}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
