//! Grid and cost configuration.

use super::err::GridError;

/// Weights of the three distance terms in the total cost.
///
/// Each term sums, over the entities on its left-hand side, the weighted
/// distance to the nearest entity on its right-hand side:
///
/// - `house_hospital`: house -> nearest hospital
/// - `ambulance_hospital`: ambulance -> nearest hospital
/// - `ambulance_house`: house -> nearest ambulance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    pub house_hospital: f64,
    pub ambulance_hospital: f64,
    pub ambulance_house: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            house_hospital: 1.0,
            ambulance_hospital: 2.0,
            ambulance_house: 1.5,
        }
    }
}

impl CostWeights {
    pub fn new(house_hospital: f64, ambulance_hospital: f64, ambulance_house: f64) -> Self {
        Self {
            house_hospital,
            ambulance_hospital,
            ambulance_house,
        }
    }

    /// Every weight must be finite and non-negative.
    pub fn validate(&self) -> Result<(), GridError> {
        for (name, value) in [
            ("house_hospital", self.house_hospital),
            ("ambulance_hospital", self.ambulance_hospital),
            ("ambulance_house", self.ambulance_house),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Shape of a placement problem: grid size, entity counts and weights.
///
/// # Examples
///
/// ```
/// use hospital_siting::grid::{CostWeights, GridConfig};
///
/// let config = GridConfig::default()
///     .with_size(10, 10)
///     .with_houses(8)
///     .with_ambulances(2)
///     .with_hospitals(1)
///     .with_weights(CostWeights::new(1.0, 2.0, 1.5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of columns. Must be positive.
    pub width: usize,

    /// Number of rows. Must be positive.
    pub height: usize,

    pub num_houses: usize,

    /// Must be positive whenever `num_houses` is.
    pub num_ambulances: usize,

    /// Must be positive.
    pub num_hospitals: usize,

    pub weights: CostWeights,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            num_houses: 20,
            num_ambulances: 4,
            num_hospitals: 3,
            weights: CostWeights::default(),
        }
    }
}

impl GridConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_houses(mut self, n: usize) -> Self {
        self.num_houses = n;
        self
    }

    pub fn with_ambulances(mut self, n: usize) -> Self {
        self.num_ambulances = n;
        self
    }

    pub fn with_hospitals(mut self, n: usize) -> Self {
        self.num_hospitals = n;
        self
    }

    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GridError> {
        validate_shape(
            self.width,
            self.height,
            self.num_houses,
            self.num_ambulances,
            self.num_hospitals,
        )?;
        self.weights.validate()
    }
}

pub(crate) fn validate_shape(
    width: usize,
    height: usize,
    houses: usize,
    ambulances: usize,
    hospitals: usize,
) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid { width, height });
    }
    if hospitals == 0 {
        return Err(GridError::NoHospitals);
    }
    if houses > 0 && ambulances == 0 {
        return Err(GridError::NoAmbulances { houses });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!((config.width, config.height), (15, 15));
        assert_eq!(config.num_houses, 20);
        assert_eq!(config.num_ambulances, 4);
        assert_eq!(config.num_hospitals, 3);
        assert!((config.weights.house_hospital - 1.0).abs() < 1e-12);
        assert!((config.weights.ambulance_hospital - 2.0).abs() < 1e-12);
        assert!((config.weights.ambulance_house - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_grid() {
        let config = GridConfig::default().with_size(0, 5);
        assert_eq!(
            config.validate(),
            Err(GridError::EmptyGrid {
                width: 0,
                height: 5
            })
        );
        let config = GridConfig::default().with_size(5, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_no_hospitals() {
        let config = GridConfig::default().with_hospitals(0);
        assert_eq!(config.validate(), Err(GridError::NoHospitals));
    }

    #[test]
    fn test_validate_houses_without_ambulances() {
        let config = GridConfig::default().with_ambulances(0);
        assert_eq!(config.validate(), Err(GridError::NoAmbulances { houses: 20 }));

        // Without houses the ambulance-house term is an empty sum.
        let config = GridConfig::default().with_houses(0).with_ambulances(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_weights() {
        let config = GridConfig::default().with_weights(CostWeights::new(-1.0, 2.0, 1.5));
        assert!(matches!(
            config.validate(),
            Err(GridError::InvalidWeight {
                name: "house_hospital",
                ..
            })
        ));

        let config = GridConfig::default().with_weights(CostWeights::new(1.0, f64::NAN, 1.5));
        assert!(config.validate().is_err());

        let config =
            GridConfig::default().with_weights(CostWeights::new(1.0, 2.0, f64::INFINITY));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_weights_allowed() {
        let config = GridConfig::default().with_weights(CostWeights::new(0.0, 0.0, 0.0));
        assert!(config.validate().is_ok());
    }
}
