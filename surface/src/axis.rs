use crate::error::SurfaceError;
use ndarray::Array1;
use pricing::{Parameter, PricingResult};
use serde::{Deserialize, Serialize};

/// Upper bound on the points of a single axis.
pub const MAX_POINTS: usize = 1_000;

/// A linearly spaced range of values for one swept input, ends included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub parameter: Parameter,
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl Axis {
    pub fn new(parameter: Parameter, min: f64, max: f64, points: usize) -> Result<Self, SurfaceError> {
        let axis = Self {
            parameter,
            min,
            max,
            points,
        };
        axis.validate()?;
        Ok(axis)
    }

    pub fn validate(&self) -> Result<(), SurfaceError> {
        let reason = if self.points == 0 {
            "at least one point is required"
        } else if self.points > MAX_POINTS {
            "too many points"
        } else if !self.min.is_finite() || !self.max.is_finite() {
            "bounds must be finite"
        } else if self.min > self.max {
            "min exceeds max"
        } else {
            return Ok(());
        };
        Err(SurfaceError::InvalidAxis {
            parameter: self.parameter,
            reason,
        })
    }

    pub fn values(&self) -> Array1<f64> {
        if self.points == 1 {
            return Array1::from_elem(1, self.min);
        }
        Array1::linspace(self.min, self.max, self.points)
    }
}

/// Selects one figure of a [`PricingResult`]: the price or one of the Greeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Figure {
    Price,
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
}

impl Figure {
    pub const ALL: [Figure; 6] = [
        Figure::Price,
        Figure::Delta,
        Figure::Gamma,
        Figure::Theta,
        Figure::Vega,
        Figure::Rho,
    ];

    pub fn select(&self, result: &PricingResult) -> f64 {
        match self {
            Figure::Price => result.price,
            Figure::Delta => result.delta,
            Figure::Gamma => result.gamma,
            Figure::Theta => result.theta,
            Figure::Vega => result.vega,
            Figure::Rho => result.rho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn linspace_values() {
        let axis = Axis::new(Parameter::AssetPrice, 0.0, 1000.0, 101).unwrap();
        let values = axis.values();
        assert_eq!(values.len(), 101);
        assert_eq!(values[0], 0.0);
        assert_approx_eq!(values[1], 10.0, 1e-12);
        assert_approx_eq!(values[100], 1000.0, 1e-9);
    }

    #[test]
    fn single_point() {
        let axis = Axis::new(Parameter::Vola, 0.3, 0.3, 1).unwrap();
        assert_eq!(axis.values().to_vec(), vec![0.3]);
    }

    #[test]
    fn invalid_axes() {
        assert!(matches!(
            Axis::new(Parameter::Strike, 0.0, 1.0, 0),
            Err(SurfaceError::InvalidAxis { parameter: Parameter::Strike, .. })
        ));
        assert!(Axis::new(Parameter::Strike, 2.0, 1.0, 10).is_err());
        assert!(Axis::new(Parameter::Strike, f64::NAN, 1.0, 10).is_err());
        assert!(Axis::new(Parameter::Strike, 0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn point_limit() {
        assert!(Axis::new(Parameter::AssetPrice, 0.0, 1.0, MAX_POINTS).is_ok());
        assert!(matches!(
            Axis::new(Parameter::AssetPrice, 0.0, 1.0, MAX_POINTS + 1),
            Err(SurfaceError::InvalidAxis { parameter: Parameter::AssetPrice, .. })
        ));
    }

    #[test]
    fn figure_selection() {
        let result = PricingResult {
            price: 1.0,
            delta: 2.0,
            gamma: 3.0,
            theta: 4.0,
            vega: 5.0,
            rho: 6.0,
        };
        let selected: Vec<f64> = Figure::ALL.iter().map(|figure| figure.select(&result)).collect();
        assert_eq!(selected, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
