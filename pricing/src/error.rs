use crate::common::models::Parameter;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PricingError {
    #[error("{parameter} must be finite, got {value}")]
    NonFinite { parameter: Parameter, value: f64 },
    #[error("{parameter} must be strictly positive, got {value}")]
    NotPositive { parameter: Parameter, value: f64 },
    #[error("{parameter} must not be negative, got {value}")]
    Negative { parameter: Parameter, value: f64 },
}

impl PricingError {
    /// The input that failed validation.
    pub fn parameter(&self) -> Parameter {
        match self {
            PricingError::NonFinite { parameter, .. }
            | PricingError::NotPositive { parameter, .. }
            | PricingError::Negative { parameter, .. } => *parameter,
        }
    }
}
