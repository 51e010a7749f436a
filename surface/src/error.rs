use pricing::{Parameter, PricingError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("invalid axis over {parameter}: {reason}")]
    InvalidAxis {
        parameter: Parameter,
        reason: &'static str,
    },
    #[error("both axes sweep the {0}")]
    DuplicateAxis(Parameter),
    #[error("invalid base parameters: {0}")]
    Pricing(#[from] PricingError),
    #[error("failed to parse sweep config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("failed to read sweep config: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}
