use crate::axis::Axis;
use crate::error::SurfaceError;
use pricing::{OptionParameters, OptionType, Parameter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inputs held fixed while the two axes are swept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseParameters {
    pub asset_price: f64,
    pub strike: f64,
    pub time_to_expiration: f64,
    pub vola: f64,
    pub rfr: f64,
}

impl Default for BaseParameters {
    fn default() -> Self {
        Self {
            asset_price: 100.0,
            strike: 100.0,
            time_to_expiration: 1.0,
            vola: 0.2,
            rfr: 0.1,
        }
    }
}

impl BaseParameters {
    pub fn option_parameters(&self, option_type: OptionType) -> OptionParameters {
        OptionParameters::new(
            self.asset_price,
            self.strike,
            self.time_to_expiration,
            self.rfr,
            self.vola,
            option_type,
        )
    }
}

/// A two dimensional sweep: `x` varies along columns, `y` along rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub base: BaseParameters,
    #[serde(default = "default_x")]
    pub x: Axis,
    #[serde(default = "default_y")]
    pub y: Axis,
}

fn default_x() -> Axis {
    Axis {
        parameter: Parameter::AssetPrice,
        min: 0.0,
        max: 1000.0,
        points: 100,
    }
}

fn default_y() -> Axis {
    Axis {
        parameter: Parameter::Vola,
        min: 0.0,
        max: 1.0,
        points: 100,
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            base: BaseParameters::default(),
            x: default_x(),
            y: default_y(),
        }
    }
}

impl SweepConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, SurfaceError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SurfaceError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), SurfaceError> {
        self.x.validate()?;
        self.y.validate()?;
        if self.x.parameter == self.y.parameter {
            return Err(SurfaceError::DuplicateAxis(self.x.parameter));
        }
        // swept inputs are checked per cell
        self.base
            .option_parameters(OptionType::Call)
            .with(self.x.parameter, 1.0)
            .with(self.y.parameter, 1.0)
            .validate()?;
        Ok(())
    }
}
