pub mod axis;
pub mod config;
pub mod error;
pub mod sweep;

pub use axis::{Axis, Figure};
pub use config::{BaseParameters, SweepConfig};
pub use error::SurfaceError;
pub use sweep::{Surface, Sweep};
