use crate::axis::Figure;
use crate::config::SweepConfig;
use crate::error::SurfaceError;
use ndarray::{Array1, Array2};
use pricing::{BlackScholesMerton, OptionPrice, OptionType, Parameter, PricingResult};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// A validated two dimensional sweep over the Black-Scholes-Merton engine.
#[derive(Debug, Clone)]
pub struct Sweep {
    config: SweepConfig,
    xs: Array1<f64>,
    ys: Array1<f64>,
}

impl Sweep {
    pub fn new(config: SweepConfig) -> Result<Self, SurfaceError> {
        config.validate()?;
        Ok(Self {
            xs: config.x.values(),
            ys: config.y.values(),
            config,
        })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Prices calls and puts at every grid point. Cells are independent and evaluated in
    /// parallel; points the engine rejects are kept as gaps instead of failing the sweep.
    pub fn run(&self) -> Result<Surface, SurfaceError> {
        let (rows, cols) = (self.ys.len(), self.xs.len());
        let (x, y) = (self.config.x.parameter, self.config.y.parameter);
        debug!(rows, cols, %x, %y, "starting sweep");

        let base = self.config.base.option_parameters(OptionType::Call);
        let cells: Vec<(Option<PricingResult>, Option<PricingResult>)> = (0..rows * cols)
            .into_par_iter()
            .map(|index| {
                let (row, col) = (index / cols, index % cols);
                let dp = base.with(y, self.ys[row]).with(x, self.xs[col]);
                let call = BlackScholesMerton::price_and_greeks(&dp).ok();
                let put =
                    BlackScholesMerton::price_and_greeks(&dp.with_option_type(OptionType::Put)).ok();
                (call, put)
            })
            .collect();

        let rejected = cells.iter().filter(|(call, _)| call.is_none()).count();
        let (calls, puts): (Vec<_>, Vec<_>) = cells.into_iter().unzip();
        let surface = Surface {
            xs: self.xs.clone(),
            ys: self.ys.clone(),
            x_parameter: x,
            y_parameter: y,
            calls: Array2::from_shape_vec((rows, cols), calls)?,
            puts: Array2::from_shape_vec((rows, cols), puts)?,
            rejected,
        };

        if rejected > 0 {
            warn!(rejected, total = rows * cols, "sweep left cells without a price");
        } else {
            info!(total = rows * cols, "sweep finished");
        }
        Ok(surface)
    }
}

/// Call and put results over a grid: rows follow the y axis, columns the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    xs: Array1<f64>,
    ys: Array1<f64>,
    x_parameter: Parameter,
    y_parameter: Parameter,
    calls: Array2<Option<PricingResult>>,
    puts: Array2<Option<PricingResult>>,
    rejected: usize,
}

impl Surface {
    pub fn x(&self) -> &Array1<f64> {
        &self.xs
    }

    pub fn y(&self) -> &Array1<f64> {
        &self.ys
    }

    pub fn x_parameter(&self) -> Parameter {
        self.x_parameter
    }

    pub fn y_parameter(&self) -> Parameter {
        self.y_parameter
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.ys.len(), self.xs.len())
    }

    /// Number of grid points the engine rejected.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn grid(&self, option_type: OptionType) -> &Array2<Option<PricingResult>> {
        match option_type {
            OptionType::Call => &self.calls,
            OptionType::Put => &self.puts,
        }
    }

    pub fn get(&self, option_type: OptionType, row: usize, col: usize) -> Option<&PricingResult> {
        self.grid(option_type)
            .get((row, col))
            .and_then(|cell| cell.as_ref())
    }

    /// One figure over the whole grid, NaN where the engine rejected the inputs.
    pub fn values(&self, option_type: OptionType, figure: Figure) -> Array2<f64> {
        self.grid(option_type).map(|cell| {
            cell.as_ref()
                .map_or(f64::NAN, |result| figure.select(result))
        })
    }
}
