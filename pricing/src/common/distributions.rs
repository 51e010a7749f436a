use probability::distribution::{Continuous, Gaussian};
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Cumulative distribution function of the standard normal distribution, `P(Z <= x)`.
///
/// Evaluated as `erfc(-x / sqrt(2)) / 2`, which keeps relative precision in the lower tail
/// where `(1 + erf(x / sqrt(2))) / 2` rounds to zero.
pub fn cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Density of the standard normal distribution, `exp(-x^2 / 2) / sqrt(2 pi)`.
pub fn pdf(x: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(x)
}
