pub mod analytic;
pub mod common;
pub mod error;

pub use analytic::black_scholes::{
    price_and_greeks, BlackScholesMerton, IntermediateTerms, OptionPrice, PricingResult,
};
pub use common::models::{OptionParameters, OptionType, Parameter};
pub use error::PricingError;
