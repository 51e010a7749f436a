use crate::common::distributions::{cdf, pdf};
use crate::common::models::{OptionParameters, OptionType};
use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The standardized moneyness and drift terms shared by the price and every Greek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntermediateTerms {
    pub d1: f64,
    pub d2: f64,
}

impl IntermediateTerms {
    /// `None` when the parameters are degenerate (zero volatility or zero time to expiration),
    /// or so extreme that d1 and d2 cannot be represented.
    pub fn new(dp: &OptionParameters) -> Result<Option<Self>, PricingError> {
        dp.validate()?;
        if dp.is_degenerate() {
            return Ok(None);
        }
        Ok(Self::from_valid(dp))
    }

    // d1 = ln(S/K) / (vola sqrt(T)) + (r / vola) sqrt(T) + vola sqrt(T) / 2, never forming vola^2
    fn from_valid(dp: &OptionParameters) -> Option<Self> {
        let sqrt_t = dp.time_to_expiration.sqrt();
        let sigma_exp = dp.vola * sqrt_t;
        let drift = (dp.asset_price / dp.strike).ln() / sigma_exp + dp.rfr / dp.vola * sqrt_t;
        let d1 = drift + sigma_exp / 2.0;
        let d2 = drift - sigma_exp / 2.0;
        if d1.is_nan() || d2.is_nan() {
            return None;
        }
        Some(Self { d1, d2 })
    }
}

/// Price and first/second order sensitivities of a European option.
///
/// Theta is annualized (per year of calendar time) and vega is per unit of volatility,
/// i.e. per 1.00 = 100 percentage points. Use [`PricingResult::theta_per_day`] and
/// [`PricingResult::vega_per_point`] for the quoting conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

impl PricingResult {
    /// Limiting values for zero volatility or zero time to expiration: the discounted
    /// intrinsic value, a step delta and vanishing higher Greeks.
    pub fn intrinsic(dp: &OptionParameters) -> Self {
        let discounted_strike = dp.discounted_strike();
        let (price, delta) = match dp.option_type {
            OptionType::Call => {
                let itm = dp.asset_price > discounted_strike;
                (
                    (dp.asset_price - discounted_strike).max(0.0),
                    if itm { 1.0 } else { 0.0 },
                )
            }
            OptionType::Put => {
                let itm = discounted_strike > dp.asset_price;
                (
                    (discounted_strike - dp.asset_price).max(0.0),
                    if itm { -1.0 } else { 0.0 },
                )
            }
        };
        Self {
            price,
            delta,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
            rho: 0.0,
        }
    }

    /// Theta per day, e.g. `days_per_year = 365.0` for calendar or `252.0` for trading days.
    pub fn theta_per_day(&self, days_per_year: f64) -> f64 {
        self.theta / days_per_year
    }

    /// Vega per 1 percentage point move in volatility.
    pub fn vega_per_point(&self) -> f64 {
        self.vega / 100.0
    }
}

pub trait OptionPrice {
    type Params;

    fn price_and_greeks(params: &Self::Params) -> Result<PricingResult, PricingError>;

    fn price(params: &Self::Params) -> Result<f64, PricingError> {
        Self::price_and_greeks(params).map(|result| result.price)
    }
}

/// European Put and Call option prices and Greeks for non-dividend paying stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    pub fn call(dp: &OptionParameters) -> Result<f64, PricingError> {
        Self::price(&dp.with_option_type(OptionType::Call))
    }

    pub fn put(dp: &OptionParameters) -> Result<f64, PricingError> {
        Self::price(&dp.with_option_type(OptionType::Put))
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn price_and_greeks(dp: &OptionParameters) -> Result<PricingResult, PricingError> {
        if let Err(err) = dp.validate() {
            debug!(%err, ?dp, "rejected option parameters");
            return Err(err);
        }
        if dp.is_degenerate() {
            trace!(?dp, "degenerate parameters, using intrinsic value");
            return Ok(PricingResult::intrinsic(dp));
        }

        let Some(IntermediateTerms { d1, d2 }) = IntermediateTerms::from_valid(dp) else {
            trace!(?dp, "d1 and d2 out of range, using intrinsic value");
            return Ok(PricingResult::intrinsic(dp));
        };
        let sqrt_t = dp.time_to_expiration.sqrt();
        let discount = (-dp.rfr * dp.time_to_expiration).exp();
        let discounted_strike = dp.strike * discount;
        let density = pdf(d1);

        let gamma = density / (dp.asset_price * (dp.vola * sqrt_t));
        let vega = dp.asset_price * density * sqrt_t;
        let time_decay = -(dp.asset_price * density * dp.vola) / (2.0 * sqrt_t);

        let result = match dp.option_type {
            OptionType::Call => {
                let n_d1 = cdf(d1);
                let n_d2 = cdf(d2);
                PricingResult {
                    price: dp.asset_price * n_d1 - discounted_strike * n_d2,
                    delta: n_d1,
                    gamma,
                    theta: time_decay - dp.rfr * discounted_strike * n_d2,
                    vega,
                    rho: dp.strike * dp.time_to_expiration * discount * n_d2,
                }
            }
            OptionType::Put => {
                let n_minus_d1 = cdf(-d1);
                let n_minus_d2 = cdf(-d2);
                PricingResult {
                    price: discounted_strike * n_minus_d2 - dp.asset_price * n_minus_d1,
                    delta: cdf(d1) - 1.0,
                    gamma,
                    theta: time_decay + dp.rfr * discounted_strike * n_minus_d2,
                    vega,
                    rho: -dp.strike * dp.time_to_expiration * discount * n_minus_d2,
                }
            }
        };
        Ok(result)
    }
}

/// Black-Scholes-Merton price and Greeks of a European option.
///
/// Argument order: spot, strike, time to expiration (years), volatility, risk-free rate.
/// Note that [`OptionParameters::new`] takes the rate before the volatility.
pub fn price_and_greeks(
    asset_price: f64,
    strike: f64,
    time_to_expiration: f64,
    vola: f64,
    rfr: f64,
    option_type: OptionType,
) -> Result<PricingResult, PricingError> {
    let dp = OptionParameters::new(asset_price, strike, time_to_expiration, rfr, vola, option_type);
    BlackScholesMerton::price_and_greeks(&dp)
}
