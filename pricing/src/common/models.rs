use crate::error::PricingError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    Call,
    Put,
}

/// The numeric inputs of a European option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    AssetPrice,
    Strike,
    TimeToExpiration,
    Vola,
    Rfr,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::AssetPrice,
        Parameter::Strike,
        Parameter::TimeToExpiration,
        Parameter::Vola,
        Parameter::Rfr,
    ];
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::AssetPrice => "asset price",
            Parameter::Strike => "strike",
            Parameter::TimeToExpiration => "time to expiration",
            Parameter::Vola => "volatility",
            Parameter::Rfr => "risk-free rate",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
    pub option_type: OptionType,
}

impl OptionParameters {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
            option_type,
        }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::AssetPrice => self.asset_price,
            Parameter::Strike => self.strike,
            Parameter::TimeToExpiration => self.time_to_expiration,
            Parameter::Vola => self.vola,
            Parameter::Rfr => self.rfr,
        }
    }

    /// Copy with a single input replaced.
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        match parameter {
            Parameter::AssetPrice => self.asset_price = value,
            Parameter::Strike => self.strike = value,
            Parameter::TimeToExpiration => self.time_to_expiration = value,
            Parameter::Vola => self.vola = value,
            Parameter::Rfr => self.rfr = value,
        }
        self
    }

    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Checks every precondition of the closed-form model, reporting the first one violated.
    /// Non-finite values are reported before range violations.
    pub fn validate(&self) -> Result<(), PricingError> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(PricingError::NonFinite { parameter, value });
            }
        }
        for parameter in [Parameter::AssetPrice, Parameter::Strike] {
            let value = self.get(parameter);
            if value <= 0.0 {
                return Err(PricingError::NotPositive { parameter, value });
            }
        }
        for parameter in [Parameter::TimeToExpiration, Parameter::Vola] {
            let value = self.get(parameter);
            if value < 0.0 {
                return Err(PricingError::Negative { parameter, value });
            }
        }
        Ok(())
    }

    /// `K * exp(-r T)`
    pub fn discounted_strike(&self) -> f64 {
        self.strike * (-self.rfr * self.time_to_expiration).exp()
    }

    /// Zero volatility or zero time to expiration, or a total volatility `vola * sqrt(T)`
    /// that underflows to zero; d1 and d2 are undefined.
    pub fn is_degenerate(&self) -> bool {
        self.vola == 0.0
            || self.time_to_expiration == 0.0
            || self.vola * self.time_to_expiration.sqrt() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atm_call() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
    }

    #[test]
    fn valid_parameters() {
        assert!(atm_call().validate().is_ok());
        assert!(atm_call().with(Parameter::Rfr, -0.01).validate().is_ok());
        assert!(atm_call().with(Parameter::Vola, 0.0).validate().is_ok());
        assert!(atm_call()
            .with(Parameter::TimeToExpiration, 0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn non_positive_prices() {
        assert_eq!(
            atm_call().with(Parameter::AssetPrice, 0.0).validate(),
            Err(PricingError::NotPositive {
                parameter: Parameter::AssetPrice,
                value: 0.0
            })
        );
        let err = atm_call()
            .with(Parameter::Strike, -5.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), Parameter::Strike);
    }

    #[test]
    fn negative_vola_and_time() {
        let err = atm_call().with(Parameter::Vola, -0.1).validate().unwrap_err();
        assert!(matches!(err, PricingError::Negative { parameter: Parameter::Vola, .. }));

        let err = atm_call()
            .with(Parameter::TimeToExpiration, -1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), Parameter::TimeToExpiration);
    }

    #[test]
    fn non_finite_inputs() {
        for parameter in Parameter::ALL {
            for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                let err = atm_call().with(parameter, value).validate().unwrap_err();
                assert!(matches!(err, PricingError::NonFinite { .. }));
                assert_eq!(err.parameter(), parameter);
            }
        }
    }

    #[test]
    fn get_and_with() {
        let dp = atm_call();
        for (i, parameter) in Parameter::ALL.into_iter().enumerate() {
            let value = 7.0 + i as f64;
            let changed = dp.with(parameter, value);
            assert_eq!(changed.get(parameter), value);
            assert_eq!(dp.get(parameter), atm_call().get(parameter));
        }
        assert_eq!(dp.with_option_type(OptionType::Put).option_type, OptionType::Put);
    }

    #[test]
    fn underflowing_total_vola_is_degenerate() {
        assert!(!atm_call().is_degenerate());
        assert!(atm_call().with(Parameter::Vola, 0.0).is_degenerate());
        let dp = atm_call()
            .with(Parameter::Vola, 1e-200)
            .with(Parameter::TimeToExpiration, 1e-300);
        assert!(dp.vola > 0.0 && dp.time_to_expiration > 0.0);
        assert!(dp.is_degenerate());
    }

    #[test]
    fn error_message_names_parameter() {
        let err = atm_call().with(Parameter::Strike, 0.0).validate().unwrap_err();
        assert_eq!(err.to_string(), "strike must be strictly positive, got 0");
    }
}
