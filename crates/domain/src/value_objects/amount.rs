use crate::entities::Currency;
use crate::enums::Rounding;
use crate::math::significant;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A raw integer amount of some currency, scaled by the currency's decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub raw: U256,
}

impl CurrencyAmount {
    pub fn new(currency: Currency, raw: impl Into<U256>) -> Self {
        Self {
            currency,
            raw: raw.into(),
        }
    }

    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.currency.decimals()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Display rendering with exactly `digits` significant digits.
    ///
    /// Display only: never feed the result back into on-chain amounts.
    #[must_use]
    pub fn to_significant(&self, digits: u8, rounding: Rounding) -> String {
        significant::to_significant(&self.raw.to_string(), self.decimals(), digits, rounding)
    }
}
