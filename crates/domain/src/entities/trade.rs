//! Trades priced along a route.
//!
//! A trade is built from a route plus the amount the user fixed. The other
//! side is computed hop by hop through the route's pairs, and the price
//! impact is measured against the route's mid price.

use crate::entities::Route;
use crate::enums::TradeType;
use crate::error::{DomainError, Result};
use crate::math::fraction::ratio;
use crate::value_objects::{CurrencyAmount, Percent, Price};
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::Serialize;

const BPS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trade {
    pub route: Route,
    pub trade_type: TradeType,
    pub input_amount: CurrencyAmount,
    pub output_amount: CurrencyAmount,
    /// Raw output units per raw input unit.
    pub execution_price: Price,
    pub price_impact: Percent,
}

impl Trade {
    /// Sells exactly `amount_in` of the route's input currency.
    pub fn exact_in(route: Route, amount_in: CurrencyAmount) -> Result<Self> {
        route.validate()?;
        expect_currency(&amount_in, &route.input)?;
        if amount_in.is_zero() {
            return Err(DomainError::ZeroAmount);
        }

        let mut amount = amount_in.raw;
        for (pair, token) in route.pairs.iter().zip(&route.path) {
            (_, amount) = pair.get_output_amount(token, amount)?;
        }
        let output_amount = CurrencyAmount::new(route.output.clone(), amount);

        Self::priced(route, TradeType::ExactInput, amount_in, output_amount)
    }

    /// Buys exactly `amount_out` of the route's output currency.
    pub fn exact_out(route: Route, amount_out: CurrencyAmount) -> Result<Self> {
        route.validate()?;
        expect_currency(&amount_out, &route.output)?;
        if amount_out.is_zero() {
            return Err(DomainError::ZeroAmount);
        }

        let mut amount = amount_out.raw;
        for (pair, token) in route.pairs.iter().zip(route.path.iter().skip(1)).rev() {
            (_, amount) = pair.get_input_amount(token, amount)?;
        }
        let input_amount = CurrencyAmount::new(route.input.clone(), amount);

        Self::priced(route, TradeType::ExactOutput, input_amount, amount_out)
    }

    fn priced(
        route: Route,
        trade_type: TradeType,
        input_amount: CurrencyAmount,
        output_amount: CurrencyAmount,
    ) -> Result<Self> {
        let execution_price = Price::new(ratio(output_amount.raw, input_amount.raw)?);
        let price_impact = compute_price_impact(&route.mid_price, &execution_price)?;
        Ok(Self {
            route,
            trade_type,
            input_amount,
            output_amount,
            execution_price,
            price_impact,
        })
    }

    /// Re-checks route structure and that both amounts are in the route's currencies.
    pub fn validate(&self) -> Result<()> {
        self.route.validate()?;
        expect_currency(&self.input_amount, &self.route.input)?;
        expect_currency(&self.output_amount, &self.route.output)?;
        if self.input_amount.is_zero() || self.output_amount.is_zero() {
            return Err(DomainError::ZeroAmount);
        }
        Ok(())
    }

    /// Least output accepted after `slippage_bps` of adverse movement.
    ///
    /// Exact-output trades already fix the output, so it is returned unchanged.
    pub fn minimum_amount_out(&self, slippage_bps: u32) -> Result<CurrencyAmount> {
        match self.trade_type {
            TradeType::ExactOutput => Ok(self.output_amount.clone()),
            TradeType::ExactInput => {
                let raw = self
                    .output_amount
                    .raw
                    .checked_mul(U256::from(BPS))
                    .ok_or(DomainError::Overflow)?
                    / U256::from(BPS + u64::from(slippage_bps));
                Ok(CurrencyAmount::new(self.output_amount.currency.clone(), raw))
            }
        }
    }

    /// Most input spent after `slippage_bps` of adverse movement.
    ///
    /// Exact-input trades already fix the input, so it is returned unchanged.
    pub fn maximum_amount_in(&self, slippage_bps: u32) -> Result<CurrencyAmount> {
        match self.trade_type {
            TradeType::ExactInput => Ok(self.input_amount.clone()),
            TradeType::ExactOutput => {
                let raw = self
                    .input_amount
                    .raw
                    .checked_mul(U256::from(BPS + u64::from(slippage_bps)))
                    .ok_or(DomainError::Overflow)?
                    / U256::from(BPS);
                Ok(CurrencyAmount::new(self.input_amount.currency.clone(), raw))
            }
        }
    }
}

/// 1 - execution / mid, i.e. (mid * input - output) / (mid * input)
pub fn compute_price_impact(mid_price: &Price, execution_price: &Price) -> Result<Percent> {
    if mid_price.value.is_zero() {
        return Err(DomainError::InsufficientReserves);
    }
    let realized = execution_price
        .value
        .checked_div(mid_price.value)
        .ok_or(DomainError::Overflow)?;
    Ok(Percent(Decimal::ONE - realized))
}

fn expect_currency(amount: &CurrencyAmount, expected: &crate::entities::Currency) -> Result<()> {
    if amount.currency != *expected {
        return Err(DomainError::CurrencyMismatch {
            expected: expected.to_string(),
            actual: amount.currency.to_string(),
        });
    }
    Ok(())
}
