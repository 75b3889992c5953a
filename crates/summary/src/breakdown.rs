//! Price impact and liquidity provider fee of a trade.

use primitive_types::U256;
use serde::Serialize;
use tracing::warn;
use tradeview_domain::fees::{LP_FEE_BPS, realized_fee_fraction};
use tradeview_domain::{CurrencyAmount, Percent, Trade};

const BPS: u64 = 10_000;

/// Price impact split from the fee paid to liquidity providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBreakdown {
    /// Price impact caused by trade size alone.
    pub price_impact_without_fee: Percent,
    /// Fee paid across every hop, in the input currency. `None` when it
    /// cannot be represented.
    pub realized_lp_fee: Option<CurrencyAmount>,
}

/// Splits a trade's price impact into size impact and LP fee.
#[must_use]
pub fn compute_trade_price_breakdown(trade: &Trade) -> PriceBreakdown {
    let hops = trade.route.pairs.len();
    let fee_fraction = realized_fee_fraction(hops);

    let realized_lp_fee = realized_fee_amount(trade.input_amount.raw, hops)
        .map(|raw| CurrencyAmount::new(trade.input_amount.currency.clone(), raw));
    if realized_lp_fee.is_none() {
        warn!(hops, input = %trade.input_amount.raw, "LP fee overflowed");
    }

    PriceBreakdown {
        price_impact_without_fee: Percent(trade.price_impact.0 - fee_fraction.0),
        realized_lp_fee,
    }
}

/// floor(input * (10000^hops - 9970^hops) / 10000^hops), exact in integers.
fn realized_fee_amount(input: U256, hops: usize) -> Option<U256> {
    let hops = U256::from(hops);
    let denominator = U256::from(BPS).checked_pow(hops)?;
    let remaining = U256::from(BPS - u64::from(LP_FEE_BPS)).checked_pow(hops)?;
    let fee = input.checked_mul(denominator - remaining)?;
    Some(fee / denominator)
}
