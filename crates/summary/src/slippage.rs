//! Slippage-adjusted trade bounds.

use serde::Serialize;
use tracing::warn;
use tradeview_domain::{CurrencyAmount, Trade};

use crate::config::SlippageBps;

/// Side of a swap form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Input,
    Output,
}

/// Worst-case amounts per side once slippage is applied.
///
/// A side is `None` when there is no trade or the bound could not be
/// computed; it is never silently replaced with zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdjustedAmounts {
    pub input: Option<CurrencyAmount>,
    pub output: Option<CurrencyAmount>,
}

impl AdjustedAmounts {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&CurrencyAmount> {
        match field {
            Field::Input => self.input.as_ref(),
            Field::Output => self.output.as_ref(),
        }
    }
}

/// Maximum sold and minimum received for `trade` under `allowed_slippage`.
#[must_use]
pub fn compute_slippage_adjusted_amounts(
    trade: Option<&Trade>,
    allowed_slippage: SlippageBps,
) -> AdjustedAmounts {
    let Some(trade) = trade else {
        return AdjustedAmounts::default();
    };
    let bps = allowed_slippage.bps();

    let input = trade
        .maximum_amount_in(bps)
        .inspect_err(|err| warn!(%err, bps, "maximum sold unavailable"))
        .ok();
    let output = trade
        .minimum_amount_out(bps)
        .inspect_err(|err| warn!(%err, bps, "minimum received unavailable"))
        .ok();

    AdjustedAmounts { input, output }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;
    use tradeview_domain::{ChainId, Pair, Route, Token};

    fn trade() -> Trade {
        let a = Token::new(ChainId::Mainnet, "0x01", 18, "A", "A");
        let b = Token::new(ChainId::Mainnet, "0x02", 18, "B", "B");
        let pair = Pair::new(
            a.clone(),
            U256::from(1_000_000u64),
            b,
            U256::from(1_000_000u64),
            "0xlp",
        )
        .unwrap();
        let route = Route::new(vec![pair], a.clone().into(), None).unwrap();
        Trade::exact_in(route, CurrencyAmount::new(a.into(), 10_000u64)).unwrap()
    }

    #[test]
    fn test_no_trade_has_no_bounds() {
        let amounts = compute_slippage_adjusted_amounts(None, SlippageBps::default());
        assert!(amounts.get(Field::Input).is_none());
        assert!(amounts.get(Field::Output).is_none());
    }

    #[test]
    fn test_exact_input_bounds() {
        let trade = trade();
        let amounts = compute_slippage_adjusted_amounts(Some(&trade), SlippageBps::new(50));
        assert_eq!(amounts.get(Field::Input), Some(&trade.input_amount));
        assert_eq!(
            amounts.get(Field::Output).map(|a| a.raw),
            Some(U256::from(9821u64))
        );
    }

    #[test]
    fn test_overflowing_bound_is_missing() {
        let mut trade = trade();
        trade.output_amount.raw = U256::MAX;
        let amounts = compute_slippage_adjusted_amounts(Some(&trade), SlippageBps::new(50));
        assert!(amounts.output.is_none());
        assert!(amounts.input.is_some());
    }
}
