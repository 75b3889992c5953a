//! JSON trade descriptions.

use anyhow::{Context, Result, bail};
use primitive_types::U256;
use serde::Deserialize;
use std::path::Path;
use tradeview_domain::{Currency, CurrencyAmount, Pair, Route, Token, Trade, TradeType};

/// A trade as written in a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeFixture {
    pub trade_type: TradeType,
    /// Raw integer amount of the fixed side.
    pub amount: String,
    pub input: Currency,
    pub output: Currency,
    pub pairs: Vec<PairFixture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairFixture {
    pub token0: Token,
    pub token1: Token,
    pub reserve0: String,
    pub reserve1: String,
    pub liquidity_token: String,
}

impl TradeFixture {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading trade file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing trade file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let fixture: Self = serde_json::from_str(raw)?;
        if fixture.pairs.is_empty() {
            bail!("trade file lists no pairs");
        }
        Ok(fixture)
    }

    /// Prices the trade against the listed pair reserves.
    pub fn into_trade(self) -> Result<Trade> {
        let pairs = self
            .pairs
            .into_iter()
            .enumerate()
            .map(|(index, pair)| {
                Pair::new(
                    pair.token0,
                    parse_raw(&pair.reserve0)?,
                    pair.token1,
                    parse_raw(&pair.reserve1)?,
                    pair.liquidity_token,
                )
                .with_context(|| format!("pair {index}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let route = Route::new(pairs, self.input, Some(self.output)).context("building route")?;
        let amount = parse_raw(&self.amount)?;
        let trade = match self.trade_type {
            TradeType::ExactInput => {
                let amount_in = CurrencyAmount::new(route.input.clone(), amount);
                Trade::exact_in(route, amount_in)
            }
            TradeType::ExactOutput => {
                let amount_out = CurrencyAmount::new(route.output.clone(), amount);
                Trade::exact_out(route, amount_out)
            }
        };
        trade.context("pricing trade")
    }
}

fn parse_raw(value: &str) -> Result<U256> {
    U256::from_dec_str(value).map_err(|e| anyhow::anyhow!("invalid raw amount {value:?}: {e:?}"))
}
