//! Trade summary shown under the swap form.
//!
//! Exact-input trades surface the minimum the user will receive, exact-output
//! trades the maximum they will sell. Bounds are rounded away from the user's
//! favour when shortened to display precision, so the shown figure is never
//! looser than the computed one.

use serde::Serialize;
use tracing::{debug, warn};
use tradeview_domain::{ChainId, CurrencyAmount, DomainError, Percent, Rounding, Trade, TradeType};

use crate::breakdown::compute_trade_price_breakdown;
use crate::config::{DISPLAY_SIGNIFICANT_DIGITS, SlippageBps, SummaryConfig};
use crate::error::{Result, SummaryError};
use crate::price_impact::{Severity, format_price_impact, warning_severity};
use crate::slippage::{Field, compute_slippage_adjusted_amounts};
use crate::symbol::resolve_symbol;

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "-";

/// Which bound the summary shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundLabel {
    MinimumReceived,
    MaximumSold,
}

impl BoundLabel {
    /// Translation key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::MinimumReceived => "minimumReceived",
            Self::MaximumSold => "maximumSold",
        }
    }

    /// English fallback text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::MinimumReceived => "minimum received",
            Self::MaximumSold => "maximum sold",
        }
    }

    /// Side of the form the bound applies to.
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::MinimumReceived => Field::Output,
            Self::MaximumSold => Field::Input,
        }
    }

    /// Rounding that keeps the displayed bound conservative.
    #[must_use]
    pub const fn rounding(self) -> Rounding {
        match self {
            Self::MinimumReceived => Rounding::Down,
            Self::MaximumSold => Rounding::Up,
        }
    }
}

impl From<TradeType> for BoundLabel {
    fn from(trade_type: TradeType) -> Self {
        match trade_type {
            TradeType::ExactInput => Self::MinimumReceived,
            TradeType::ExactOutput => Self::MaximumSold,
        }
    }
}

/// Display values for one trade under one slippage setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeSummary {
    pub label: BoundLabel,
    /// Bound amount at display precision, `None` when unavailable.
    pub display_amount: Option<String>,
    /// Symbol of the bound's currency.
    pub display_symbol: String,
    /// Symbol of the input currency, in which the LP fee is paid.
    pub input_symbol: String,
    pub price_impact_without_fee: Percent,
    pub realized_lp_fee: Option<CurrencyAmount>,
    pub significant_digits: u8,
}

impl TradeSummary {
    /// `"<amount> <symbol>"`, or the placeholder when the bound is missing.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.display_amount {
            Some(amount) => format!("{amount} {}", self.display_symbol),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// LP fee in the input currency, or the placeholder.
    #[must_use]
    pub fn formatted_lp_fee(&self) -> String {
        match &self.realized_lp_fee {
            Some(fee) => format!(
                "{} {}",
                fee.to_significant(self.significant_digits, Rounding::HalfUp),
                self.input_symbol
            ),
            None => PLACEHOLDER.to_string(),
        }
    }

    #[must_use]
    pub fn formatted_price_impact(&self) -> String {
        format_price_impact(Some(&self.price_impact_without_fee))
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        warning_severity(Some(&self.price_impact_without_fee))
    }
}

/// Derives the summary for `trade` at four significant digits.
///
/// # Errors
///
/// Returns [`SummaryError::MalformedTrade`] when the trade's route or amounts
/// are inconsistent, or when the route lives on another chain than
/// `chain_id`. Nothing is displayed for such trades.
pub fn derive_summary(
    trade: &Trade,
    allowed_slippage: SlippageBps,
    chain_id: ChainId,
) -> Result<TradeSummary> {
    derive_summary_with_digits(trade, allowed_slippage, chain_id, DISPLAY_SIGNIFICANT_DIGITS)
}

/// Same as [`derive_summary`] with the settings taken from `config`.
pub fn derive_summary_with_config(trade: &Trade, config: &SummaryConfig) -> Result<TradeSummary> {
    derive_summary_with_digits(
        trade,
        config.allowed_slippage,
        config.chain_id,
        config.significant_digits,
    )
}

/// Same as [`derive_summary`] with a custom display precision.
pub fn derive_summary_with_digits(
    trade: &Trade,
    allowed_slippage: SlippageBps,
    chain_id: ChainId,
    significant_digits: u8,
) -> Result<TradeSummary> {
    trade.validate().map_err(|err| {
        warn!(%err, trade_type = %trade.trade_type, "refusing to summarise malformed trade");
        SummaryError::MalformedTrade(err)
    })?;
    if let Some(route_chain) = trade.route.chain_id()
        && route_chain != chain_id
    {
        warn!(route = %route_chain, connected = %chain_id, "trade priced on another chain");
        return Err(SummaryError::MalformedTrade(DomainError::ChainMismatch {
            expected: route_chain.id(),
            actual: chain_id.id(),
        }));
    }

    let breakdown = compute_trade_price_breakdown(trade);
    let adjusted = compute_slippage_adjusted_amounts(Some(trade), allowed_slippage);

    let label = BoundLabel::from(trade.trade_type);
    let currency = match label.field() {
        Field::Input => &trade.input_amount.currency,
        Field::Output => &trade.output_amount.currency,
    };
    let display_amount = adjusted
        .get(label.field())
        .map(|amount| amount.to_significant(significant_digits, label.rounding()));

    debug!(
        trade_type = %trade.trade_type,
        slippage = %allowed_slippage,
        chain = %chain_id,
        label = label.key(),
        amount = display_amount.as_deref().unwrap_or(PLACEHOLDER),
        "Derived trade summary"
    );

    Ok(TradeSummary {
        label,
        display_amount,
        display_symbol: resolve_symbol(Some(currency), chain_id),
        input_symbol: resolve_symbol(Some(&trade.input_amount.currency), chain_id),
        price_impact_without_fee: breakdown.price_impact_without_fee,
        realized_lp_fee: breakdown.realized_lp_fee,
        significant_digits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;
    use rust_decimal_macros::dec;
    use tradeview_domain::{Currency, Pair, Price, Route, Token};

    fn toka() -> Token {
        Token::new(ChainId::Mainnet, "0x0000000000000000000000000000000000000001", 18, "TOKA", "Token A")
    }

    fn tokb() -> Token {
        Token::new(ChainId::Mainnet, "0x0000000000000000000000000000000000000002", 18, "TOKB", "Token B")
    }

    fn units(whole: u64) -> U256 {
        U256::from(whole) * U256::exp10(18)
    }

    /// A trade with fixed nominal amounts on a deep A/B pool.
    fn nominal_trade(trade_type: TradeType, input: U256, output: U256) -> Trade {
        let pair = Pair::new(toka(), units(1_000_000), tokb(), units(1_000_000), "0xpair").unwrap();
        let route = Route::new(vec![pair], toka().into(), None).unwrap();
        Trade {
            route,
            trade_type,
            input_amount: CurrencyAmount::new(toka().into(), input),
            output_amount: CurrencyAmount::new(tokb().into(), output),
            execution_price: Price::new(dec!(1)),
            price_impact: Percent(dec!(0.01)),
        }
    }

    #[test]
    fn test_exact_input_shows_minimum_received() {
        let trade = nominal_trade(TradeType::ExactInput, units(101), units(100));
        let summary = derive_summary(&trade, SlippageBps::new(50), ChainId::Mainnet).unwrap();
        assert_eq!(summary.label, BoundLabel::MinimumReceived);
        assert_eq!(summary.label.key(), "minimumReceived");
        assert_eq!(summary.display_text(), "99.50 TOKB");
    }

    #[test]
    fn test_exact_output_shows_maximum_sold() {
        let trade = nominal_trade(TradeType::ExactOutput, units(200), units(198));
        let summary = derive_summary(&trade, SlippageBps::new(100), ChainId::Mainnet).unwrap();
        assert_eq!(summary.label, BoundLabel::MaximumSold);
        assert_eq!(summary.label.text(), "maximum sold");
        assert_eq!(summary.display_amount.as_deref(), Some("202.0"));
        assert_eq!(summary.display_symbol, "TOKA");
        assert_eq!(summary.display_text(), "202.0 TOKA");
    }

    #[test]
    fn test_minimum_received_never_exceeds_output() {
        let output = U256::from(99_996u64) * U256::exp10(15); // 99.996
        let trade = nominal_trade(TradeType::ExactInput, units(101), output);
        let mut previous = U256::MAX;
        for bps in [0u32, 1, 10, 50, 100, 500, 1_000, 5_000] {
            let summary = derive_summary(&trade, SlippageBps::new(bps), ChainId::Mainnet).unwrap();
            let shown = parse_units(summary.display_amount.as_deref().unwrap());
            assert!(shown <= output, "{bps} bps shows {shown}");
            assert!(shown <= previous, "not monotonic at {bps} bps");
            previous = shown;
        }
    }

    #[test]
    fn test_maximum_sold_never_below_input() {
        let input = U256::from(99_996u64) * U256::exp10(15);
        let trade = nominal_trade(TradeType::ExactOutput, input, units(98));
        let mut previous = U256::zero();
        for bps in [0u32, 1, 10, 50, 100, 500, 1_000, 5_000] {
            let summary = derive_summary(&trade, SlippageBps::new(bps), ChainId::Mainnet).unwrap();
            let shown = parse_units(summary.display_amount.as_deref().unwrap());
            assert!(shown >= input, "{bps} bps shows {shown}");
            assert!(shown >= previous, "not monotonic at {bps} bps");
            previous = shown;
        }
    }

    #[test]
    fn test_idempotent() {
        let trade = nominal_trade(TradeType::ExactInput, units(101), units(100));
        let first = derive_summary(&trade, SlippageBps::new(50), ChainId::Mainnet).unwrap();
        let second = derive_summary(&trade, SlippageBps::new(50), ChainId::Mainnet).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.display_text(), second.display_text());
    }

    #[test]
    fn test_native_symbol_depends_on_chain() {
        let weth = ChainId::Mainnet.wrapped_native();
        let pair = Pair::new(weth, units(1_000), tokb(), units(3_000_000), "0xpair").unwrap();
        let route = Route::new(vec![pair], tokb().into(), Some(Currency::Native)).unwrap();
        let trade = Trade::exact_in(route, CurrencyAmount::new(tokb().into(), units(3_000))).unwrap();

        let summary = derive_summary(&trade, SlippageBps::default(), ChainId::Mainnet).unwrap();
        assert!(summary.display_text().ends_with(" ETH"));
        assert_eq!(summary.input_symbol, "TOKB");
    }

    #[test]
    fn test_other_chain_is_rejected() {
        let weth = ChainId::Mainnet.wrapped_native();
        let pair = Pair::new(weth, units(1_000), tokb(), units(3_000_000), "0xpair").unwrap();
        let route = Route::new(vec![pair], tokb().into(), Some(Currency::Native)).unwrap();
        let trade = Trade::exact_in(route, CurrencyAmount::new(tokb().into(), units(3_000))).unwrap();

        let result = derive_summary(&trade, SlippageBps::default(), ChainId::Bsc);
        assert_eq!(
            result,
            Err(SummaryError::MalformedTrade(DomainError::ChainMismatch {
                expected: 1,
                actual: 56,
            }))
        );
    }

    #[test]
    fn test_trillion_token_pool() {
        let shib = Token::new(
            ChainId::Mainnet,
            "0x95aD61b0a150d79219dCF64E1E6Cc01f0B64C4cE",
            18,
            "SHIB",
            "SHIBA INU",
        );
        let weth = ChainId::Mainnet.wrapped_native();
        let pair = Pair::new(
            shib.clone(),
            units(1_000_000_000_000),
            weth,
            units(1_000),
            "0x811beEd0119b4AfCE20D2583EB608C6F7AF1954f",
        )
        .unwrap();
        let route = Route::new(vec![pair], shib.clone().into(), Some(Currency::Native)).unwrap();
        let trade =
            Trade::exact_in(route, CurrencyAmount::new(shib.into(), units(1_000_000_000))).unwrap();

        let summary = derive_summary(&trade, SlippageBps::default(), ChainId::Mainnet).unwrap();
        assert_eq!(summary.label, BoundLabel::MinimumReceived);
        assert!(summary.display_text().ends_with(" ETH"));
        // 1e9 SHIB into a 1e12 reserve moves the price by about 0.1%
        assert_eq!(summary.formatted_price_impact(), "0.10%");
        assert_eq!(summary.formatted_lp_fee(), "3000000 SHIB");
    }

    #[test]
    fn test_price_impact_and_fee() {
        let trade = nominal_trade(TradeType::ExactInput, units(100), units(98));
        let summary = derive_summary(&trade, SlippageBps::default(), ChainId::Mainnet).unwrap();
        // 1% total impact minus 0.3% fee
        assert_eq!(summary.price_impact_without_fee, Percent(dec!(0.007)));
        assert_eq!(summary.formatted_price_impact(), "0.70%");
        assert_eq!(summary.formatted_lp_fee(), "0.3000 TOKA");
        assert_eq!(summary.severity(), Severity::None);
    }

    #[test]
    fn test_missing_bound_shows_placeholder() {
        let trade = nominal_trade(TradeType::ExactInput, units(101), U256::MAX);
        let summary = derive_summary(&trade, SlippageBps::new(50), ChainId::Mainnet).unwrap();
        assert_eq!(summary.display_amount, None);
        assert_eq!(summary.display_text(), PLACEHOLDER);
    }

    #[test]
    fn test_malformed_trade_is_an_error() {
        let mut trade = nominal_trade(TradeType::ExactInput, units(101), units(100));
        trade.output_amount.currency = toka().into();
        let result = derive_summary(&trade, SlippageBps::new(50), ChainId::Mainnet);
        assert!(matches!(
            result,
            Err(SummaryError::MalformedTrade(DomainError::CurrencyMismatch { .. }))
        ));

        let mut trade = nominal_trade(TradeType::ExactInput, units(101), units(100));
        trade.route.pairs.clear();
        let result = derive_summary(&trade, SlippageBps::new(50), ChainId::Mainnet);
        assert_eq!(result, Err(SummaryError::MalformedTrade(DomainError::EmptyRoute)));
    }

    #[test]
    fn test_config_digits() {
        let trade = nominal_trade(TradeType::ExactInput, units(101), units(100));
        let config = SummaryConfig {
            significant_digits: 6,
            ..SummaryConfig::default()
        };
        let summary = derive_summary_with_config(&trade, &config).unwrap();
        // 100 / 1.005 = 99.50248...
        assert_eq!(summary.display_amount.as_deref(), Some("99.5024"));
    }

    /// Parses a rendered 18-decimal amount back to raw units.
    fn parse_units(shown: &str) -> U256 {
        let (int_part, frac_part) = shown.split_once('.').unwrap_or((shown, ""));
        let digits = format!("{int_part}{frac_part:0<18}");
        U256::from_dec_str(&digits).unwrap()
    }
}
