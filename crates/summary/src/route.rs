//! Route and pair analytics helpers for the swap details panel.

use tradeview_domain::{ChainId, Currency, Trade};

use crate::symbol::resolve_symbol;

/// The route is only worth showing when it goes through an intermediate token.
#[must_use]
pub fn should_show_route(trade: &Trade) -> bool {
    trade.route.path.len() > 2
}

/// Symbols along the route. The endpoints use the trade's own currencies so
/// that native assets show their native symbol rather than the wrapped one.
#[must_use]
pub fn route_symbols(trade: &Trade, chain_id: ChainId) -> Vec<String> {
    let last = trade.route.path.len().saturating_sub(1);
    trade
        .route
        .path
        .iter()
        .enumerate()
        .map(|(index, token)| {
            if index == 0 {
                resolve_symbol(Some(&trade.route.input), chain_id)
            } else if index == last {
                resolve_symbol(Some(&trade.route.output), chain_id)
            } else {
                resolve_symbol(Some(&Currency::Token(token.clone())), chain_id)
            }
        })
        .collect()
}

/// Analytics page for the trade's first pair.
#[must_use]
pub fn pair_analytics_url(trade: &Trade, base_url: &str) -> Option<String> {
    trade
        .route
        .pairs
        .first()
        .map(|pair| format!("{base_url}{}", pair.liquidity_token_address))
}
