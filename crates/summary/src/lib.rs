//! Swap detail derivation for trade review screens.
//!
//! Turns a priced [`Trade`](tradeview_domain::Trade) and the user's slippage
//! tolerance into the strings a swap details panel shows: the minimum
//! received or maximum sold bound, price impact, liquidity provider fee,
//! route and analytics link. Every function here is pure: inputs are only
//! read, and nothing is cached between calls.

pub mod breakdown;
pub mod config;
pub mod error;
pub mod prelude;
pub mod price_impact;
pub mod route;
pub mod slippage;
pub mod summary;
pub mod symbol;
