//! Domain model for swap display: chains, currencies, amounts, pairs,
//! routes and trades.
//!
//! Every type here is an immutable value. Trades are priced with the
//! constant product formula and the standard 0.30% liquidity provider fee.

pub mod chain;
pub mod entities;
pub mod enums;
pub mod error;
pub mod fees;
pub mod math;
pub mod value_objects;

pub use chain::{ChainId, NATIVE_DECIMALS, NativeAsset, native_asset};
pub use entities::{Currency, Pair, Route, Token, Trade};
pub use enums::{Rounding, TradeType};
pub use error::{DomainError, Result};
pub use value_objects::{CurrencyAmount, Percent, Price};
