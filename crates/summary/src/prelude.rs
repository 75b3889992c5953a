//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use tradeview_summary::prelude::*;
//! ```

// Summary
pub use crate::summary::{
    BoundLabel, PLACEHOLDER, TradeSummary, derive_summary, derive_summary_with_config,
    derive_summary_with_digits,
};

// Symbols
pub use crate::symbol::resolve_symbol;

// Pricing
pub use crate::breakdown::{PriceBreakdown, compute_trade_price_breakdown};
pub use crate::price_impact::{
    Severity, format_price_impact, requires_confirmation, warning_severity,
};
pub use crate::slippage::{AdjustedAmounts, Field, compute_slippage_adjusted_amounts};

// Route
pub use crate::route::{pair_analytics_url, route_symbols, should_show_route};

// Configuration and errors
pub use crate::config::{SlippageBps, SummaryConfig};
pub use crate::error::{Result, SummaryError};
