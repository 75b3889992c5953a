//! Display configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use tradeview_domain::ChainId;

/// Upper bound the settings panel lets users pick.
pub const MAX_SLIPPAGE_BPS: u32 = 5_000;

/// Slippage applied until the user picks another value.
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// Significant digits shown for amounts.
pub const DISPLAY_SIGNIFICANT_DIGITS: u8 = 4;

/// Pair analytics site; the pair address is appended.
pub const DEFAULT_ANALYTICS_BASE_URL: &str = "https://info.y3d.finance/pair/";

/// Allowed slippage tolerance in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlippageBps(u32);

impl SlippageBps {
    /// Wraps a caller-supplied tolerance without range checks.
    pub const fn new(bps: u32) -> Self {
        Self(bps)
    }

    /// Wraps a tolerance only if it is within `0..=MAX_SLIPPAGE_BPS`.
    pub const fn checked(bps: u32) -> Option<Self> {
        if bps <= MAX_SLIPPAGE_BPS {
            Some(Self(bps))
        } else {
            None
        }
    }

    pub const fn bps(self) -> u32 {
        self.0
    }
}

impl Default for SlippageBps {
    fn default() -> Self {
        Self(DEFAULT_SLIPPAGE_BPS)
    }
}

impl fmt::Display for SlippageBps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bps", self.0)
    }
}

/// Settings a swap details panel renders with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Chain the wallet is connected to.
    pub chain_id: ChainId,
    /// User's slippage tolerance.
    pub allowed_slippage: SlippageBps,
    /// Base URL for the pair analytics link.
    pub analytics_base_url: String,
    /// Significant digits for amounts.
    pub significant_digits: u8,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            chain_id: ChainId::default(),
            allowed_slippage: SlippageBps::default(),
            analytics_base_url: DEFAULT_ANALYTICS_BASE_URL.to_string(),
            significant_digits: DISPLAY_SIGNIFICANT_DIGITS,
        }
    }
}
