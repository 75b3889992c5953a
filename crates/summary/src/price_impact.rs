//! Price impact display and warning levels.

use serde::Serialize;
use tradeview_domain::Percent;

/// 0.01%
pub const ONE_BIPS: u32 = 1;
/// Price impact above which the user is warned.
pub const ALLOWED_PRICE_IMPACT_LOW_BPS: u32 = 100;
/// Price impact above which the warning is emphasised.
pub const ALLOWED_PRICE_IMPACT_MEDIUM_BPS: u32 = 300;
/// Price impact above which the swap button turns red.
pub const ALLOWED_PRICE_IMPACT_HIGH_BPS: u32 = 500;
/// Price impact above which the user must type a confirmation.
pub const PRICE_IMPACT_WITHOUT_FEE_CONFIRM_MIN_BPS: u32 = 1_000;
/// Price impact above which swapping is blocked outside expert mode.
pub const BLOCKED_PRICE_IMPACT_NON_EXPERT_BPS: u32 = 1_500;

/// Warning level for a price impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum Severity {
    None = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Blocked = 4,
}

impl Severity {
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// `"-"` when absent, `"<0.01%"` below one basis point, else two decimals.
#[must_use]
pub fn format_price_impact(price_impact: Option<&Percent>) -> String {
    match price_impact {
        None => "-".to_string(),
        Some(impact) if impact.is_less_than(&Percent::from_bps(ONE_BIPS)) => "<0.01%".to_string(),
        Some(impact) => format!("{}%", impact.to_fixed(2)),
    }
}

/// Warning level for a price impact; absent impact is not a warning.
#[must_use]
pub fn warning_severity(price_impact: Option<&Percent>) -> Severity {
    let Some(impact) = price_impact else {
        return Severity::None;
    };
    let at_least = |bps: u32| !impact.is_less_than(&Percent::from_bps(bps));
    if at_least(BLOCKED_PRICE_IMPACT_NON_EXPERT_BPS) {
        Severity::Blocked
    } else if at_least(ALLOWED_PRICE_IMPACT_HIGH_BPS) {
        Severity::High
    } else if at_least(ALLOWED_PRICE_IMPACT_MEDIUM_BPS) {
        Severity::Medium
    } else if at_least(ALLOWED_PRICE_IMPACT_LOW_BPS) {
        Severity::Low
    } else {
        Severity::None
    }
}

/// Whether a swap with this impact needs an explicit confirmation.
#[must_use]
pub fn requires_confirmation(price_impact_without_fee: &Percent) -> bool {
    !price_impact_without_fee.is_less_than(&Percent::from_bps(
        PRICE_IMPACT_WITHOUT_FEE_CONFIRM_MIN_BPS,
    ))
}
