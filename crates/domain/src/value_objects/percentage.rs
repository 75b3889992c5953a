use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A fraction where 1 means 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Percent(pub Decimal);

impl Percent {
    pub fn from_bps(bps: u32) -> Self {
        Self(Decimal::from(bps) / Decimal::from(10000))
    }

    /// Percentage points with `places` fixed decimals, half-up, no `%` sign.
    #[must_use]
    pub fn to_fixed(&self, places: u32) -> String {
        let points = (self.0 * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", places as usize, points)
    }

    #[must_use]
    pub fn is_less_than(&self, other: &Percent) -> bool {
        self.0 < other.0
    }
}
