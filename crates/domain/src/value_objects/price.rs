use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ratio of raw quote units per raw base unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Chains two hops: base/mid times mid/quote.
    pub fn checked_mul(&self, other: &Price) -> Option<Self> {
        self.value.checked_mul(other.value).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_checked_mul() {
        let p = Price::new(dec!(2)).checked_mul(&Price::new(dec!(1.5))).unwrap();
        assert_eq!(p.value, dec!(3));
    }
}
