//! Liquidity provider fee.

use crate::value_objects::Percent;
use rust_decimal::Decimal;

/// Fee charged by every pair on the input of a hop, in basis points.
pub const LP_FEE_BPS: u32 = 30;

/// Fraction of the input retained by liquidity providers across `hops` pairs.
///
/// 1 - (1 - fee)^hops
pub fn realized_fee_fraction(hops: usize) -> Percent {
    let after_fee = Decimal::ONE - Percent::from_bps(LP_FEE_BPS).0;
    let remaining = (0..hops).fold(Decimal::ONE, |acc, _| acc * after_fee);
    Percent(Decimal::ONE - remaining)
}
