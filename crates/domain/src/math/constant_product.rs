use crate::error::{DomainError, Result};
use crate::math::fraction;
use primitive_types::U256;
use rust_decimal::Decimal;

const BPS: u64 = 10_000;

/// Calculates the output amount for a given input amount in a constant product pool (x * y = k).
///
/// formula: dy = y * dx / (x + dx)
/// taking fee into account: dy = y * (dx * (1 - fee)) / (x + (dx * (1 - fee)))
pub fn calculate_out_amount(
    amount_in: U256,
    reserve_in: U256,
    reserve_out: U256,
    fee_bps: u32,
) -> Result<U256> {
    if amount_in.is_zero() {
        return Err(DomainError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(DomainError::InsufficientReserves);
    }

    let amount_in_with_fee = amount_in
        .checked_mul(U256::from(BPS - u64::from(fee_bps)))
        .ok_or(DomainError::Overflow)?;
    let numerator = amount_in_with_fee
        .checked_mul(reserve_out)
        .ok_or(DomainError::Overflow)?;
    let denominator = reserve_in
        .checked_mul(U256::from(BPS))
        .ok_or(DomainError::Overflow)?
        .checked_add(amount_in_with_fee)
        .ok_or(DomainError::Overflow)?;

    let amount_out = numerator / denominator;
    if amount_out.is_zero() {
        return Err(DomainError::InsufficientInputAmount);
    }
    Ok(amount_out)
}

/// Calculates the input amount required to receive exactly `amount_out`.
///
/// formula: dx = x * dy * 10000 / ((y - dy) * (10000 - fee)) + 1
pub fn calculate_in_amount(
    amount_out: U256,
    reserve_in: U256,
    reserve_out: U256,
    fee_bps: u32,
) -> Result<U256> {
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(DomainError::InsufficientReserves);
    }

    let numerator = reserve_in
        .checked_mul(amount_out)
        .ok_or(DomainError::Overflow)?
        .checked_mul(U256::from(BPS))
        .ok_or(DomainError::Overflow)?;
    let denominator = (reserve_out - amount_out)
        .checked_mul(U256::from(BPS - u64::from(fee_bps)))
        .ok_or(DomainError::Overflow)?;

    (numerator / denominator)
        .checked_add(U256::one())
        .ok_or(DomainError::Overflow)
}

/// Calculates the spot price of token_in in terms of token_out
/// Price = reserve_out / reserve_in
pub fn calculate_spot_price(reserve_in: U256, reserve_out: U256) -> Result<Decimal> {
    if reserve_in.is_zero() {
        return Err(DomainError::InsufficientReserves);
    }
    fraction::ratio(reserve_out, reserve_in)
}
