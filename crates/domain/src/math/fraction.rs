//! Ratios of raw integer amounts.
//!
//! Raw amounts routinely exceed the 96-bit mantissa of `Decimal` (a trillion
//! tokens at 18 decimals is 1e30), but their ratios do not. The division is
//! done on U256 and only the quotient, truncated to 28 digits, becomes a
//! decimal.

use crate::error::{DomainError, Result};
use primitive_types::{U256, U512};
use rust_decimal::Decimal;

const MAX_DIGITS: usize = 28;

/// `numerator / denominator` as a decimal, truncated to 28 digits.
pub fn ratio(numerator: U256, denominator: U256) -> Result<Decimal> {
    if denominator.is_zero() {
        return Err(DomainError::DivisionByZero);
    }

    let (quotient, remainder) = numerator.div_mod(denominator);
    let int_digits = if quotient.is_zero() {
        0
    } else {
        quotient.to_string().len()
    };
    if int_digits > MAX_DIGITS {
        return Err(DomainError::Overflow);
    }

    let scale = MAX_DIGITS - int_digits;
    let fraction = remainder.full_mul(U256::exp10(scale)) / U512::from(denominator);
    let fraction = U256::try_from(fraction).map_err(|_| DomainError::Overflow)?;
    // quotient < 10^int_digits and fraction < 10^scale, so this stays below 10^28
    let mantissa = quotient * U256::exp10(scale) + fraction;

    Decimal::try_from_i128_with_scale(mantissa.as_u128() as i128, scale as u32)
        .map(|d| d.normalize())
        .map_err(|e| DomainError::Conversion(e.to_string()))
}
