//! Significant-digit rendering of fixed-point integers.
//!
//! Works on the decimal digit string of the raw amount so that no
//! precision is lost before rounding. The output never uses exponent
//! notation or group separators and always carries exactly the requested
//! number of significant digits.

use crate::enums::Rounding;

/// Renders `digits * 10^-decimals` with `significant` significant digits.
///
/// `digits` must be a plain base-10 integer string (as produced by
/// `U256::to_string`). Zero renders as `"0"`; a zero `significant` is
/// treated as one.
#[must_use]
pub fn to_significant(digits: &str, decimals: u8, significant: u8, rounding: Rounding) -> String {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }
    let significant = usize::from(significant.max(1));

    // Position of the decimal point relative to the first digit.
    let mut int_len = digits.len() as i64 - i64::from(decimals);

    let (kept, discarded) = digits.split_at(digits.len().min(significant));
    let mut mantissa: Vec<u8> = kept.bytes().collect();
    if rounding.rounds_up(discarded) && increment(&mut mantissa) {
        // 999 -> 1000: keep the width and move the point.
        mantissa.insert(0, b'1');
        mantissa.truncate(significant);
        int_len += 1;
    }
    mantissa.resize(significant, b'0');

    // mantissa only holds ASCII digits
    let mantissa = String::from_utf8_lossy(&mantissa).into_owned();
    if int_len <= 0 {
        format!("0.{}{}", "0".repeat(int_len.unsigned_abs() as usize), mantissa)
    } else if int_len as usize >= significant {
        format!("{}{}", mantissa, "0".repeat(int_len as usize - significant))
    } else {
        let (int_part, frac_part) = mantissa.split_at(int_len as usize);
        format!("{int_part}.{frac_part}")
    }
}

/// Adds one to a digit string in place. Returns `true` on carry-out.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}
