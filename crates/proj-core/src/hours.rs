//! Fixed-point helpers for hour and cost values.
//!
//! Every decimal that crosses the store boundary is held at exactly two
//! fractional digits: `10` becomes `10.00`, `1.005` becomes `1.01`.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::CoreError;

/// Number of fractional digits stored for hours and costs.
pub const SCALE: u32 = 2;

/// Round half away from zero to two fractional digits and pin the scale.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the value has too many integer digits
/// to carry two fractional digits.
pub fn normalize_hours(value: Decimal) -> Result<Decimal, CoreError> {
    let mut rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(SCALE);
    // rescale stops short of SCALE when the mantissa would overflow.
    if rounded.scale() != SCALE {
        return Err(CoreError::Validation(format!(
            "{value} is too large to store with {SCALE} decimal places."
        )));
    }
    Ok(rounded)
}

/// Parse user-supplied text into a normalized decimal.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the text is not a decimal number or is
/// too large to hold two fractional digits.
pub fn parse_hours(input: &str) -> Result<Decimal, CoreError> {
    let trimmed = input.trim();
    let value = Decimal::from_str(trimmed)
        .map_err(|_| CoreError::Validation(format!("{trimmed} is not a valid decimal number.")))?;
    normalize_hours(value)
}
