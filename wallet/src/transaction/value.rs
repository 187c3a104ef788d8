//! Transfer amounts.
//!
//! Values are base-10 integer strings in the smallest unit (10^-18 EGLD).
//! They routinely exceed `u64` (1 EGLD alone is 10^18), so we never parse
//! them into a machine integer. Validation and normalization work on the
//! digits directly. No floating point anywhere near monetary values.

use thiserror::Error;

use crate::config::NATIVE_TOKEN_DECIMALS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("value is empty")]
    Empty,

    #[error("value '{0}' is not a non-negative base-10 integer")]
    NotAnInteger(String),

    #[error("value '{value}' has more than {max} decimals")]
    TooManyDecimals { value: String, max: usize },
}

/// Validate a value string and strip leading zeros.
///
/// `"007"` becomes `"7"`, `"0"` and `"000"` become `"0"`. Signs, spaces,
/// decimal points and exponents are rejected.
pub fn normalize_value(value: &str) -> Result<String, ValueError> {
    if value.is_empty() {
        return Err(ValueError::Empty);
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValueError::NotAnInteger(value.to_string()));
    }
    let trimmed = value.trim_start_matches('0');
    Ok(if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    })
}

/// Convert a human amount of EGLD (`"1.5"`) into the smallest unit
/// (`"1500000000000000000"`).
pub fn from_coins(amount: &str) -> Result<String, ValueError> {
    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(ValueError::Empty);
    }
    if fraction.len() > NATIVE_TOKEN_DECIMALS {
        return Err(ValueError::TooManyDecimals {
            value: amount.to_string(),
            max: NATIVE_TOKEN_DECIMALS,
        });
    }
    let digits = format!(
        "{}{}{}",
        whole,
        fraction,
        "0".repeat(NATIVE_TOKEN_DECIMALS - fraction.len())
    );
    normalize_value(&digits).map_err(|_| ValueError::NotAnInteger(amount.to_string()))
}
