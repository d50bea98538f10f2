//! Validated purchase amounts.
//!
//! Amounts are kept as `rust_decimal` values so that truncating fractional
//! cents never suffers from floating-point representation errors.

use crate::error::{LoyaltyError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A non-negative purchase amount in currency units.
///
/// # Invariants
///
/// - `0 <= value <= Amount::MAX_WHOLE_UNITS`
/// - `whole_units()` is the value truncated toward zero
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use loyalty_points::Amount;
///
/// let amount = Amount::from_str("120.99").unwrap();
/// assert_eq!(amount.whole_units(), 120);
/// assert!(Amount::from_str("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount {
    value: Decimal,
    whole: u64,
}

impl Amount {
    /// Largest accepted amount. Keeps every points computation inside `u64`.
    pub const MAX_WHOLE_UNITS: u64 = 1_000_000_000_000;

    /// Zero value.
    pub const ZERO: Self = Amount {
        value: Decimal::ZERO,
        whole: 0,
    };

    /// Validates a raw decimal as a purchase amount.
    ///
    /// Negative amounts are rejected rather than clamped.
    pub fn new(value: Decimal) -> Result<Self> {
        // "-0.00" parses as a signed zero
        let value = if value.is_zero() { Decimal::ZERO } else { value };

        if value < Decimal::ZERO {
            return Err(LoyaltyError::InvalidAmount {
                value: value.to_string(),
                reason: "amount must not be negative",
            });
        }
        if value > Decimal::from(Self::MAX_WHOLE_UNITS) {
            return Err(LoyaltyError::InvalidAmount {
                value: value.to_string(),
                reason: "amount exceeds the supported maximum",
            });
        }

        let whole = value
            .trunc()
            .to_u64()
            .ok_or_else(|| LoyaltyError::InvalidAmount {
                value: value.to_string(),
                reason: "amount is not representable in whole units",
            })?;

        Ok(Amount { value, whole })
    }

    /// Returns the amount with fractional units discarded.
    pub fn whole_units(&self) -> u64 {
        self.whole
    }

    /// Returns the exact decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LoyaltyError;

    fn try_from(value: Decimal) -> Result<Self> {
        Amount::new(value)
    }
}

impl FromStr for Amount {
    type Err = LoyaltyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let decimal = parse_decimal(trimmed).ok_or_else(|| LoyaltyError::InvalidAmount {
            value: trimmed.to_string(),
            reason: "amount is not a number",
        })?;
        Amount::new(decimal)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

/// Significant digits a `Decimal` can hold without rounding.
const MAX_SIGNIFICANT_DIGITS: usize = 28;

/// Parses plain or scientific decimal text exactly.
///
/// Fraction digits beyond what a `Decimal` holds are dropped instead of
/// rounded, so "50.999...9" can never round up into the next whole unit.
fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.contains(['e', 'E']) {
        return Decimal::from_scientific(text).ok();
    }

    let text = match text.split_once('.') {
        Some((int, frac)) => {
            let int_digits = int.trim_start_matches(['-', '+']).trim_start_matches('0').len();
            let room = MAX_SIGNIFICANT_DIGITS.saturating_sub(int_digits);
            if frac.len() > room && frac.bytes().all(|b| b.is_ascii_digit()) {
                Cow::Owned(format!("{}.{}", int, &frac[..room]))
            } else {
                Cow::Borrowed(text)
            }
        }
        None => Cow::Borrowed(text),
    };

    Decimal::from_str(&text).ok()
}
