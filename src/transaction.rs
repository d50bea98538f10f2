//! Transaction models for feed parsing and internal representation.

use crate::amount::Amount;
use crate::customer::CustomerId;
use crate::error::{LoyaltyError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Raw transaction record as read from a CSV row or a JSON feed entry.
///
/// Every field is kept as the text that was written, so identifiers and
/// amounts reach validation without any numeric guessing along the way.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    /// Customer identifier
    pub customer_id: String,

    /// Month number; only 1, 2 and 3 earn into a bucket
    pub month: String,

    /// Purchase amount in currency units
    pub purchase_amount: String,
}

impl TransactionRecord {
    /// Builds a raw record from one JSON feed entry.
    ///
    /// Numbers keep their literal text, so `50.99999999999999999` is not
    /// rounded on the way in.
    pub fn from_json(entry: &Value) -> Result<Self> {
        Ok(TransactionRecord {
            customer_id: json_field(entry, "customer_id")?,
            month: json_field(entry, "month")?,
            purchase_amount: json_field(entry, "purchase_amount")?,
        })
    }

    /// Validates the raw record into a typed transaction.
    pub fn parse(self) -> Result<Transaction> {
        let customer_id = CustomerId::from_str(&self.customer_id)?;
        let month = parse_month(&self.month)?;
        let amount = Amount::from_str(&self.purchase_amount)?;
        Ok(Transaction::new(customer_id, month, amount))
    }
}

fn json_field(entry: &Value, field: &'static str) -> Result<String> {
    match entry.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(LoyaltyError::InvalidField {
            field,
            value: other.to_string(),
            reason: "expected a number or a string",
        }),
        None => Err(LoyaltyError::InvalidField {
            field,
            value: String::new(),
            reason: "missing field",
        }),
    }
}

/// Reads a month number.
///
/// Integral values such as `1.0` count as their integer. Integers too large
/// for `i64` clamp to its bounds; they can never name a bucket either way.
/// Text that is not a whole number is rejected.
pub fn parse_month(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }

    let invalid = |reason| LoyaltyError::InvalidField {
        field: "month",
        value: trimmed.to_string(),
        reason,
    };

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(if negative { i64::MIN } else { i64::MAX });
    }

    let decimal = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    }
    .map_err(|_| invalid("month is not a number"))?;

    if !decimal.fract().is_zero() {
        return Err(invalid("month is not a whole number"));
    }

    Ok(decimal.to_i64().unwrap_or(if decimal.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// One of the three months covered by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    First,
    Second,
    Third,
}

impl Month {
    /// Number of month buckets per customer.
    pub const COUNT: usize = 3;

    /// All months in bucket order.
    pub const ALL: [Month; Month::COUNT] = [Month::First, Month::Second, Month::Third];

    /// Maps a month number to its bucket. Anything outside 1..=3 has none.
    pub fn from_number(month: i64) -> Option<Month> {
        match month {
            1 => Some(Month::First),
            2 => Some(Month::Second),
            3 => Some(Month::Third),
            _ => None,
        }
    }

    /// Zero-based bucket index.
    pub fn index(self) -> usize {
        match self {
            Month::First => 0,
            Month::Second => 1,
            Month::Third => 2,
        }
    }
}

/// A validated purchase ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction<K = CustomerId> {
    pub customer_id: K,

    /// Month number as supplied; out-of-range values are kept and ignored later.
    pub month: i64,

    pub amount: Amount,
}

impl<K> Transaction<K> {
    pub fn new(customer_id: K, month: i64, amount: Amount) -> Self {
        Transaction {
            customer_id,
            month,
            amount,
        }
    }
}
