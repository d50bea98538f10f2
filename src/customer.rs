//! Customer identifiers and per-customer point summaries.

use crate::error::{LoyaltyError, Result};
use crate::transaction::Month;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identity of a customer as supplied by the transaction feed.
///
/// An id is numeric only in canonical form: ASCII digits without leading
/// zeros that fit a `u64`. Everything else, `007` and `true` included, is
/// text kept exactly as written, so distinct inputs stay distinct customers.
/// Numeric ids compare numerically, text ids lexicographically, and numeric
/// ids sort before text ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomerId {
    Numeric(u64),
    Text(String),
}

impl CustomerId {
    fn is_canonical_number(s: &str) -> bool {
        !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'))
    }
}

impl FromStr for CustomerId {
    type Err = LoyaltyError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(LoyaltyError::InvalidField {
                field: "customer_id",
                value: s.to_string(),
                reason: "customer id must not be empty",
            });
        }
        if Self::is_canonical_number(s) {
            if let Ok(n) = s.parse::<u64>() {
                return Ok(CustomerId::Numeric(n));
            }
        }
        Ok(CustomerId::Text(s.to_string()))
    }
}

impl From<u64> for CustomerId {
    fn from(id: u64) -> Self {
        CustomerId::Numeric(id)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        CustomerId::Text(id.to_string())
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerId::Numeric(n) => write!(f, "{}", n),
            CustomerId::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for CustomerId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CustomerId::Numeric(n) => serializer.serialize_u64(*n),
            CustomerId::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Points earned by one customer, bucketed by month.
///
/// # Invariants
///
/// - `total_points() == month_points(First) + month_points(Second) + month_points(Third)`
///
/// The total is derived from the buckets on every call, so it cannot drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSummary<K = CustomerId> {
    customer_id: K,
    month_points: [u64; Month::COUNT],
}

impl<K> CustomerSummary<K> {
    /// Creates a summary with every bucket at zero.
    pub fn new(customer_id: K) -> Self {
        CustomerSummary {
            customer_id,
            month_points: [0; Month::COUNT],
        }
    }

    pub fn customer_id(&self) -> &K {
        &self.customer_id
    }

    /// Points accumulated in a single month.
    pub fn month_points(&self, month: Month) -> u64 {
        self.month_points[month.index()]
    }

    /// Points for months one through three, in order.
    pub fn monthly_points(&self) -> [u64; Month::COUNT] {
        self.month_points
    }

    /// Sum of the three monthly buckets.
    pub fn total_points(&self) -> u64 {
        self.month_points
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(*p))
    }

    /// Adds points to a month bucket.
    pub(crate) fn add_points(&mut self, month: Month, points: u64) {
        let bucket = &mut self.month_points[month.index()];
        *bucket = bucket.saturating_add(points);
    }
}

impl<K: Serialize> Serialize for CustomerSummary<K> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CustomerSummary", 5)?;
        state.serialize_field("customer_id", &self.customer_id)?;
        state.serialize_field("month_1", &self.month_points[0])?;
        state.serialize_field("month_2", &self.month_points[1])?;
        state.serialize_field("month_3", &self.month_points[2])?;
        state.serialize_field("total", &self.total_points())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_zeroed() {
        let summary = CustomerSummary::new(CustomerId::Numeric(7));
        assert_eq!(summary.customer_id(), &CustomerId::Numeric(7));
        assert_eq!(summary.monthly_points(), [0, 0, 0]);
        assert_eq!(summary.total_points(), 0);
    }

    #[test]
    fn test_total_tracks_buckets() {
        let mut summary = CustomerSummary::new(1u32);
        summary.add_points(Month::First, 90);
        summary.add_points(Month::Second, 25);
        summary.add_points(Month::First, 10);

        assert_eq!(summary.month_points(Month::First), 100);
        assert_eq!(summary.month_points(Month::Second), 25);
        assert_eq!(summary.month_points(Month::Third), 0);
        assert_eq!(summary.total_points(), 125);
    }

    #[test]
    fn test_separate_summaries_do_not_share_state() {
        let mut a = CustomerSummary::new(1u32);
        let b = CustomerSummary::new(2u32);
        a.add_points(Month::Third, 5);

        assert_eq!(a.total_points(), 5);
        assert_eq!(b.total_points(), 0);
    }

    #[test]
    fn test_customer_id_parsing() {
        assert_eq!(CustomerId::from_str("42").unwrap(), CustomerId::Numeric(42));
        assert_eq!(CustomerId::from_str("0").unwrap(), CustomerId::Numeric(0));
        assert_eq!(
            CustomerId::from_str("C-100").unwrap(),
            CustomerId::Text("C-100".to_string())
        );
        assert!(CustomerId::from_str("").is_err());
        assert!(CustomerId::from_str("   ").is_err());
    }

    #[test]
    fn test_non_canonical_ids_stay_verbatim() {
        assert_eq!(CustomerId::from_str("007").unwrap(), CustomerId::from("007"));
        assert_eq!(CustomerId::from_str("00").unwrap(), CustomerId::from("00"));
        assert_eq!(CustomerId::from_str("true").unwrap(), CustomerId::from("true"));
        assert_eq!(CustomerId::from_str(" 7").unwrap(), CustomerId::from(" 7"));
        assert_eq!(CustomerId::from_str("1.0").unwrap(), CustomerId::from("1.0"));
        assert_eq!(
            CustomerId::from_str("99999999999999999999").unwrap(),
            CustomerId::from("99999999999999999999")
        );
        assert_ne!(
            CustomerId::from_str("007").unwrap(),
            CustomerId::from_str("7").unwrap()
        );
    }

    #[test]
    fn test_customer_id_ordering() {
        let mut ids = vec![
            CustomerId::from("bob"),
            CustomerId::Numeric(10),
            CustomerId::from("alice"),
            CustomerId::Numeric(2),
        ];
        ids.sort();

        assert_eq!(
            ids,
            vec![
                CustomerId::Numeric(2),
                CustomerId::Numeric(10),
                CustomerId::from("alice"),
                CustomerId::from("bob"),
            ]
        );
    }

    #[test]
    fn test_customer_id_serializes_as_given() {
        assert_eq!(serde_json::to_string(&CustomerId::Numeric(9)).unwrap(), "9");
        assert_eq!(serde_json::to_string(&CustomerId::from("007")).unwrap(), r#""007""#);
        assert_eq!(CustomerId::from("007").to_string(), "007");
    }

    #[test]
    fn test_summary_serializes_total() {
        let mut summary = CustomerSummary::new(CustomerId::Numeric(1));
        summary.add_points(Month::First, 90);
        summary.add_points(Month::Second, 25);

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"customer_id":1,"month_1":90,"month_2":25,"month_3":0,"total":115}"#
        );
    }
}
