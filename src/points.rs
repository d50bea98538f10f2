//! Tiered loyalty points formula.
//!
//! - every whole unit above 50, up to and including 100, earns 1 point
//! - every whole unit above 100 earns 2 points
//! - fractional units never earn points

use crate::amount::Amount;

/// Amounts at or below this earn nothing.
pub const SINGLE_TIER_FLOOR: u64 = 50;

/// Amounts above this earn double points for the excess.
pub const DOUBLE_TIER_FLOOR: u64 = 100;

/// Points per whole unit above [`DOUBLE_TIER_FLOOR`].
pub const DOUBLE_TIER_MULTIPLIER: u64 = 2;

/// Points earned by the full single tier (51 through 100).
const FULL_SINGLE_TIER: u64 = DOUBLE_TIER_FLOOR - SINGLE_TIER_FLOOR;

/// Computes the points earned by a single purchase.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use loyalty_points::{calculate_points, Amount};
///
/// assert_eq!(calculate_points(Amount::from_str("120").unwrap()), 90);
/// assert_eq!(calculate_points(Amount::from_str("50.99").unwrap()), 0);
/// ```
pub fn calculate_points(amount: Amount) -> u64 {
    let whole = amount.whole_units();

    if whole > DOUBLE_TIER_FLOOR {
        FULL_SINGLE_TIER + DOUBLE_TIER_MULTIPLIER * (whole - DOUBLE_TIER_FLOOR)
    } else if whole > SINGLE_TIER_FLOOR {
        whole - SINGLE_TIER_FLOOR
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn points(s: &str) -> u64 {
        calculate_points(Amount::from_str(s).unwrap())
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(points("0"), 0);
        assert_eq!(points("50"), 0);
        assert_eq!(points("51"), 1);
        assert_eq!(points("100"), 50);
        assert_eq!(points("101"), 52);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(points("45.99"), 0);
        assert_eq!(points("75"), 25);
        assert_eq!(points("120"), 90);
        assert_eq!(points("200"), 250);
    }

    #[test]
    fn test_fraction_never_changes_result() {
        for whole in [0u64, 49, 50, 51, 99, 100, 101, 150, 1000] {
            let floor = points(&whole.to_string());
            for cents in ["01", "49", "50", "99"] {
                assert_eq!(points(&format!("{}.{}", whole, cents)), floor);
            }
        }
    }

    #[test]
    fn test_formula_per_tier() {
        for whole in 0u64..=300 {
            let expected = if whole <= 50 {
                0
            } else if whole <= 100 {
                whole - 50
            } else {
                50 + 2 * (whole - 100)
            };
            assert_eq!(points(&whole.to_string()), expected, "amount {}", whole);
        }
    }

    #[test]
    fn test_maximum_amount_does_not_overflow() {
        let max = Amount::from_str(&Amount::MAX_WHOLE_UNITS.to_string()).unwrap();
        assert_eq!(
            calculate_points(max),
            50 + 2 * (Amount::MAX_WHOLE_UNITS - 100)
        );
    }
}
