//! Per-customer aggregation of transactions into point summaries.

use crate::customer::CustomerSummary;
use crate::points::calculate_points;
use crate::transaction::{Month, Transaction};
use log::debug;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Folds transactions into one summary per distinct customer.
///
/// Each transaction's points go into the bucket for its month; months outside
/// 1..=3 add nothing, but the customer is still listed. The result is sorted
/// ascending by customer id and contains no duplicate ids.
///
/// Accumulation is commutative, so any permutation of the same input yields
/// the same output.
pub fn aggregate<K, I>(transactions: I) -> Vec<CustomerSummary<K>>
where
    K: Eq + Hash + Ord + Clone + Debug,
    I: IntoIterator<Item = Transaction<K>>,
{
    let mut customers: HashMap<K, CustomerSummary<K>> = HashMap::new();

    for tx in transactions {
        let summary = customers
            .entry(tx.customer_id.clone())
            .or_insert_with(|| CustomerSummary::new(tx.customer_id.clone()));

        let points = calculate_points(tx.amount);

        match Month::from_number(tx.month) {
            Some(month) => summary.add_points(month, points),
            None => debug!(
                "Ignoring {} points for customer {:?} in unrecognized month {}",
                points, tx.customer_id, tx.month
            ),
        }
    }

    let mut summaries: Vec<_> = customers.into_values().collect();
    summaries.sort_by(|a, b| a.customer_id().cmp(b.customer_id()));
    summaries
}
