//! Final loyalty report and its CSV/JSON renderings.

use crate::config::OutputFormat;
use crate::customer::CustomerSummary;
use crate::error::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

/// Header row of the CSV rendering.
pub const CSV_HEADER: [&str; 5] = ["customer_id", "month_1", "month_2", "month_3", "total"];

/// Immutable snapshot of one aggregation run.
///
/// Customers are sorted ascending by id with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoyaltyReport {
    customers: Vec<CustomerSummary>,
    rejected: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    customers: &'a [CustomerSummary],
    grand_total: u64,
    rejected: usize,
}

impl LoyaltyReport {
    pub fn new(customers: Vec<CustomerSummary>, rejected: usize) -> Self {
        LoyaltyReport { customers, rejected }
    }

    pub fn customers(&self) -> &[CustomerSummary] {
        &self.customers
    }

    /// Number of input records skipped as malformed.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Sum of every customer's total.
    pub fn grand_total(&self) -> u64 {
        self.customers
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.total_points()))
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Writes the report in the requested format.
    pub fn write<W: Write>(&self, format: OutputFormat, writer: W) -> Result<()> {
        match format {
            OutputFormat::Csv => self.write_csv(writer),
            OutputFormat::Json => self.write_json(writer),
        }
    }

    /// Writes one CSV row per customer. An empty report yields the header only.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        csv_writer.write_record(CSV_HEADER)?;
        for customer in &self.customers {
            csv_writer.serialize(customer)?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        let report = JsonReport {
            customers: &self.customers,
            grand_total: self.grand_total(),
            rejected: self.rejected,
        };

        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use crate::customer::CustomerId;
    use crate::transaction::Transaction;
    use std::str::FromStr;

    fn sample_report() -> LoyaltyReport {
        let tx = |id: u64, month: i64, amount: &str| {
            Transaction::new(CustomerId::Numeric(id), month, Amount::from_str(amount).unwrap())
        };
        let customers = crate::aggregate::aggregate(vec![
            tx(2, 1, "10"),
            tx(1, 1, "120"),
            tx(1, 2, "75"),
        ]);
        LoyaltyReport::new(customers, 1)
    }

    #[test]
    fn test_grand_total() {
        let report = sample_report();
        assert_eq!(report.grand_total(), 115);
        assert_eq!(report.rejected(), 1);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_csv_output() {
        let mut output = Vec::new();
        sample_report().write_csv(&mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "customer_id,month_1,month_2,month_3,total\n1,90,25,0,115\n2,0,0,0,0\n"
        );
    }

    #[test]
    fn test_empty_report_csv_is_header_only() {
        let mut output = Vec::new();
        LoyaltyReport::default().write_csv(&mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "customer_id,month_1,month_2,month_3,total\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut output = Vec::new();
        sample_report().write(OutputFormat::Json, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["grand_total"], 115);
        assert_eq!(value["rejected"], 1);
        assert_eq!(value["customers"][0]["customer_id"], 1);
        assert_eq!(value["customers"][0]["total"], 115);
        assert_eq!(value["customers"][1]["month_1"], 0);
    }

    #[test]
    fn test_empty_report_json() {
        let mut output = Vec::new();
        LoyaltyReport::default().write_json(&mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["customers"], serde_json::json!([]));
        assert_eq!(value["grand_total"], 0);
    }
}
