//! Transaction ingestion and report production.
//!
//! The engine reads the whole feed first, then aggregates. Totals depend on
//! every record of a customer, so no partial report is ever observable.
//!
//! # Malformed records
//!
//! A record that cannot be read (bad CSV row, non-integer month, negative or
//! non-numeric amount) is logged at warn level, counted as rejected and
//! skipped. It creates no customer entry and leaves every other customer's
//! totals untouched. I/O failures and unreadable documents abort the run.

use crate::aggregate::aggregate;
use crate::config::InputFormat;
use crate::error::{LoyaltyError, Result};
use crate::report::LoyaltyReport;
use crate::transaction::{Transaction, TransactionRecord};
use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};
use serde::de::Error as _;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The loyalty points engine.
///
/// Collects validated transactions from one or more feeds and turns them
/// into a [`LoyaltyReport`].
#[derive(Debug, Default)]
pub struct LoyaltyEngine {
    transactions: Vec<Transaction>,
    rejected: usize,
}

impl LoyaltyEngine {
    /// Creates a new empty engine.
    pub fn new() -> Self {
        LoyaltyEngine {
            transactions: Vec::new(),
            rejected: 0,
        }
    }

    /// Loads a feed file in the given format.
    pub fn load_file(&mut self, path: &Path, format: InputFormat) -> Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        match format {
            InputFormat::Csv => self.load_csv(reader),
            InputFormat::Json => self.load_json(reader),
        }
    }

    /// Reads `customer_id,month,purchase_amount` rows.
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
            let row = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => self.accept(record, row),
                Err(e) => self.reject(row, e.to_string()),
            }
        }

        Ok(())
    }

    /// Reads a JSON feed, either `{"transactions": [...]}` or a bare array.
    ///
    /// Rows are numbered from 1 in array order. Numbers are read with their
    /// literal text, never through `f64`.
    pub fn load_json<R: Read>(&mut self, reader: R) -> Result<()> {
        let entries = match serde_json::from_reader(reader)? {
            Value::Object(mut feed) => match feed.remove("transactions") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    return Err(serde_json::Error::custom(
                        "expected a \"transactions\" array in the feed object",
                    )
                    .into())
                }
            },
            Value::Array(entries) => entries,
            _ => {
                return Err(serde_json::Error::custom(
                    "expected a transactions array or an object holding one",
                )
                .into())
            }
        };

        for (idx, entry) in entries.iter().enumerate() {
            let row = idx + 1;
            match TransactionRecord::from_json(entry) {
                Ok(record) => self.accept(record, row),
                Err(e) => self.reject(row, e.to_string()),
            }
        }

        Ok(())
    }

    /// Adds an already validated transaction.
    pub fn push(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    /// Number of transactions accepted so far.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Number of records rejected so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Aggregates everything loaded into a report.
    pub fn summarize(self) -> LoyaltyReport {
        let accepted = self.transactions.len();
        let customers = aggregate(self.transactions);

        info!(
            "Aggregated {} transactions into {} customers ({} rejected)",
            accepted,
            customers.len(),
            self.rejected
        );

        LoyaltyReport::new(customers, self.rejected)
    }

    fn accept(&mut self, record: TransactionRecord, row: usize) {
        match record.parse() {
            Ok(tx) => {
                debug!(
                    "Row {}: customer {} month {} amount {}",
                    row, tx.customer_id, tx.month, tx.amount
                );
                self.transactions.push(tx);
            }
            Err(e) => self.reject(row, e.to_string()),
        }
    }

    fn reject(&mut self, row: usize, message: String) {
        self.rejected += 1;
        warn!("{}, skipping", LoyaltyError::InvalidRecord { row, message });
    }
}
