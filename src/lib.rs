//! # Loyalty Points
//!
//! Turns a feed of purchase transactions into per-customer, per-month
//! loyalty point totals.
//!
//! ## Design Principles
//!
//! - **Tiered formula**: 1 point per whole unit above 50, 2 per whole unit above 100
//! - **Exact amounts**: purchase amounts use `rust_decimal`, fractions are truncated
//! - **Strict invariants**: `total == month_1 + month_2 + month_3` always holds
//! - **Deterministic output**: customers sorted ascending by id
//!
//! ## Example
//!
//! ```no_run
//! use loyalty_points::LoyaltyEngine;
//! use std::io::Cursor;
//!
//! let csv = "customer_id,month,purchase_amount\n1,1,120\n";
//! let mut engine = LoyaltyEngine::new();
//! engine.load_csv(Cursor::new(csv)).unwrap();
//! engine.summarize().write_csv(std::io::stdout()).unwrap();
//! ```

pub mod aggregate;
pub mod amount;
pub mod config;
pub mod customer;
pub mod engine;
pub mod error;
pub mod points;
pub mod report;
pub mod transaction;

pub use aggregate::aggregate;
pub use amount::Amount;
pub use config::{Config, InputFormat, OutputFormat};
pub use customer::{CustomerId, CustomerSummary};
pub use engine::LoyaltyEngine;
pub use error::{LoyaltyError, Result};
pub use points::calculate_points;
pub use report::LoyaltyReport;
pub use transaction::{Month, Transaction, TransactionRecord};
