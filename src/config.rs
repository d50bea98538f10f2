//! Command-line configuration.

use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Encoding of the transaction feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// `customer_id,month,purchase_amount` rows with a header
    Csv,
    /// `{"transactions": [...]}` or a bare array of transaction objects
    Json,
}

impl InputFormat {
    /// Picks the format from the file extension; anything but `.json` is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

/// Encoding of the report written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One row per customer with a header
    #[default]
    Csv,
    /// Customers plus grand total and rejected count
    Json,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "loyalty-points")]
#[command(about = "Per-customer monthly loyalty points from a purchase transaction feed")]
#[command(version)]
pub struct Config {
    /// Transaction feed (CSV or JSON)
    pub input: PathBuf,

    /// Report format written to stdout
    #[arg(long = "format", short = 'f', value_enum, default_value_t = OutputFormat::Csv)]
    pub output_format: OutputFormat,

    /// Feed format (default: from the file extension)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

impl Config {
    /// Feed format to read, falling back to the input's extension.
    pub fn input_format(&self) -> InputFormat {
        self.input_format
            .unwrap_or_else(|| InputFormat::from_path(&self.input))
    }
}
