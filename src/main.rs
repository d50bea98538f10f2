//! Loyalty Points CLI
//!
//! Reads a transaction feed and prints each customer's monthly point totals.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > points.csv
//! cargo run -- simulated-data.json --format json
//! cargo run -- feed.txt --input-format json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug`, `info` or `warn` to control logging verbosity

use clap::Parser;
use log::info;
use loyalty_points::{Config, LoyaltyEngine, Result};
use std::io;
use std::process;

fn main() {
    env_logger::init();
    let config = Config::parse();

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let input_format = config.input_format();
    info!(
        "Loading {} as {:?}, writing {:?}",
        config.input.display(),
        input_format,
        config.output_format
    );

    let mut engine = LoyaltyEngine::new();
    engine.load_file(&config.input, input_format)?;

    let report = engine.summarize();

    let stdout = io::stdout();
    let handle = stdout.lock();
    report.write(config.output_format, handle)?;

    Ok(())
}
