//! Mejor CDT CLI
//!
//! Command-line interface for querying CD rate offers from a rate dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- overdue --days 90
//! cargo run -- roi --amount 1000000 --days 180
//! cargo run -- search --amount 1000000 --days 180 --source other_rates.csv
//! cargo run -- --data data/raw/rates.csv search --amount 5000000 --days 360
//! ```
//!
//! Results go to stdout; logs go to stderr and are controlled by `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success (including queries with no matching offers)
//! - 1: Dataset error (file not found, unexpected columns, malformed rows)
//! - 2: Invalid arguments

use mejor_cdt::cli::{self, Command};
use mejor_cdt::core::{Calculator, ProfitabilityCalculator};
use mejor_cdt::RateError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = cli::parse_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: cli::CliArgs) -> Result<(), RateError> {
    let mut calculator = ProfitabilityCalculator::new(&args.data, args.separator)?;

    match args.command {
        Command::Overdue { days } => {
            let overdue_rates = calculator.calculate_overdue_rates(days);
            println!("Tasa vencida a {} días:\n\n{}", days, overdue_rates);
        }
        Command::Roi {
            amount,
            days,
            source,
        } => {
            let roi = calculator.calculate_roi(amount, days, source.as_deref())?;
            println!(
                "Tu ROI con una inversión de ${} a {} días es de \n\n{}\n",
                amount, days, roi
            );
        }
        Command::Search {
            amount,
            days,
            source,
        } => {
            let rates = calculator.search_rate(amount, days, source.as_deref())?;
            println!(
                "Las tasas para una inversión de ${} a {} días son:\n\n{}\n",
                amount, days, rates
            );
        }
    }

    Ok(())
}
