use crate::core::DEFAULT_DATA_PATH;
use crate::types::TermDays;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Compute CD overdue rates, returns and rate offers
#[derive(Parser, Debug)]
#[command(name = "mejor-cdt")]
#[command(about = "Compute CD overdue rates, returns and rate offers", long_about = None)]
pub struct CliArgs {
    /// Path to the rate dataset
    #[arg(
        long = "data",
        value_name = "PATH",
        env = "MEJOR_CDT_DATA",
        default_value = DEFAULT_DATA_PATH,
        global = true,
        help = "Path to the ';'-separated rate dataset"
    )]
    pub data: PathBuf,

    /// Field separator of rate sources
    #[arg(
        long = "separator",
        value_name = "CHAR",
        default_value = ";",
        value_parser = parse_separator,
        global = true,
        help = "Single ASCII character separating fields in rate sources"
    )]
    pub separator: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available queries
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Overdue rates for a term
    Overdue {
        /// Term in days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: TermDays,
    },

    /// Return on investment for an amount and term
    Roi {
        /// Amount to invest
        #[arg(long, value_parser = parse_amount)]
        amount: f64,

        /// Term in days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: TermDays,

        /// Replace the dataset with this source before querying
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,
    },

    /// Rate offers and their effective annual rate for an amount and term
    Search {
        /// Amount to invest
        #[arg(long, value_parser = parse_amount)]
        amount: f64,

        /// Term in days
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: TermDays,

        /// Replace the dataset with this source before querying
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,
    },
}

fn parse_amount(raw: &str) -> Result<f64, String> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(format!("amount must be greater than 0, got '{}'", raw));
    }

    Ok(amount)
}

fn parse_separator(raw: &str) -> Result<u8, String> {
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "separator must be a single ASCII character, got '{}'",
            raw
        )),
    }
}
