//! CSV format handling for rate records
//!
//! This module centralizes all source-format concerns:
//! - The expected header schema and its validation
//! - CsvRateRecord structure for deserialization
//! - Thousands-separator normalization of amount bounds
//! - Conversion from CSV records to domain types
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{RateError, RateRecord, RecordId, TermDays};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Header names a rate source must carry, in canonical order
pub const EXPECTED_HEADERS: [&str; 8] = [
    "consecutivo",
    "fecha",
    "minmonto",
    "maxmonto",
    "minplazo",
    "maxplazo",
    "tasa",
    "banco",
];

/// Default field separator of rate sources
pub const DEFAULT_SEPARATOR: u8 = b';';

/// CSV record structure for deserialization
///
/// Fields are matched by header name, so column order in the source is
/// irrelevant. Amount bounds stay textual until normalized.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRateRecord {
    #[serde(rename = "consecutivo")]
    pub id: RecordId,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "minmonto")]
    pub min_amount: String,
    #[serde(rename = "maxmonto")]
    pub max_amount: String,
    #[serde(rename = "minplazo")]
    pub min_term_days: TermDays,
    #[serde(rename = "maxplazo")]
    pub max_term_days: TermDays,
    #[serde(rename = "tasa")]
    pub rate: f64,
    #[serde(rename = "banco")]
    pub bank: String,
}

/// Check that the header set equals [`EXPECTED_HEADERS`]
///
/// Order is irrelevant; a missing, extra or misspelled column is a
/// `SchemaError`.
pub fn validate_headers<'a, I>(headers: I) -> Result<(), RateError>
where
    I: IntoIterator<Item = &'a str>,
{
    let found: Vec<&str> = headers.into_iter().collect();
    let found_set: BTreeSet<&str> = found.iter().copied().collect();
    let expected_set: BTreeSet<&str> = EXPECTED_HEADERS.iter().copied().collect();

    if found_set != expected_set || found.len() != EXPECTED_HEADERS.len() {
        return Err(RateError::schema_error(EXPECTED_HEADERS, found));
    }

    Ok(())
}

/// Parse an amount bound written with `.` as thousands separator
///
/// Every `.` is removed before parsing, so `"1.000"` is one thousand.
/// A source that used `.` as a decimal point would be misread by this rule;
/// it is kept as is because existing rate files depend on it.
pub fn normalize_amount(raw: &str) -> Option<f64> {
    let digits: String = raw.trim().chars().filter(|&c| c != '.').collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Convert a CsvRateRecord to a RateRecord
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
/// * `line` - Source line of the record, used in error messages
///
/// # Returns
///
/// * `Ok(RateRecord)` with normalized amount bounds
/// * `Err(RateError::InvalidAmount)` if an amount bound cannot be parsed
pub fn convert_csv_record(csv_record: CsvRateRecord, line: u64) -> Result<RateRecord, RateError> {
    let min_amount = normalize_amount(&csv_record.min_amount)
        .ok_or_else(|| RateError::invalid_amount(&csv_record.min_amount, line))?;
    let max_amount = normalize_amount(&csv_record.max_amount)
        .ok_or_else(|| RateError::invalid_amount(&csv_record.max_amount, line))?;

    Ok(RateRecord {
        id: csv_record.id,
        date: csv_record.date,
        min_amount,
        max_amount,
        min_term_days: csv_record.min_term_days,
        max_term_days: csv_record.max_term_days,
        rate: csv_record.rate,
        bank: csv_record.bank,
    })
}
