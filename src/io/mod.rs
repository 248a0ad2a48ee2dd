//! I/O module
//!
//! Handles rate source parsing and result output.
//!
//! # Components
//!
//! - `csv_format` - Source format handling (schema, amount normalization, record conversion)
//! - `dataset` - Loading a validated, ordered rate table
//! - `table_format` - Plain-text table rendering of query results

pub mod csv_format;
pub mod dataset;
pub mod table_format;

pub use csv_format::{
    convert_csv_record, normalize_amount, validate_headers, CsvRateRecord, DEFAULT_SEPARATOR,
    EXPECTED_HEADERS,
};
pub use dataset::RateDataset;
pub use table_format::{format_currency, format_response, COLUMN_LABELS};
