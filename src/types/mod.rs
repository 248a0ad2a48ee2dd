//! Types module
//!
//! Contains core data structures used throughout the application.
//! - `rate`: Rate records, identifiers and derived result columns
//! - `error`: Error types for dataset loading

pub mod error;
pub mod rate;

pub use error::RateError;
pub use rate::{DerivedColumn, RateRecord, RecordId, TermDays};
