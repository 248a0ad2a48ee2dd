//! Rate-related types for the CD rate calculator
//!
//! This module defines the in-memory representation of a bank rate offer and
//! the derived column attached to query results.

/// Sequence number of a rate record
pub type RecordId = u64;

/// Investment term, in days
pub type TermDays = u32;

/// One bank rate offer
///
/// Amount bounds are already normalized (thousands separators removed).
/// Well-formed sources satisfy `min_amount <= max_amount` and
/// `min_term_days <= max_term_days`; neither is checked at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct RateRecord {
    /// Unique sequence number (informational)
    pub id: RecordId,

    /// Record date as written in the source (informational)
    pub date: String,

    /// Smallest investable amount the rate applies to
    pub min_amount: f64,

    /// Largest investable amount the rate applies to
    pub max_amount: f64,

    /// Shortest term the rate applies to
    pub min_term_days: TermDays,

    /// Longest term the rate applies to
    pub max_term_days: TermDays,

    /// Nominal annual rate as a fraction (0.10 = 10%)
    pub rate: f64,

    /// Issuing institution
    pub bank: String,
}

/// A computed column appended to a query result
///
/// `values` holds one entry per record, in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColumn {
    /// User-facing column label
    pub label: &'static str,

    /// One value per record
    pub values: Vec<f64>,
}

impl DerivedColumn {
    /// Build a column by applying `f` to every record
    pub fn compute<F>(label: &'static str, records: &[RateRecord], f: F) -> Self
    where
        F: Fn(&RateRecord) -> f64,
    {
        DerivedColumn {
            label,
            values: records.iter().map(f).collect(),
        }
    }
}
