//! Core trait for the rate calculator
//!
//! Callers (the CLI, tests, benchmarks) talk to the calculator through this
//! trait so alternative calculators can be swapped in behind it.

use crate::io::RateDataset;
use crate::types::{RateError, TermDays};
use std::path::Path;

/// Trait for answering CD rate questions against a rate dataset
///
/// Query results are pre-formatted strings ready for display. An empty match
/// is not an error: `calculate_overdue_rates` and `calculate_roi` return a
/// sentinel message, `search_rate` returns a header-only table.
pub trait Calculator {
    /// Load and validate a rate source
    fn load_data(&self, path: &Path) -> Result<RateDataset, RateError>;

    /// Overdue factor for a nominal annual anticipated rate
    fn calculate_late_payment_interest(&self, annual_anticipated_rate: f64) -> f64;

    /// Overdue rates of every offer whose term range contains `days`
    fn calculate_overdue_rates(&self, days: TermDays) -> String;

    /// Return on investment of `amount` over `days` for every matching offer
    ///
    /// When `alternate_source` is given, the dataset is replaced by that
    /// source before querying.
    fn calculate_roi(
        &mut self,
        amount: f64,
        days: TermDays,
        alternate_source: Option<&Path>,
    ) -> Result<String, RateError>;

    /// Effective annual rate of `amount` over `days` for every matching offer
    ///
    /// When `alternate_source` is given, the dataset is replaced by that
    /// source before querying.
    fn search_rate(
        &mut self,
        amount: f64,
        days: TermDays,
        alternate_source: Option<&Path>,
    ) -> Result<String, RateError>;
}
