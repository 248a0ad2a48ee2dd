//! Record filters shared by all queries
//!
//! Both filters are pure and boundary-inclusive, so they compose:
//! `filter_by_amount(&filter_by_term(records, days), amount)`.

use crate::types::{RateRecord, TermDays};

/// Records whose term range contains `days`
pub fn filter_by_term(records: &[RateRecord], days: TermDays) -> Vec<RateRecord> {
    records
        .iter()
        .filter(|r| r.min_term_days <= days && days <= r.max_term_days)
        .cloned()
        .collect()
}

/// Records whose amount range contains `amount`
pub fn filter_by_amount(records: &[RateRecord], amount: f64) -> Vec<RateRecord> {
    records
        .iter()
        .filter(|r| r.min_amount <= amount && amount <= r.max_amount)
        .cloned()
        .collect()
}
