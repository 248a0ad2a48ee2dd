//! Rate math
//!
//! Pure functions converting nominal annual rates into the figures shown to
//! the user.

use crate::types::TermDays;

/// Days per year used for the overdue (anticipated) rate conversion
pub const OVERDUE_YEAR_DAYS: f64 = 365.0;

/// Days per year used for simple-interest accrual
pub const ACCRUAL_YEAR_DAYS: f64 = 360.0;

/// Overdue factor for a nominal annual anticipated rate
///
/// `1 / (1 - rate / 365)`.
pub fn calculate_late_payment_interest(annual_anticipated_rate: f64) -> f64 {
    let daily_anticipated_rate = annual_anticipated_rate / OVERDUE_YEAR_DAYS;
    1.0 / (1.0 - daily_anticipated_rate)
}

/// Simple-interest return of `amount` over `days` on a 360-day year
pub fn calculate_return_on_rate(rate: f64, amount: f64, days: TermDays) -> f64 {
    amount * (rate * f64::from(days) / ACCRUAL_YEAR_DAYS)
}

/// Return on rate divided back by the invested amount
///
/// Algebraically `rate * days / 360`; computed through the return so the
/// result matches the displayed return figures exactly.
pub fn calculate_effective_rate(rate: f64, amount: f64, days: TermDays) -> f64 {
    calculate_return_on_rate(rate, amount, days) / amount
}
