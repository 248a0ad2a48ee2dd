//! Core business logic module
//!
//! This module contains the rate calculation components:
//! - `traits` - The `Calculator` abstraction used by callers
//! - `rates` - Pure rate math (overdue factor, return on rate, effective rate)
//! - `filters` - Term and amount filters shared by every query
//! - `calculator` - The `ProfitabilityCalculator` query implementation

pub mod calculator;
pub mod filters;
pub mod rates;
pub mod traits;

pub use calculator::{ProfitabilityCalculator, DEFAULT_DATA_PATH};
pub use filters::{filter_by_amount, filter_by_term};
pub use traits::Calculator;
