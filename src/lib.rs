//! Mejor CDT Library
//! # Overview
//!
//! This library answers certificate-of-deposit (CD) questions against a table
//! of bank rate offers loaded from a `;`-separated file.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (RateRecord, DerivedColumn, RateError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::rates`] - Rate math
//!   - [`core::filters`] - Term and amount filters
//!   - [`core::calculator`] - Query orchestration over the current dataset
//! - [`io`] - Dataset loading and result formatting
//!
//! # Queries
//!
//! - **Overdue rates**: offers covering a term, with `1 / (1 - rate/365)`
//! - **ROI**: offers covering a term and amount, with simple interest on a
//!   360-day year divided back by the amount
//! - **Rate search**: same filter and figure as ROI, labelled as the effective
//!   annual rate; an empty match yields a header-only table instead of a
//!   message
//!
//! # Dataset
//!
//! Each row carries `consecutivo`, `fecha`, `minmonto`, `maxmonto`,
//! `minplazo`, `maxplazo`, `tasa` and `banco`. Amount bounds use `.` as a
//! thousands separator (`1.000` is one thousand).

pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{Calculator, ProfitabilityCalculator};
pub use io::{format_response, RateDataset};
pub use types::{DerivedColumn, RateError, RateRecord, RecordId, TermDays};
