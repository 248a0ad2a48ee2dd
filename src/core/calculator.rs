//! Profitability calculator
//!
//! This module provides the ProfitabilityCalculator that answers the three
//! supported questions by combining the shared filter pipeline with the rate
//! math:
//! - Overdue rates for a term (`Tasa Vencida`)
//! - Return on investment for an amount and term (`ROI`)
//! - Rate search for an amount and term (`Tasa Efectiva Anual`)
//!
//! Every query recomputes from the current dataset; nothing is cached.

use crate::core::filters::{filter_by_amount, filter_by_term};
use crate::core::rates;
use crate::core::traits::Calculator;
use crate::io::{format_response, RateDataset, DEFAULT_SEPARATOR};
use crate::types::{DerivedColumn, RateError, RateRecord, TermDays};
use std::path::Path;
use tracing::{debug, info};

/// Conventional location of the rate source
pub const DEFAULT_DATA_PATH: &str = "data/raw/rates.csv";

/// Returned by `calculate_overdue_rates` when no offer covers the term
pub const NO_OVERDUE_RATES_MESSAGE: &str =
    "No se encontraron tasas vencidas para el periodo ingresado";

/// Returned by `calculate_roi` when no offer covers the term and amount
pub const NO_RATES_FOR_AMOUNT_MESSAGE: &str = "No se encontraron tasas para el monto ingresado";

pub const OVERDUE_RATE_LABEL: &str = "Tasa Vencida";
pub const ROI_LABEL: &str = "ROI";
pub const EFFECTIVE_ANNUAL_RATE_LABEL: &str = "Tasa Efectiva Anual";

/// Calculator over an in-memory rate dataset
///
/// The dataset is only ever replaced whole: an alternate source is loaded
/// and validated completely before it takes the place of the current one.
#[derive(Debug, Clone)]
pub struct ProfitabilityCalculator {
    dataset: RateDataset,
    separator: u8,
}

impl ProfitabilityCalculator {
    /// Create a calculator by loading the source at `path`
    ///
    /// # Errors
    ///
    /// Returns the load error unchanged; a `SchemaError` here is fatal for
    /// the caller.
    pub fn new(path: &Path, separator: u8) -> Result<Self, RateError> {
        let dataset = RateDataset::load(path, separator)?;
        info!(path = %path.display(), rows = dataset.len(), "rate dataset ready");
        Ok(Self { dataset, separator })
    }

    /// Create a calculator over an already loaded dataset
    pub fn with_dataset(dataset: RateDataset) -> Self {
        Self {
            dataset,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Use `separator` for alternate sources loaded later
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// The dataset currently queried
    pub fn dataset(&self) -> &RateDataset {
        &self.dataset
    }

    /// Replace the dataset with the one at `path`
    ///
    /// On error the current dataset is left untouched.
    pub fn reload(&mut self, path: &Path) -> Result<(), RateError> {
        let dataset = self.load_data(path)?;
        info!(
            path = %path.display(),
            previous_rows = self.dataset.len(),
            rows = dataset.len(),
            "replaced rate dataset"
        );
        self.dataset = dataset;
        Ok(())
    }

    fn reload_if_requested(&mut self, alternate_source: Option<&Path>) -> Result<(), RateError> {
        match alternate_source {
            Some(path) if !path.as_os_str().is_empty() => self.reload(path),
            _ => Ok(()),
        }
    }

    /// Term filter followed by amount filter over the current dataset
    fn rates_for(&self, amount: f64, days: TermDays) -> Vec<RateRecord> {
        let in_period = filter_by_term(self.dataset.records(), days);
        let in_amount = filter_by_amount(&in_period, amount);
        debug!(
            days,
            amount,
            total = self.dataset.len(),
            in_period = in_period.len(),
            in_amount = in_amount.len(),
            "filtered rates"
        );
        in_amount
    }
}

impl Calculator for ProfitabilityCalculator {
    fn load_data(&self, path: &Path) -> Result<RateDataset, RateError> {
        RateDataset::load(path, self.separator)
    }

    fn calculate_late_payment_interest(&self, annual_anticipated_rate: f64) -> f64 {
        rates::calculate_late_payment_interest(annual_anticipated_rate)
    }

    fn calculate_overdue_rates(&self, days: TermDays) -> String {
        let in_period = filter_by_term(self.dataset.records(), days);

        if in_period.is_empty() {
            debug!(days, "no overdue rates for period");
            return NO_OVERDUE_RATES_MESSAGE.to_string();
        }

        let overdue = DerivedColumn::compute(OVERDUE_RATE_LABEL, &in_period, |r| {
            self.calculate_late_payment_interest(r.rate)
        });

        format_response(&in_period, Some(&overdue))
    }

    fn calculate_roi(
        &mut self,
        amount: f64,
        days: TermDays,
        alternate_source: Option<&Path>,
    ) -> Result<String, RateError> {
        self.reload_if_requested(alternate_source)?;

        let in_amount = self.rates_for(amount, days);

        if in_amount.is_empty() {
            debug!(days, amount, "no rates for amount");
            return Ok(NO_RATES_FOR_AMOUNT_MESSAGE.to_string());
        }

        let roi = DerivedColumn::compute(ROI_LABEL, &in_amount, |r| {
            rates::calculate_effective_rate(r.rate, amount, days)
        });

        Ok(format_response(&in_amount, Some(&roi)))
    }

    fn search_rate(
        &mut self,
        amount: f64,
        days: TermDays,
        alternate_source: Option<&Path>,
    ) -> Result<String, RateError> {
        self.reload_if_requested(alternate_source)?;

        // No empty-result sentinel here: an empty match renders as a
        // header-only table.
        let in_amount = self.rates_for(amount, days);

        let effective = DerivedColumn::compute(EFFECTIVE_ANNUAL_RATE_LABEL, &in_amount, |r| {
            rates::calculate_effective_rate(r.rate, amount, days)
        });

        Ok(format_response(&in_amount, Some(&effective)))
    }
}
