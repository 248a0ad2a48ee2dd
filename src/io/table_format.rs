//! Plain-text table output for query results
//!
//! Renders filtered rate records as an aligned table with user-facing column
//! labels. The `id` and `date` fields are never shown.

use crate::types::{DerivedColumn, RateRecord};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Column labels for the displayed record fields, in output order
pub const COLUMN_LABELS: [&str; 6] = [
    "Monto mínimo",
    "Monto máximo",
    "Plazo mínimo",
    "Plazo máximo",
    "Tasa",
    "Banco",
];

const COLUMN_GAP: &str = "  ";

/// Format a currency value as `$1,234.56`
///
/// Two decimals with half-even rounding and `,` thousands grouping.
pub fn format_currency(value: f64) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return format!("${:.2}", value);
    };

    let fixed = format!("{:.2}", decimal.round_dp(2).abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let sign = if decimal.is_sign_negative() && !decimal.round_dp(2).is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}${}.{}", sign, group_thousands(integer), fraction)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn format_fraction(value: f64) -> String {
    format!("{:.6}", value)
}

/// Render records (and an optional derived column) as an aligned table
///
/// Cells are right-aligned to the widest entry of their column, columns are
/// separated by two spaces, and an empty record set yields the header row
/// alone.
///
/// # Arguments
///
/// * `records` - Records to display, in order
/// * `derived` - Extra column appended after the record fields
pub fn format_response(records: &[RateRecord], derived: Option<&DerivedColumn>) -> String {
    let mut header: Vec<String> = COLUMN_LABELS.iter().map(|l| l.to_string()).collect();
    if let Some(column) = derived {
        header.push(column.label.to_string());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut row = vec![
                format_currency(record.min_amount),
                format_currency(record.max_amount),
                record.min_term_days.to_string(),
                record.max_term_days.to_string(),
                format_fraction(record.rate),
                record.bank.clone(),
            ];
            if let Some(column) = derived {
                row.push(column.values.get(i).copied().map(format_fraction).unwrap_or_default());
            }
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            std::iter::once(&header)
                .chain(rows.iter())
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    std::iter::once(&header)
        .chain(rows.iter())
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
