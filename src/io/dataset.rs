//! Rate dataset loading
//!
//! Reads a delimited rate source into an ordered, immutable collection of
//! [`RateRecord`]s. Delegates format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! Loading is all-or-nothing:
//! - File not found and I/O errors are returned before any row is read
//! - A header set that differs from the expected schema is a `SchemaError`
//! - The first malformed row aborts the load with its line number
//!
//! A caller holding a dataset therefore never observes a partially loaded
//! table, and replacing a dataset with a freshly loaded one is a single move.

use crate::io::csv_format::{convert_csv_record, validate_headers, CsvRateRecord};
use crate::types::{RateError, RateRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// In-memory table of rate records, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateDataset {
    records: Vec<RateRecord>,
}

impl RateDataset {
    /// Load and validate a rate source from a file path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the delimited source
    /// * `separator` - Field separator byte (`b';'` for the standard format)
    ///
    /// # Returns
    ///
    /// * `Ok(RateDataset)` with every record in source order
    /// * `Err(RateError)` if the file cannot be read, the headers do not match
    ///   the expected schema, or a row is malformed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mejor_cdt::io::RateDataset;
    /// use std::path::Path;
    ///
    /// let dataset = RateDataset::load(Path::new("data/raw/rates.csv"), b';').unwrap();
    /// println!("Loaded {} rates", dataset.len());
    /// ```
    pub fn load(path: &Path, separator: u8) -> Result<Self, RateError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RateError::file_not_found(&path.display().to_string()),
            _ => RateError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        let dataset = Self::from_reader(file, separator).inspect_err(|e| {
            if let RateError::SchemaError { expected, found } = e {
                warn!(
                    path = %path.display(),
                    expected = %expected.join(","),
                    found = %found.join(","),
                    "rate source has unexpected columns"
                );
            }
        })?;

        debug!(path = %path.display(), rows = dataset.len(), "loaded rate dataset");
        Ok(dataset)
    }

    /// Load and validate a rate source from any reader
    ///
    /// Same rules as [`RateDataset::load`]; useful for in-memory sources.
    pub fn from_reader<R: Read>(source: R, separator: u8) -> Result<Self, RateError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(separator)
            .trim(Trim::All)
            .from_reader(source);

        validate_headers(reader.headers()?.iter())?;

        let mut records = Vec::new();
        for (index, result) in reader.deserialize::<CsvRateRecord>().enumerate() {
            // Header occupies line 1
            let line = index as u64 + 2;
            let csv_record = result?;
            records.push(convert_csv_record(csv_record, line)?);
        }

        Ok(Self { records })
    }

    /// Build a dataset from records that are already normalized
    pub fn from_records(records: Vec<RateRecord>) -> Self {
        Self { records }
    }

    /// All records, in source order
    pub fn records(&self) -> &[RateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const HEADER: &str = "consecutivo;fecha;minmonto;maxmonto;minplazo;maxplazo;tasa;banco\n";

    #[test]
    fn test_load_parses_records_in_source_order() {
        let content = format!(
            "{HEADER}\
            1;2023-01-01;1.000;5.000;30;60;0.05;Bank A\n\
            2;2023-01-02;2.000;10.000;60;90;0.10;Bank B\n"
        );
        let file = create_temp_csv(&content);

        let dataset = RateDataset::load(file.path(), b';').unwrap();

        assert_eq!(dataset.len(), 2);
        let records = dataset.records();
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].min_amount, 1000.0);
        assert_eq!(records[0].max_amount, 5000.0);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].max_amount, 10000.0);
        assert_eq!(records[1].min_term_days, 60);
        assert_eq!(records[1].rate, 0.10);
        assert_eq!(records[1].bank, "Bank B");
    }

    #[test]
    fn test_load_accepts_reordered_columns() {
        let content = "banco;tasa;maxplazo;minplazo;maxmonto;minmonto;fecha;consecutivo\n\
                       Bank A;0.05;60;30;5.000;1.000;2023-01-01;1\n";
        let file = create_temp_csv(content);

        let dataset = RateDataset::load(file.path(), b';').unwrap();

        let record = &dataset.records()[0];
        assert_eq!(record.bank, "Bank A");
        assert_eq!(record.min_amount, 1000.0);
        assert_eq!(record.max_amount, 5000.0);
        assert_eq!(record.min_term_days, 30);
        assert_eq!(record.max_term_days, 60);
    }

    #[test]
    fn test_load_handles_whitespace() {
        let content = format!("{HEADER}  1 ; 2023-01-01 ; 1.000 ; 5.000 ; 30 ; 60 ; 0.05 ; Bank A \n");
        let file = create_temp_csv(&content);

        let dataset = RateDataset::load(file.path(), b';').unwrap();
        assert_eq!(dataset.records()[0].bank, "Bank A");
        assert_eq!(dataset.records()[0].min_term_days, 30);
    }

    #[test]
    fn test_load_with_custom_separator() {
        let content = "consecutivo,fecha,minmonto,maxmonto,minplazo,maxplazo,tasa,banco\n\
                       1,2023-01-01,1.000,5.000,30,60,0.05,Bank A\n";
        let file = create_temp_csv(content);

        let dataset = RateDataset::load(file.path(), b',').unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_load_empty_after_header() {
        let file = create_temp_csv(HEADER);

        let dataset = RateDataset::load(file.path(), b';').unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_load_rejects_missing_column() {
        let content = "consecutivo;fecha;minmonto;maxmonto;minplazo;maxplazo;tasa\n\
                       1;2023-01-01;1.000;5.000;30;60;0.05\n";
        let file = create_temp_csv(content);

        let err = RateDataset::load(file.path(), b';').unwrap_err();
        assert!(err.is_schema_error());
        assert!(err.to_string().contains("banco"));
    }

    #[test]
    fn test_load_with_wrong_separator_is_schema_error() {
        let content = format!("{HEADER}1;2023-01-01;1.000;5.000;30;60;0.05;Bank A\n");
        let file = create_temp_csv(&content);

        let err = RateDataset::load(file.path(), b',').unwrap_err();
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_load_fails_on_missing_file() {
        let err = RateDataset::load(Path::new("nonexistent.csv"), b';').unwrap_err();
        assert_eq!(err, RateError::file_not_found("nonexistent.csv"));
    }

    #[test]
    fn test_load_reports_invalid_amount_line() {
        let content = format!(
            "{HEADER}\
            1;2023-01-01;1.000;5.000;30;60;0.05;Bank A\n\
            2;2023-01-02;dos mil;10.000;60;90;0.10;Bank B\n"
        );
        let file = create_temp_csv(&content);

        let err = RateDataset::load(file.path(), b';').unwrap_err();
        assert_eq!(err, RateError::invalid_amount("dos mil", 3));
    }

    #[test]
    fn test_load_fails_on_mistyped_field() {
        let content = format!("{HEADER}1;2023-01-01;1.000;5.000;treinta;60;0.05;Bank A\n");
        let file = create_temp_csv(&content);

        let err = RateDataset::load(file.path(), b';').unwrap_err();
        assert!(matches!(err, RateError::ParseError { line: Some(2), .. }));
    }

    #[test]
    fn test_from_reader_matches_load() {
        let content = format!("{HEADER}1;2023-01-01;1.000;5.000;30;60;0.05;Bank A\n");
        let file = create_temp_csv(&content);

        let from_file = RateDataset::load(file.path(), b';').unwrap();
        let from_memory = RateDataset::from_reader(content.as_bytes(), b';').unwrap();
        assert_eq!(from_file, from_memory);
    }
}
