//! Column-oriented view of a CSV file
//!
//! Cells stay strings; an empty cell is a missing value. The original
//! header row is captured at load and kept even for columns later dropped,
//! because header names are themselves profiling input.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset has no header row")]
    Empty,
}

/// A tabular dataset held column-wise as strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnTable {
    header_row: Vec<String>,
    names: Vec<String>,
    columns: Vec<Vec<String>>,
}

impl ColumnTable {
    /// Load a table from a CSV file with a header row.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading dataset from {}", path.display());
        Self::from_reader(File::open(path)?)
    }

    /// Load a table from any CSV reader. Short rows pad with empty cells;
    /// cells beyond the header width are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let header_row: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();
        if header_row.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut columns = vec![Vec::new(); header_row.len()];
        for record in csv_reader.records() {
            let record = record?;
            for (idx, column) in columns.iter_mut().enumerate() {
                column.push(record.get(idx).unwrap_or("").to_string());
            }
        }

        Ok(Self {
            names: header_row.clone(),
            header_row,
            columns,
        })
    }

    /// The full original header row, unaffected by column drops.
    pub fn header_row(&self) -> &[String] {
        &self.header_row
    }

    /// Names of the currently retained columns.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Values of a retained column, by name.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Iterate over retained columns as `(name, values)` pairs.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// Drop columns whose every non-missing value parses as a number and
    /// return their names. This also catches numeric strings like `"1"`
    /// that a type-based check would treat as text.
    pub fn retain_text_columns(&mut self) -> Vec<String> {
        let dropped = self.drop_where(|values| {
            let non_missing: Vec<&String> = values.iter().filter(|v| !v.is_empty()).collect();
            !non_missing.is_empty()
                && non_missing.iter().all(|v| v.trim().parse::<f64>().is_ok())
        });
        if !dropped.is_empty() {
            debug!("Dropped non-text columns: {:?}", dropped);
        }
        dropped
    }

    /// Drop columns containing any missing (empty) value and return their
    /// names.
    pub fn drop_missing_columns(&mut self) -> Vec<String> {
        let dropped = self.drop_where(|values| values.iter().any(|v| v.is_empty()));
        if !dropped.is_empty() {
            debug!("Dropped columns with missing values: {:?}", dropped);
        }
        dropped
    }

    fn drop_where<F>(&mut self, mut predicate: F) -> Vec<String>
    where
        F: FnMut(&[String]) -> bool,
    {
        let mut dropped = Vec::new();
        let mut kept_names = Vec::new();
        let mut kept_columns = Vec::new();

        for (name, column) in self.names.drain(..).zip(self.columns.drain(..)) {
            if predicate(&column) {
                dropped.push(name);
            } else {
                kept_names.push(name);
                kept_columns.push(column);
            }
        }

        self.names = kept_names;
        self.columns = kept_columns;
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV_DATA: &str = "\
name,age,city,note
alice,34,london,likes tea
bob,29,paris,
carol,41,berlin,plays chess
";

    fn table() -> ColumnTable {
        ColumnTable::from_reader(CSV_DATA.as_bytes()).unwrap()
    }

    #[test]
    fn test_from_reader_shapes() {
        let table = table();
        assert_eq!(table.column_count(), 4);
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column_names(),
            &["name", "age", "city", "note"]
        );
    }

    #[test]
    fn test_column_access() {
        let table = table();
        let cities = table.column("city").unwrap();
        assert_eq!(cities, &["london", "paris", "berlin"]);
        assert!(table.column("unknown").is_none());
    }

    #[test]
    fn test_short_rows_pad_with_missing() {
        let table = ColumnTable::from_reader("a,b\nx\n".as_bytes()).unwrap();
        assert_eq!(table.column("b").unwrap(), &[""]);
    }

    #[test]
    fn test_retain_text_columns_drops_numeric() {
        let mut table = table();
        let dropped = table.retain_text_columns();

        assert_eq!(dropped, vec!["age".to_string()]);
        assert_eq!(table.column_names(), &["name", "city", "note"]);
    }

    #[test]
    fn test_numeric_detection_handles_floats_and_blanks() {
        let mut table =
            ColumnTable::from_reader("price,label\n1.5,x\n,y\n-2,z\n".as_bytes()).unwrap();
        let dropped = table.retain_text_columns();
        assert_eq!(dropped, vec!["price".to_string()]);
    }

    #[test]
    fn test_all_missing_column_is_not_numeric() {
        let mut table = ColumnTable::from_reader("a,b\n,x\n,y\n".as_bytes()).unwrap();
        let dropped = table.retain_text_columns();
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_drop_missing_columns() {
        let mut table = table();
        let dropped = table.drop_missing_columns();

        assert_eq!(dropped, vec!["note".to_string()]);
        assert_eq!(table.column_names(), &["name", "age", "city"]);
    }

    #[test]
    fn test_header_row_survives_drops() {
        let mut table = table();
        table.retain_text_columns();
        table.drop_missing_columns();

        assert_eq!(table.header_row(), &["name", "age", "city", "note"]);
        assert_eq!(table.column_names(), &["name", "city"]);
    }

    #[test]
    fn test_columns_iterator() {
        let table = table();
        let names: Vec<&str> = table.columns().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["name", "age", "city", "note"]);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV_DATA.as_bytes()).unwrap();

        let table = ColumnTable::from_path(file.path()).unwrap();
        assert_eq!(table.row_count(), 3);
    }
}
