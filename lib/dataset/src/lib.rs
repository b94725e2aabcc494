//! # semtype Dataset
//!
//! Column-oriented tabular loading for the semtype column profiler.
//!
//! A [`ColumnTable`] holds a CSV file as named string columns and supports
//! the two preprocessing drops the profiler needs: numeric-content columns
//! (only free text is worth scoring against type labels) and columns with
//! missing values.

pub mod table;

pub use table::{ColumnTable, DatasetError, Result};
