//! Per-column similarity profiling
//!
//! Ties the normalizer and the aggregator together over a set of named
//! columns. The column source is any iterator of `(name, values)` pairs, so
//! this module stays independent of how the table was loaded.

use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::embedding::EmbeddingModel;
use crate::error::Result;
use crate::normalize::{normalize_field_names, TypeCatalog};

/// Aggregated similarity result for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSimilarity {
    /// Column name as it appears in the dataset.
    pub column: String,
    /// Space-joined candidate type labels that survived normalization.
    pub types: Vec<String>,
    /// Averaged similarity per type, order-aligned with `types`.
    pub scores: Vec<f32>,
}

impl ColumnSimilarity {
    /// The `n` highest-scoring types, best first.
    pub fn top_types(&self, n: usize) -> Vec<(&str, f32)> {
        let mut ranked: Vec<(&str, f32)> = self
            .types
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(n);
        ranked
    }
}

/// Profile every column against the type catalog.
///
/// Each column's values are normalized (values with out-of-vocabulary
/// tokens drop silently, with the count logged at debug level) and the
/// survivors aggregated with the supplied scoring function. A scoring
/// error in any column aborts the whole pass.
pub fn profile_columns<'a, I, M, F>(
    columns: I,
    catalog: &TypeCatalog,
    model: &M,
    mut scoring: F,
) -> Result<Vec<ColumnSimilarity>>
where
    I: IntoIterator<Item = (&'a str, &'a [String])>,
    M: EmbeddingModel,
    F: FnMut(&[String], &TypeCatalog, &M) -> Result<Vec<f32>>,
{
    let mut results = Vec::new();
    for (name, values) in columns {
        let normalized = normalize_field_names(values, model);
        if !normalized.dropped.is_empty() {
            debug!(
                "Column '{}': dropped {} of {} values with out-of-vocabulary tokens",
                name,
                normalized.dropped.len(),
                normalized.total()
            );
        }

        let aggregated = aggregate(&normalized.kept, catalog, model, &mut scoring)?;
        results.push(ColumnSimilarity {
            column: name.to_string(),
            types: aggregated.types,
            scores: aggregated.scores,
        });
    }
    Ok(results)
}
