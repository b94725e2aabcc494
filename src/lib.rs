//! # semtype
//!
//! Semantic column-type profiling for tabular datasets.
//!
//! Given a CSV dataset and an ontology of candidate type labels, semtype
//! scores how well each column's content matches each type using pretrained
//! word embeddings, and reports a ranked similarity vector per column. It is
//! a data-profiling aid for automatic schema and type inference: it ranks,
//! it does not pick a winner.
//!
//! ## Quick Start
//!
//! ### As a Command
//!
//! ```bash
//! cargo install semtype
//! semtype --dataset people.csv --embeddings en.vec --types ontology.txt
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use semtype::prelude::*;
//!
//! // Load pretrained vectors (word2vec text format).
//! let model = WordVectors::load("en.vec").unwrap();
//!
//! // Build the catalog of candidate types; labels with out-of-vocabulary
//! // tokens are dropped and returned for reporting.
//! let labels = vec!["PersonName".to_string(), "City".to_string()];
//! let (catalog, _dropped) = TypeCatalog::from_labels(&labels, &model);
//!
//! // Load the dataset and keep only complete text columns.
//! let mut table = ColumnTable::from_path("people.csv").unwrap();
//! table.retain_text_columns();
//! table.drop_missing_columns();
//!
//! // Score every column against the catalog.
//! let results =
//!     profile_columns(table.columns(), &catalog, &model, sample_similarity).unwrap();
//! for result in &results {
//!     println!("{}: {:?}", result.column, result.top_types(3));
//! }
//! ```
//!
//! ## Crate Structure
//!
//! semtype is composed of several crates:
//!
//! - [`semtype-core`](https://docs.rs/semtype-core) - text normalization,
//!   embedding-model seam, similarity aggregation, column profiling
//! - [`semtype-model`](https://docs.rs/semtype-model) - word2vec text-format
//!   loader and n-similarity primitive
//! - [`semtype-dataset`](https://docs.rs/semtype-dataset) - column-oriented
//!   CSV loading with text-column selection

// Re-export core types
pub use semtype_core::{
    aggregate, normalize_field_names, normalize_type_labels, profile_columns, sample_similarity,
    sample_topk_indicator, Aggregated, ColumnSimilarity, EmbeddingModel, Error, Normalized,
    Result, TokenSeq, TypeCatalog, DEFAULT_TOP_K, MAX_SAMPLES,
};

// Re-export the model backend
pub use semtype_model::{ModelError, WordVectors};

// Re-export dataset loading
pub use semtype_dataset::{ColumnTable, DatasetError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        aggregate, normalize_field_names, normalize_type_labels, profile_columns,
        sample_similarity, sample_topk_indicator, Aggregated, ColumnSimilarity, ColumnTable,
        DatasetError, EmbeddingModel, Error, ModelError, Normalized, Result, TokenSeq,
        TypeCatalog, WordVectors, DEFAULT_TOP_K, MAX_SAMPLES,
    };
}
