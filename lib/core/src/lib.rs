//! # semtype Core
//!
//! Core library for the semtype column profiler.
//!
//! This crate implements the similarity-scoring pipeline:
//!
//! - [`EmbeddingModel`] - the two-capability seam to a pretrained embedding
//!   model (vocabulary membership, pairwise similarity)
//! - [`normalize_field_names`] / [`normalize_type_labels`] - raw strings to
//!   in-vocabulary token sequences
//! - [`sample_similarity`] / [`sample_topk_indicator`] - per-sample scoring
//!   against a [`TypeCatalog`]
//! - [`aggregate`] / [`profile_columns`] - bounded per-column averaging
//!
//! ## Example
//!
//! ```rust
//! use semtype_core::{
//!     aggregate, normalize_field_names, sample_similarity,
//!     EmbeddingModel, Error, Result, TypeCatalog,
//! };
//!
//! struct TinyModel;
//!
//! impl EmbeddingModel for TinyModel {
//!     fn contains(&self, word: &str) -> bool {
//!         matches!(word, "name" | "city" | "Person" | "Place")
//!     }
//!
//!     fn similarity(&self, a: &[String], b: &[String]) -> Result<f32> {
//!         if a.is_empty() || b.is_empty() {
//!             return Err(Error::EmptySequence);
//!         }
//!         Ok(if b[0] == "Person" { 0.8 } else { -0.2 })
//!     }
//! }
//!
//! let model = TinyModel;
//! let labels = vec!["Person".to_string(), "Place".to_string()];
//! let (catalog, dropped) = TypeCatalog::from_labels(&labels, &model);
//! assert!(dropped.is_empty());
//!
//! // "first_name" drops: "first" is not in the vocabulary.
//! let values = vec!["name".to_string(), "first_name".to_string()];
//! let normalized = normalize_field_names(&values, &model);
//! assert_eq!(normalized.dropped.len(), 1);
//!
//! let result = aggregate(&normalized.kept, &catalog, &model, sample_similarity).unwrap();
//! assert_eq!(result.types, vec!["Person".to_string(), "Place".to_string()]);
//! assert!(result.scores[0] > result.scores[1]);
//! ```

pub mod aggregate;
pub mod embedding;
pub mod error;
pub mod normalize;
pub mod profile;

pub use aggregate::{
    aggregate, sample_similarity, sample_topk_indicator, Aggregated, DEFAULT_TOP_K, MAX_SAMPLES,
};
pub use embedding::EmbeddingModel;
pub use error::{Error, Result};
pub use normalize::{
    normalize_field_names, normalize_type_labels, Normalized, TokenSeq, TypeCatalog,
};
pub use profile::{profile_columns, ColumnSimilarity};
