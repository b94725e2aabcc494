//! # semtype Model
//!
//! Pretrained word-vector backend for the semtype column profiler.
//!
//! Loads word2vec text-format vector files into an in-memory vocabulary
//! index and implements the [`semtype_core::EmbeddingModel`] seam on top:
//! vocabulary membership plus n-similarity (cosine of the mean unit vectors
//! of each token sequence).

pub mod word2vec;

pub use word2vec::{ModelError, Result, WordVectors};
