//! Embedding model interface
//!
//! The scoring pipeline needs two capabilities from a pretrained embedding
//! model: a vocabulary membership test and a pairwise similarity query over
//! token sequences. Anything implementing both can back the profiler,
//! including the fixed-vocabulary stand-ins used in tests.

use crate::error::Result;

/// A pretrained word-embedding model.
pub trait EmbeddingModel {
    /// Whether `word` is in the model's trained vocabulary.
    fn contains(&self, word: &str) -> bool;

    /// Semantic similarity between two non-empty token sequences.
    ///
    /// Returns a raw score in [-1.0, 1.0]. Fails with
    /// [`Error::OutOfVocabulary`](crate::Error::OutOfVocabulary) when a token
    /// is absent from the vocabulary and
    /// [`Error::EmptySequence`](crate::Error::EmptySequence) when either
    /// sequence has no tokens.
    fn similarity(&self, a: &[String], b: &[String]) -> Result<f32>;
}
