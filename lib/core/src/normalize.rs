//! Text normalization into in-vocabulary token sequences
//!
//! Raw strings from three sources flow through here: column headers, column
//! values, and type labels. Headers and values split on delimiters; type
//! labels split at capitalization boundaries. In both cases an item survives
//! only if every resulting token is in the embedding vocabulary; an item
//! with any out-of-vocabulary token is dropped whole, never partially kept.

use crate::embedding::EmbeddingModel;

/// An ordered sequence of word tokens derived from one string field.
pub type TokenSeq = Vec<String>;

/// Outcome of a normalization pass.
///
/// `kept` preserves the relative order of the inputs that passed the
/// vocabulary filter; `dropped` holds the raw strings that did not, so
/// callers can report drop counts without relying on log output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub kept: Vec<TokenSeq>,
    pub dropped: Vec<String>,
}

impl Normalized {
    /// Total number of inputs this pass saw.
    pub fn total(&self) -> usize {
        self.kept.len() + self.dropped.len()
    }
}

/// Normalize header names or cell values.
///
/// Replaces `_` and `-` with spaces, lower-cases, and splits on single
/// spaces. A sequence is kept only if it is non-empty and every token is in
/// the model vocabulary. Doubled delimiters produce empty tokens, which
/// always fail the vocabulary test, so the whole item drops.
pub fn normalize_field_names<M: EmbeddingModel>(names: &[String], model: &M) -> Normalized {
    let mut out = Normalized::default();
    for raw in names {
        let tokens = delimiter_tokens(raw);
        if in_vocabulary(&tokens, model) {
            out.kept.push(tokens);
        } else {
            out.dropped.push(raw.clone());
        }
    }
    out
}

/// Normalize type labels by capitalization segmentation.
///
/// Each token starts at an upper-case letter and runs until the next
/// upper-case letter or end of string, so `"FooBarBaz"` becomes
/// `["Foo", "Bar", "Baz"]`. Characters before the first upper-case letter
/// belong to no token, and tokens keep their original case. The same
/// vocabulary filter as [`normalize_field_names`] applies.
pub fn normalize_type_labels<M: EmbeddingModel>(labels: &[String], model: &M) -> Normalized {
    let mut out = Normalized::default();
    for raw in labels {
        let tokens = capital_tokens(raw);
        if in_vocabulary(&tokens, model) {
            out.kept.push(tokens);
        } else {
            out.dropped.push(raw.clone());
        }
    }
    out
}

fn delimiter_tokens(raw: &str) -> TokenSeq {
    raw.replace(['_', '-'], " ")
        .to_lowercase()
        .split(' ')
        .map(str::to_string)
        .collect()
}

fn capital_tokens(raw: &str) -> TokenSeq {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in raw.chars() {
        if ch.is_uppercase() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            current.push(ch);
        } else if !current.is_empty() {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn in_vocabulary<M: EmbeddingModel>(tokens: &[String], model: &M) -> bool {
    !tokens.is_empty() && tokens.iter().all(|t| !t.is_empty() && model.contains(t))
}

/// The ordered set of candidate type labels a column is scored against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeCatalog {
    types: Vec<TokenSeq>,
}

impl TypeCatalog {
    pub fn new(types: Vec<TokenSeq>) -> Self {
        Self { types }
    }

    /// Build a catalog from raw type labels, returning the labels that were
    /// dropped for containing out-of-vocabulary tokens.
    pub fn from_labels<M: EmbeddingModel>(labels: &[String], model: &M) -> (Self, Vec<String>) {
        let normalized = normalize_type_labels(labels, model);
        (Self::new(normalized.kept), normalized.dropped)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn types(&self) -> &[TokenSeq] {
        &self.types
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenSeq> {
        self.types.iter()
    }

    /// Space-joined display strings, one per type, order-aligned with the
    /// similarity vectors computed against this catalog.
    pub fn joined(&self) -> Vec<String> {
        self.types.iter().map(|typ| typ.join(" ")).collect()
    }
}
