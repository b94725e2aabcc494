//! Word2vec text-format vectors
//!
//! Parses the plain-text vector format (`word v1 v2 .. vd` per line, with an
//! optional leading `count dim` header) into a flat row-major table with an
//! ahash vocabulary index. Rows are unit-normalized at load, so a similarity
//! query is the cosine of the per-sequence mean vectors.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use thiserror::Error;
use tracing::debug;

use semtype_core::{EmbeddingModel, Error as CoreError, Result as CoreResult};

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Model file contains no vectors")]
    Empty,
}

/// An in-memory table of pretrained word vectors.
#[derive(Debug, Clone)]
pub struct WordVectors {
    dim: usize,
    index: AHashMap<String, usize>,
    // Row-major, one unit-normalized row per vocabulary word.
    vectors: Vec<f32>,
}

impl WordVectors {
    /// Load vectors from a word2vec text-format file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading word vectors from {}", path.display());
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }

    /// Parse vectors from any buffered reader.
    ///
    /// The first line may be a `count dim` header; every other line is a
    /// word followed by its components. All rows must share one dimension.
    /// A word listed twice keeps its first vector.
    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut index = AHashMap::new();
        let mut vectors = Vec::new();
        let mut dim = 0usize;

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = line_idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue;
            };
            let components: Vec<&str> = parts.collect();

            if line_no == 1 && is_count_dim_header(word, &components) {
                continue;
            }

            if components.is_empty() {
                return Err(ModelError::Parse {
                    line: line_no,
                    reason: "no vector components".to_string(),
                });
            }

            let mut row = Vec::with_capacity(components.len());
            for component in &components {
                let value: f32 = component.parse().map_err(|_| ModelError::Parse {
                    line: line_no,
                    reason: format!("invalid vector component '{}'", component),
                })?;
                row.push(value);
            }

            if dim == 0 {
                dim = row.len();
            } else if row.len() != dim {
                return Err(ModelError::Parse {
                    line: line_no,
                    reason: format!("expected {} components, got {}", dim, row.len()),
                });
            }

            if index.contains_key(word) {
                continue;
            }

            normalize_in_place(&mut row);
            index.insert(word.to_string(), index.len());
            vectors.extend(row);
        }

        if index.is_empty() {
            return Err(ModelError::Empty);
        }

        debug!("Loaded {} word vectors of dimension {}", index.len(), dim);
        Ok(Self { dim, index, vectors })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The unit-normalized vector for `word`, if it is in vocabulary.
    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        self.index
            .get(word)
            .map(|&row| &self.vectors[row * self.dim..(row + 1) * self.dim])
    }

    /// Mean of the unit vectors of every token in the sequence.
    fn mean_vector(&self, tokens: &[String]) -> CoreResult<Vec<f32>> {
        if tokens.is_empty() {
            return Err(CoreError::EmptySequence);
        }

        let mut mean = vec![0.0f32; self.dim];
        for token in tokens {
            let row = self
                .vector(token)
                .ok_or_else(|| CoreError::OutOfVocabulary(token.clone()))?;
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }

        let count = tokens.len() as f32;
        for m in &mut mean {
            *m /= count;
        }
        Ok(mean)
    }
}

impl EmbeddingModel for WordVectors {
    fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    fn similarity(&self, a: &[String], b: &[String]) -> CoreResult<f32> {
        let mean_a = self.mean_vector(a)?;
        let mean_b = self.mean_vector(b)?;
        Ok(cosine(&mean_a, &mean_b))
    }
}

fn is_count_dim_header(word: &str, components: &[&str]) -> bool {
    components.len() == 1
        && word.parse::<usize>().is_ok()
        && components[0].parse::<usize>().is_ok()
}

fn normalize_in_place(row: &mut [f32]) {
    let norm: f32 = row.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in row {
            *v /= norm;
        }
    }
}

/// Cosine similarity with a zero-norm guard, clamped to [-1.0, 1.0].
fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;

    const PLAIN: &str = "apple 1.0 0.0\nbanana 0.0 1.0\npear 3.0 4.0\n";

    fn vectors(text: &str) -> WordVectors {
        WordVectors::read(Cursor::new(text)).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_plain_file() {
        let wv = vectors(PLAIN);
        assert_eq!(wv.len(), 3);
        assert_eq!(wv.dim(), 2);
        assert!(wv.contains("apple"));
        assert!(!wv.contains("grape"));
    }

    #[test]
    fn test_read_with_count_dim_header() {
        let wv = vectors("3 2\napple 1.0 0.0\nbanana 0.0 1.0\npear 3.0 4.0\n");
        assert_eq!(wv.len(), 3);
        assert_eq!(wv.dim(), 2);
    }

    #[test]
    fn test_vectors_unit_normalized_at_load() {
        let wv = vectors(PLAIN);
        let pear = wv.vector("pear").unwrap();
        let norm: f32 = pear.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        // 3-4-5 triangle
        assert!((pear[0] - 0.6).abs() < 1e-6);
        assert!((pear[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_similarity_identical_sequence() {
        let wv = vectors(PLAIN);
        let sim = wv
            .similarity(&strings(&["apple"]), &strings(&["apple"]))
            .unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_similarity_orthogonal_words() {
        let wv = vectors(PLAIN);
        let sim = wv
            .similarity(&strings(&["apple"]), &strings(&["banana"]))
            .unwrap();
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_similarity_mean_of_sequence() {
        let wv = vectors(PLAIN);
        // The mean of apple and banana sits at 45 degrees from either.
        let sim = wv
            .similarity(&strings(&["apple", "banana"]), &strings(&["apple"]))
            .unwrap();
        assert!((sim - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_similarity_out_of_vocab() {
        let wv = vectors(PLAIN);
        let err = wv
            .similarity(&strings(&["apple"]), &strings(&["grape"]))
            .unwrap_err();
        assert_eq!(err, CoreError::OutOfVocabulary("grape".to_string()));
    }

    #[test]
    fn test_similarity_empty_sequence() {
        let wv = vectors(PLAIN);
        let err = wv.similarity(&[], &strings(&["apple"])).unwrap_err();
        assert_eq!(err, CoreError::EmptySequence);
    }

    #[test]
    fn test_dimension_mismatch_reports_line() {
        let err = WordVectors::read(Cursor::new("apple 1.0 0.0\nbanana 0.5\n")).unwrap_err();
        match err {
            ModelError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_component() {
        let err = WordVectors::read(Cursor::new("apple 1.0 oops\n")).unwrap_err();
        assert!(matches!(err, ModelError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_empty_input() {
        let err = WordVectors::read(Cursor::new("")).unwrap_err();
        assert!(matches!(err, ModelError::Empty));
    }

    #[test]
    fn test_duplicate_word_keeps_first() {
        let wv = vectors("apple 1.0 0.0\napple 0.0 1.0\n");
        assert_eq!(wv.len(), 1);
        let v = wv.vector("apple").unwrap();
        assert!((v[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PLAIN.as_bytes()).unwrap();

        let wv = WordVectors::load(file.path()).unwrap();
        assert_eq!(wv.len(), 3);
        assert!(wv.contains("banana"));
    }
}
