//! Similarity aggregation across column samples
//!
//! Scores each normalized sample against every type in the catalog, then
//! averages the per-sample vectors into one similarity vector per column.
//! Scoring errors are never skipped: the first failing sample aborts the
//! aggregation with the offending sample logged for diagnosis.

use std::cmp::Ordering;

use tracing::{debug, error};

use crate::embedding::EmbeddingModel;
use crate::error::{Error, Result};
use crate::normalize::{TokenSeq, TypeCatalog};

/// At most this many samples are scored per aggregation pass. Columns can
/// hold millions of values; the cap keeps the pass affordable.
pub const MAX_SAMPLES: usize = 500;

/// Default neighborhood size for [`sample_topk_indicator`].
pub const DEFAULT_TOP_K: usize = 3;

/// An averaged similarity vector paired with the display form of the
/// catalog it was scored against.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregated {
    /// Space-joined type labels, order-aligned with `scores`.
    pub types: Vec<String>,
    /// Averaged similarity per type, each in [0.0, 1.0].
    pub scores: Vec<f32>,
}

/// Score one sample against every type in the catalog.
///
/// The raw model similarity in [-1.0, 1.0] is rescaled to [0.0, 1.0] via
/// `(s + 1) / 2`. The result has one entry per catalog type, in catalog
/// order.
pub fn sample_similarity<M: EmbeddingModel>(
    sample: &[String],
    catalog: &TypeCatalog,
    model: &M,
) -> Result<Vec<f32>> {
    catalog
        .iter()
        .map(|typ| Ok((model.similarity(sample, typ)? + 1.0) / 2.0))
        .collect()
}

/// Indicator vector marking the `k` types most similar to the sample.
///
/// Positions of the `k` highest scores under [`sample_similarity`] are set
/// to 1.0, the rest to 0.0. Exact ties rank the lower catalog index first.
/// A catalog smaller than `k` marks every type.
pub fn sample_topk_indicator<M: EmbeddingModel>(
    sample: &[String],
    catalog: &TypeCatalog,
    model: &M,
    k: usize,
) -> Result<Vec<f32>> {
    let similarities = sample_similarity(sample, catalog, model)?;

    let mut order: Vec<usize> = (0..similarities.len()).collect();
    order.sort_by(|&a, &b| {
        similarities[b]
            .partial_cmp(&similarities[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut indicator = vec![0.0; similarities.len()];
    for &idx in order.iter().take(k) {
        indicator[idx] = 1.0;
    }
    Ok(indicator)
}

/// Average a scoring function over at most [`MAX_SAMPLES`] samples.
///
/// Accumulates `scoring(sample, catalog, model)` element-wise and divides
/// by the number of samples processed (or 1 if there were none, so an empty
/// column yields an all-zero vector instead of a division error).
///
/// An [`Error::OutOfVocabulary`] from the scoring function means upstream
/// normalization let a bad token through; it is logged with the offending
/// sample and propagated rather than skipped. Any other error is logged as
/// unclassified and propagated the same way.
pub fn aggregate<M, F>(
    samples: &[TokenSeq],
    catalog: &TypeCatalog,
    model: &M,
    mut scoring: F,
) -> Result<Aggregated>
where
    M: EmbeddingModel,
    F: FnMut(&[String], &TypeCatalog, &M) -> Result<Vec<f32>>,
{
    let mut accumulated = vec![0.0f32; catalog.len()];
    let mut processed = 0usize;

    for sample in samples.iter().take(MAX_SAMPLES) {
        let scores = match scoring(sample, catalog, model) {
            Ok(scores) => scores,
            Err(err @ Error::OutOfVocabulary(_)) => {
                error!("Out-of-vocabulary token while scoring sample {:?}: {}", sample, err);
                return Err(err);
            }
            Err(err) => {
                error!("Unclassified error while scoring sample {:?}: {}", sample, err);
                return Err(err);
            }
        };

        for (acc, score) in accumulated.iter_mut().zip(&scores) {
            *acc += score;
        }
        processed += 1;
    }

    let divisor = processed.max(1) as f32;
    for acc in &mut accumulated {
        *acc /= divisor;
    }

    debug!("Aggregated {} samples against {} types", processed, catalog.len());

    Ok(Aggregated {
        types: catalog.joined(),
        scores: accumulated,
    })
}
