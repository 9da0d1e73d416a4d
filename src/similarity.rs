//! Cosine scoring of one query projection against every corpus vector.

use rayon::prelude::*;

use crate::vectorizer::sparse::SparseVector;
use crate::vectorizer::TfIdfModel;

/// Similarity of `text` against every corpus vector, index-aligned with the
/// corpus the model was fitted on.
///
/// Both sides are unit length, so the cosine reduces to a plain dot
/// product. Weights are non-negative, which keeps every score in [0, 1];
/// rounding drift above 1.0 is clamped away.
pub fn score_against_corpus(
    model: &TfIdfModel,
    vectors: &[SparseVector],
    text: &str,
) -> Vec<f32> {
    let query = model.transform(text);
    vectors
        .par_iter()
        .map(|doc| query.dot(doc).clamp(0.0, 1.0))
        .collect()
}
