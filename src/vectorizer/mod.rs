//! Term weighting: vocabulary construction and tf-idf projection into a
//! fixed vector space.

pub mod sparse;
pub mod tokenize;

use std::cmp::Reverse;
use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::RecommendError;
use sparse::SparseVector;
use tokenize::tokenize;

/// Occurrence statistics of one term across the corpus.
#[derive(Debug, Clone, Copy, Default)]
struct TermStat {
    /// Total occurrences over all documents; ranks terms for the
    /// vocabulary cut.
    count: u64,
    /// Number of documents containing the term; drives the idf weight.
    doc_freq: u64,
}

/// Builder for fitted term weighting models.
///
/// Holds only the vocabulary size cap and can be reused to fit successive
/// corpora; each `fit` produces an independent model.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    max_features: usize,
}

impl TfIdfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    /// Fit a model over every matching text of the corpus and weigh every
    /// document in the resulting space.
    ///
    /// The vocabulary keeps at most `max_features` terms ranked by total
    /// occurrence count (ties keep first-seen order) with the stopword set
    /// excluded. Document weights are raw term count times smoothed idf,
    /// L2-normalized to unit length. Fails on an empty corpus.
    pub fn fit(&self, corpus: &Corpus) -> Result<(TfIdfModel, Vec<SparseVector>), RecommendError> {
        if corpus.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        // One tokenize pass per document; the token lists are reused below
        // to weigh the documents themselves.
        let docs: Vec<Vec<String>> = corpus
            .matching_texts()
            .iter()
            .map(|text| tokenize(text))
            .collect();

        // Term statistics in first-seen order.
        let mut stats: IndexMap<Box<str>, TermStat> = IndexMap::new();
        for terms in &docs {
            let mut seen_in_doc: Vec<&str> = Vec::new();
            for term in terms {
                let stat = stats.entry(Box::from(term.as_str())).or_default();
                stat.count += 1;
                if !seen_in_doc.contains(&term.as_str()) {
                    stat.doc_freq += 1;
                    seen_in_doc.push(term.as_str());
                }
            }
        }

        // Vocabulary cut: top max_features by corpus-wide count. The stable
        // sort keeps first-seen order among equal counts, and re-sorting the
        // survivors restores first-seen order for dimension assignment.
        let mut order: Vec<usize> = (0..stats.len()).collect();
        order.sort_by_key(|&i| Reverse(stats[i].count));
        order.truncate(self.max_features);
        order.sort_unstable();

        let doc_num = corpus.len() as f64;
        let mut vocabulary: IndexMap<Box<str>, u32> = IndexMap::with_capacity(order.len());
        let mut idf: Vec<f32> = Vec::with_capacity(order.len());
        for &i in &order {
            if let Some((term, stat)) = stats.get_index(i) {
                let dim = vocabulary.len() as u32;
                vocabulary.insert(term.clone(), dim);
                idf.push((((1.0 + doc_num) / (1.0 + stat.doc_freq as f64)).ln() + 1.0) as f32);
            }
        }

        debug!(
            records = corpus.len(),
            terms = stats.len(),
            vocab = vocabulary.len(),
            "fitted term weighting model"
        );

        let model = TfIdfModel { vocabulary, idf };
        let vectors = docs.iter().map(|terms| model.weigh_terms(terms)).collect();
        Ok((model, vectors))
    }
}

/// A fitted term weighting model: the retained vocabulary and its idf
/// weights.
///
/// The dimension space is valid only for the corpus the model was fitted
/// on; refitting produces a fresh model rather than mutating this one.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: IndexMap<Box<str>, u32>,
    idf: Vec<f32>,
}

impl TfIdfModel {
    /// Number of retained vocabulary terms.
    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Project an arbitrary text into the fitted vocabulary space.
    ///
    /// Terms unseen at fit time weigh zero. The result has unit L2 length
    /// unless no term is known at all, in which case it is the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh_terms(&tokenize(text))
    }

    fn weigh_terms(&self, terms: &[String]) -> SparseVector {
        let mut counts: HashMap<u32, u32> = HashMap::new();
        for term in terms {
            if let Some(&dim) = self.vocabulary.get(term.as_str()) {
                *counts.entry(dim).or_insert(0) += 1;
            }
        }
        let mut entries: Vec<(u32, f32)> = counts
            .into_iter()
            .map(|(dim, count)| (dim, count as f32 * self.idf[dim as usize]))
            .collect();
        entries.sort_unstable_by_key(|&(dim, _)| dim);
        let mut vec = SparseVector::from_sorted(entries);
        vec.l2_normalize();
        vec
    }
}
