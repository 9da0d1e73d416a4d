//! The facade combining corpus, term weighting, caching and ranking.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::cache::QueryCache;
use crate::config::RecommenderConfig;
use crate::corpus::{Corpus, JobRecord};
use crate::error::RecommendError;
use crate::profile::Profile;
use crate::rank::{filter_and_rank, Filters, Recommendation};
use crate::similarity::score_against_corpus;
use crate::vectorizer::sparse::SparseVector;
use crate::vectorizer::{TfIdfModel, TfIdfVectorizer};

/// Everything one fitted generation of the engine needs to answer queries.
///
/// Snapshots are immutable apart from the cache and are swapped wholesale,
/// so a reader sees either the whole old generation or the whole new one,
/// never a corpus paired with a model fitted on a different one.
struct Snapshot {
    corpus: Arc<Corpus>,
    model: TfIdfModel,
    vectors: Vec<SparseVector>,
    cache: QueryCache,
}

impl Snapshot {
    /// Cached similarity of one profile text against every corpus vector.
    ///
    /// The cache lock is never held across the similarity computation, so
    /// concurrent misses on the same text may compute twice; both arrive at
    /// identical scores and the cache stays a pure latency optimization.
    fn similarity(&self, profile_text: &str) -> Arc<Vec<f32>> {
        if let Some(hit) = self.cache.get(profile_text) {
            debug!("similarity cache hit");
            return hit;
        }
        let scores = Arc::new(score_against_corpus(&self.model, &self.vectors, profile_text));
        self.cache.insert(profile_text.to_string(), Arc::clone(&scores));
        scores
    }
}

enum State {
    /// No corpus loaded yet.
    Unloaded,
    /// Corpus present, model stale or absent; queries are invalid.
    Loaded { corpus: Arc<Corpus> },
    /// Fitted and answering queries.
    Ready { snapshot: Arc<Snapshot> },
}

/// Content-based job recommender.
///
/// Fit a term weighting model over a job corpus, then rank jobs by textual
/// relevance to a user profile, optionally narrowed by structured
/// attribute filters.
///
/// All methods take `&self`: concurrent `recommend` calls run against an
/// immutable snapshot grabbed under a short read lock, and corpus
/// replacement publishes a fully built snapshot in one swap.
pub struct Recommender {
    config: RecommenderConfig,
    state: RwLock<State>,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            state: RwLock::new(State::Unloaded),
        }
    }

    /// Replace the corpus, discarding any fitted model.
    ///
    /// The engine answers no queries again until the next successful
    /// `fit`; readers still holding the previous snapshot finish against
    /// it.
    pub fn load(&self, records: Vec<JobRecord>) {
        let corpus = Arc::new(Corpus::from_records(records));
        info!(records = corpus.len(), "corpus loaded");
        *self.write_state() = State::Loaded { corpus };
    }

    /// Parse a JSON array of job mappings and load it.
    pub fn load_json(&self, json: &str) -> Result<(), RecommendError> {
        let records: Vec<JobRecord> = serde_json::from_str(json)?;
        self.load(records);
        Ok(())
    }

    /// Fit the term weighting model over the loaded corpus.
    ///
    /// Builds under the writer lock so a concurrent `load` cannot slip in
    /// between reading the corpus and publishing the fitted snapshot. On
    /// failure the previous state is kept; the engine never reports itself
    /// ready for a corpus it could not fit.
    pub fn fit(&self) -> Result<(), RecommendError> {
        let mut state = self.write_state();
        let corpus = match &*state {
            State::Unloaded => return Err(RecommendError::EmptyCorpus),
            State::Loaded { corpus } => Arc::clone(corpus),
            State::Ready { snapshot } => Arc::clone(&snapshot.corpus),
        };
        let snapshot = self.build_snapshot(corpus)?;
        *state = State::Ready {
            snapshot: Arc::new(snapshot),
        };
        Ok(())
    }

    /// Full replace-and-rebuild: `load` and `fit` composed.
    ///
    /// The whole new snapshot (corpus, model, vectors and an empty query
    /// cache) is built off to the side and published as one swap, so the
    /// previous cache dies with the previous snapshot and no score computed
    /// against the old model can answer a query against the new one. An
    /// empty corpus fails the fit and leaves the engine loaded but unfit.
    pub fn update(&self, records: Vec<JobRecord>) -> Result<(), RecommendError> {
        let corpus = Arc::new(Corpus::from_records(records));
        match self.build_snapshot(Arc::clone(&corpus)) {
            Ok(snapshot) => {
                info!(
                    records = corpus.len(),
                    vocab = snapshot.model.vocab_size(),
                    "corpus updated"
                );
                *self.write_state() = State::Ready {
                    snapshot: Arc::new(snapshot),
                };
                Ok(())
            }
            Err(err) => {
                *self.write_state() = State::Loaded { corpus };
                Err(err)
            }
        }
    }

    /// Rank jobs for a profile.
    ///
    /// `top_k` falls back to the configured default; zero yields an empty
    /// result and a value beyond the filtered set yields the whole set.
    /// Fails with `NotFitted` before the first successful `fit` and with
    /// `InvalidFilter` for a filter key outside the corpus schema.
    pub fn recommend(
        &self,
        profile: &Profile,
        top_k: Option<usize>,
        filters: Option<&Filters>,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let snapshot = match &*self.read_state() {
            State::Ready { snapshot } => Arc::clone(snapshot),
            _ => return Err(RecommendError::NotFitted),
        };
        let top_k = top_k.unwrap_or(self.config.default_top_k);
        let profile_text = profile.to_text();
        let scores = snapshot.similarity(&profile_text);
        debug!(top_k, scored = scores.len(), "ranking scored records");
        filter_and_rank(&snapshot.corpus, &scores, filters, top_k)
    }

    /// Number of records in the current corpus, zero when unloaded.
    pub fn corpus_len(&self) -> usize {
        match &*self.read_state() {
            State::Unloaded => 0,
            State::Loaded { corpus } => corpus.len(),
            State::Ready { snapshot } => snapshot.corpus.len(),
        }
    }

    /// Whether the engine can currently answer queries.
    pub fn is_ready(&self) -> bool {
        matches!(&*self.read_state(), State::Ready { .. })
    }

    fn build_snapshot(&self, corpus: Arc<Corpus>) -> Result<Snapshot, RecommendError> {
        let vectorizer = TfIdfVectorizer::new(self.config.max_features);
        let (model, vectors) = vectorizer.fit(&corpus)?;
        Ok(Snapshot {
            corpus,
            model,
            vectors,
            cache: QueryCache::new(self.config.cache_capacity),
        })
    }

    fn read_state(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RecommenderConfig::default())
    }
}
