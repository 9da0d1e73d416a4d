//! Content-based job recommendation engine.
//!
//! Jobs are scored against a free-form user profile by projecting both into
//! a tf-idf vector space fitted over the job corpus and taking the cosine
//! similarity, then filtered by structured attributes and ranked into a
//! top-K list.

pub mod cache;
pub mod config;
pub mod corpus;
pub mod error;
pub mod profile;
pub mod rank;
pub mod recommender;
pub mod similarity;
pub mod vectorizer;

/// The recommendation facade.
///
/// Combines the corpus store, the term weighting model, the query cache
/// and the ranking stage behind four operations: `load`, `fit`, `update`
/// and `recommend`. All methods take `&self`; many concurrent `recommend`
/// calls are safe against one instance while `update` swaps in fully built
/// snapshots.
pub use recommender::Recommender;

/// Tuning knobs of the engine: vocabulary cap, default top-K and query
/// cache capacity, passed explicitly at construction.
pub use config::RecommenderConfig;

/// Failure taxonomy surfaced by every fallible operation.
pub use error::RecommendError;

/// One job posting plus the ordered corpus derived from a batch of them.
///
/// The corpus keeps record order: it is the index space of the fitted
/// model and the tie-break order of the ranking.
pub use corpus::{Corpus, JobRecord};

/// A user profile with optional fields, collapsed deterministically into
/// one matching text. `Profile::from_value` gives the lenient JSON intake
/// used at the request boundary.
pub use profile::Profile;

/// Structured attribute filters and the ranked result records they narrow.
pub use rank::{Filters, Recommendation};

/// The term weighting layer: `TfIdfVectorizer` fits a `TfIdfModel` over a
/// corpus; the model projects arbitrary text into the fitted vector space.
pub use vectorizer::{TfIdfModel, TfIdfVectorizer};
