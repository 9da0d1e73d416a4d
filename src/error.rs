use thiserror::Error;

/// Failure taxonomy of the recommendation core.
///
/// Every fallible operation surfaces one of these variants as a typed
/// `Result`; a failed call never leaves the engine in a partially updated
/// state.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// `fit` or `update` was invoked with zero job records loaded.
    #[error("corpus is empty, load at least one job before fitting")]
    EmptyCorpus,

    /// A query was issued before a successful `fit`.
    /// Recoverable: load a corpus, fit, then retry.
    #[error("recommender is not fitted, call load and fit first")]
    NotFitted,

    /// A filter named an attribute that no record in the corpus carries.
    #[error("unknown filter attribute: {0}")]
    InvalidFilter(String),

    /// Job input was not a JSON sequence of job-shaped mappings.
    #[error("malformed job records: {0}")]
    InvalidJobData(#[from] serde_json::Error),
}
