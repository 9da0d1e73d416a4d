/// Tuning knobs of the recommendation engine.
///
/// All limits are explicit construction parameters; the engine reads no
/// globals and no environment.
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Upper bound on the vocabulary size of the term weighting model.
    pub max_features: usize,
    /// Result count used when a query does not specify `top_k`.
    pub default_top_k: usize,
    /// Entry capacity of the per-snapshot query cache.
    pub cache_capacity: usize,
}

impl RecommenderConfig {
    pub const DEFAULT_MAX_FEATURES: usize = 10_000;
    pub const DEFAULT_TOP_K: usize = 5;
    pub const DEFAULT_CACHE_CAPACITY: usize = 1024;
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_features: Self::DEFAULT_MAX_FEATURES,
            default_top_k: Self::DEFAULT_TOP_K,
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
        }
    }
}
