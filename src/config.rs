use serde::{Deserialize, Serialize};

/// Ranking and maintenance thresholds
///
/// These are the engine's tunable constants. The defaults reproduce the
/// reference behavior; tests override individual fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankingConfig {
    /// A term is pruned at save time when the fraction of documents
    /// containing it exceeds this value.
    pub prune_threshold: f64,
    /// Minimum score for a document to be kept by the `inner product`
    /// method (strict) and the `cosine` method (inclusive).
    pub similarity_threshold: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            prune_threshold: 0.80,
            similarity_threshold: 0.3,
        }
    }
}

/// Tokenizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Lowercase tokens before indexing. Off by default: terms are
    /// case-sensitive, matching the document cleaning rules.
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { lowercase: false }
    }
}
