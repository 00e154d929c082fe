//! Vector-space ranked queries

pub mod scoring;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use crate::config::{RankingConfig, TokenizerConfig};
use crate::error::{QuerentError, Result};
use crate::index::InvertedIndex;
use crate::tokenizer::Tokenizer;

/// The five supported query-document similarity measures
///
/// Parsed from the exact, case-sensitive method names `euclidean`,
/// `inner product`, `cosine`, `dice` and `jaccard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimilarityMethod {
    Euclidean,
    InnerProduct,
    Cosine,
    Dice,
    Jaccard,
}

impl SimilarityMethod {
    pub fn name(&self) -> &'static str {
        match self {
            SimilarityMethod::Euclidean => "euclidean",
            SimilarityMethod::InnerProduct => "inner product",
            SimilarityMethod::Cosine => "cosine",
            SimilarityMethod::Dice => "dice",
            SimilarityMethod::Jaccard => "jaccard",
        }
    }

    /// Euclidean ranks by distance, everything else by similarity
    fn ascending(&self) -> bool {
        matches!(self, SimilarityMethod::Euclidean)
    }

    /// Whether a scored document survives the method's keep-threshold
    fn keeps(&self, score: f64, config: &RankingConfig) -> bool {
        match self {
            SimilarityMethod::Euclidean => true,
            SimilarityMethod::InnerProduct => score > config.similarity_threshold,
            SimilarityMethod::Cosine => score >= config.similarity_threshold,
            SimilarityMethod::Dice | SimilarityMethod::Jaccard => score > 0.0,
        }
    }
}

impl FromStr for SimilarityMethod {
    type Err = QuerentError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "euclidean" => Ok(SimilarityMethod::Euclidean),
            "inner product" => Ok(SimilarityMethod::InnerProduct),
            "cosine" => Ok(SimilarityMethod::Cosine),
            "dice" => Ok(SimilarityMethod::Dice),
            "jaccard" => Ok(SimilarityMethod::Jaccard),
            other => Err(QuerentError::UnknownMethod(other.to_string())),
        }
    }
}

/// A document's score for one query; discarded after ranking
#[derive(Clone, Debug)]
pub struct DocumentRank {
    pub document: String,
    pub score: f64,
}

/// Ranks every indexed document against a free-text query
pub struct VectorQueryEngine<'a> {
    index: &'a InvertedIndex,
    tokenizer: Tokenizer,
    config: RankingConfig,
}

impl<'a> VectorQueryEngine<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self::with_configs(index, &TokenizerConfig::default(), RankingConfig::default())
    }

    pub fn with_configs(
        index: &'a InvertedIndex,
        tokenizer: &TokenizerConfig,
        config: RankingConfig,
    ) -> Self {
        Self {
            index,
            tokenizer: Tokenizer::new(tokenizer),
            config,
        }
    }

    /// Rank all documents and return their names, best match first
    /// (smallest distance first for `euclidean`)
    pub fn execute(&self, query: &str, method: SimilarityMethod) -> Result<Vec<String>> {
        Ok(self
            .rank(query, method)?
            .into_iter()
            .map(|r| r.document)
            .collect())
    }

    /// At most the first `k` names of [`execute`](Self::execute)'s result
    pub fn top_k(&self, query: &str, method: SimilarityMethod, k: usize) -> Result<Vec<String>> {
        let mut result = self.execute(query, method)?;
        result.truncate(k);
        Ok(result)
    }

    /// Score, filter and sort every document for the query
    pub fn rank(&self, query: &str, method: SimilarityMethod) -> Result<Vec<DocumentRank>> {
        let tokens = self.tokenizer.tokenize(query);
        if tokens.is_empty() {
            return Err(QuerentError::EmptyQuery);
        }

        let weights = self.query_weights(&tokens);

        let mut ranks = Vec::new();
        for document in self.index.document_names() {
            let pairs: Vec<(f64, f64)> = tokens
                .iter()
                .map(|term| {
                    (
                        weights.get(term).copied().unwrap_or(0.0),
                        self.index.weight(term, document),
                    )
                })
                .collect();

            let score = match method {
                SimilarityMethod::Euclidean => scoring::euclidean_distance(&pairs),
                SimilarityMethod::InnerProduct => scoring::inner_product(&pairs),
                SimilarityMethod::Cosine => scoring::cosine(&pairs),
                SimilarityMethod::Dice => scoring::dice(&pairs),
                SimilarityMethod::Jaccard => scoring::jaccard(&pairs),
            };

            if method.keeps(score, &self.config) {
                ranks.push(DocumentRank {
                    document: document.clone(),
                    score,
                });
            }
        }

        // One sort for every method; only the direction differs.
        ranks.sort_by(|a, b| {
            let ordering = a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal);
            if method.ascending() {
                ordering
            } else {
                ordering.reverse()
            }
        });

        Ok(ranks)
    }

    /// Weight per distinct query term:
    /// `(0.5 * tf / max_tf + 0.5) * ln(N / df)`, 0 for unindexed terms
    fn query_weights(&self, tokens: &[String]) -> HashMap<String, f64> {
        let mut frequencies: HashMap<&str, f64> = HashMap::new();
        for token in tokens {
            *frequencies.entry(token.as_str()).or_insert(0.0) += 1.0;
        }
        let max_frequency = frequencies.values().fold(0.0f64, |a, &b| a.max(b));
        let total_documents = self.index.document_count() as f64;

        frequencies
            .into_iter()
            .map(|(term, tf)| {
                let df = self.index.document_frequency(term) as f64;
                let weight = if df > 0.0 {
                    (0.5 * tf / max_frequency + 0.5) * (total_documents / df).ln()
                } else {
                    0.0
                };
                (term.to_string(), weight)
            })
            .collect()
    }
}
