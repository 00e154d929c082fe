pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod metrics;
pub mod query;
pub mod store;
pub mod tokenizer;

pub use catalog::Catalog;
pub use config::{RankingConfig, TokenizerConfig};
pub use error::{QuerentError, Result};
pub use index::{InvertedIndex, Posting, PostingList};
pub use metrics::RelevanceJudgments;
pub use query::{BooleanQueryEngine, DocumentRank, SimilarityMethod, VectorQueryEngine};
pub use store::{FileStore, IndexStore};
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
