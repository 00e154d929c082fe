//! Query engines
//!
//! Two stateless engines evaluate queries against a read-only view of an
//! [`InvertedIndex`](crate::index::InvertedIndex):
//!
//! - [`BooleanQueryEngine`]: set-algebra expressions over posting lists
//!   (`AND`, `OR`, `NOT`, parentheses)
//! - [`VectorQueryEngine`]: free-text queries ranked by one of five
//!   similarity measures

pub mod boolean;
pub mod vector;

pub use boolean::BooleanQueryEngine;
pub use vector::{DocumentRank, SimilarityMethod, VectorQueryEngine};
