//! Inverted index and per-posting statistics
//!
//! The index maps terms to posting lists and keeps the per-document
//! bookkeeping (insertion-ordered document list, max term frequency per
//! document) needed for TF-IDF weighting.

mod inverted;
mod posting;

pub use inverted::InvertedIndex;
pub use posting::{Posting, PostingList, UNSET_WEIGHT};
