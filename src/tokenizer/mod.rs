//! Text cleaning and tokenization
//!
//! Documents arrive as raw text lines. Cleaning keeps ASCII letters and
//! digits, collapses whitespace runs, and re-joins words that were
//! hyphenated across a line wrap.

mod cleaner;

pub use cleaner::{LineCleaner, Tokenizer};
