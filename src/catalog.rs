//! Catalog: lifecycle wrapper around one inverted index
//!
//! The catalog owns the index behind a reader/writer lock: ingestion,
//! removal and close take the write lock, queries share the read lock.
//! A closed catalog rejects every operation until reopened.

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use tracing::{debug, info};

use crate::config::{RankingConfig, TokenizerConfig};
use crate::error::{QuerentError, Result};
use crate::index::InvertedIndex;
use crate::query::{BooleanQueryEngine, SimilarityMethod, VectorQueryEngine};
use crate::store::IndexStore;
use crate::tokenizer::{LineCleaner, Tokenizer};

struct CatalogState {
    index: InvertedIndex,
    open: bool,
    dirty: bool,
    /// Carries a hyphenated fragment between the lines of the document
    /// currently being ingested.
    cleaner: LineCleaner,
}

impl CatalogState {
    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(QuerentError::CatalogClosed)
        }
    }
}

/// Open/changed/closed lifecycle around one [`InvertedIndex`]
pub struct Catalog {
    state: RwLock<CatalogState>,
    tokenizer_config: TokenizerConfig,
    ranking: RankingConfig,
}

impl Catalog {
    /// Open a catalog over an index (freshly created or loaded from a
    /// store)
    pub fn open(index: InvertedIndex) -> Self {
        Self::with_configs(index, TokenizerConfig::default(), RankingConfig::default())
    }

    pub fn with_configs(
        index: InvertedIndex,
        tokenizer_config: TokenizerConfig,
        ranking: RankingConfig,
    ) -> Self {
        info!(index = index.name(), "catalog opened");
        let cleaner = Tokenizer::new(&tokenizer_config).line_cleaner();
        Self {
            state: RwLock::new(CatalogState {
                index,
                open: true,
                dirty: false,
                cleaner,
            }),
            tokenizer_config,
            ranking,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.read().open
    }

    /// Changed since the catalog was opened or last saved
    pub fn is_dirty(&self) -> bool {
        self.state.read().dirty
    }

    pub fn name(&self) -> String {
        self.state.read().index.name().to_string()
    }

    /// Read-only view of the index for standalone query engines
    pub fn index(&self) -> Result<MappedRwLockReadGuard<'_, InvertedIndex>> {
        let state = self.state.read();
        state.ensure_open()?;
        Ok(RwLockReadGuard::map(state, |s| &s.index))
    }

    /// Tokenize and index a document's lines, then re-weight
    ///
    /// Re-ingesting a name replaces its previous postings, so this is an
    /// upsert.
    pub fn ingest_document<I, L>(&self, name: &str, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let state = &mut *self.state.write();
        state.ensure_open()?;

        state.index.remove_document(name);
        state.cleaner.reset();

        let mut tokens = 0usize;
        for line in lines {
            for token in state.cleaner.tokenize_line(line.as_ref()) {
                state.index.insert_term(&token, name);
                tokens += 1;
            }
        }

        state.index.recompute_all_weights();
        state.dirty = true;
        debug!(document = name, tokens, "document ingested");
        Ok(())
    }

    /// Remove a document's postings from every term
    ///
    /// Returns `false` (without re-weighting) when the document was not
    /// indexed.
    pub fn remove_document(&self, name: &str) -> Result<bool> {
        let state = &mut *self.state.write();
        state.ensure_open()?;

        match state.index.remove_document(name) {
            Some(affected) if affected > 0 => {
                state.index.recompute_all_weights();
                state.dirty = true;
                debug!(document = name, terms = affected, "document removed");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Prune frequent terms, refresh weights and persist the index
    pub fn save(&self, store: &dyn IndexStore) -> Result<()> {
        let state = &mut *self.state.write();
        state.ensure_open()?;
        Self::save_locked(state, store, &self.ranking)
    }

    /// Persist if dirty, then mark the catalog closed
    pub fn close(&self, store: &dyn IndexStore) -> Result<()> {
        let state = &mut *self.state.write();
        state.ensure_open()?;
        Self::save_locked(state, store, &self.ranking)?;
        state.open = false;
        info!(index = state.index.name(), "catalog closed");
        Ok(())
    }

    fn save_locked(
        state: &mut CatalogState,
        store: &dyn IndexStore,
        ranking: &RankingConfig,
    ) -> Result<()> {
        if !state.dirty {
            return Ok(());
        }
        state.index.prune_frequent_terms(ranking.prune_threshold);
        store.save(&state.index)?;
        state.dirty = false;
        Ok(())
    }

    /// Evaluate a boolean expression
    ///
    /// `Ok(None)` means a literal term was not indexed (or the expression
    /// was empty); malformed expressions are errors.
    pub fn boolean_query(&self, expression: &str) -> Result<Option<Vec<String>>> {
        let state = self.state.read();
        state.ensure_open()?;

        match BooleanQueryEngine::new(&state.index).execute(expression) {
            Ok(documents) => Ok(Some(documents)),
            Err(err) if err.is_no_result() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Rank all documents against a free-text query. An empty cleaned
    /// query yields no results.
    pub fn vector_query(&self, text: &str, method: &str) -> Result<Vec<String>> {
        let state = self.state.read();
        state.ensure_open()?;
        let method: SimilarityMethod = method.parse()?;

        match self.vector_engine(&state.index).execute(text, method) {
            Ok(documents) => Ok(documents),
            Err(err) if err.is_no_result() => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// The `k` best-ranked documents for a free-text query
    pub fn vector_top_k(&self, text: &str, method: &str, k: usize) -> Result<Vec<String>> {
        let mut documents = self.vector_query(text, method)?;
        documents.truncate(k);
        Ok(documents)
    }

    fn vector_engine<'a>(&self, index: &'a InvertedIndex) -> VectorQueryEngine<'a> {
        VectorQueryEngine::with_configs(index, &self.tokenizer_config, self.ranking.clone())
    }
}
