use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::posting::PostingList;

/// Term-to-postings mapping with per-document bookkeeping
///
/// Beyond the postings themselves the index tracks every document in
/// first-insertion order and the maximum occurrence count of any term in
/// each document, the TF normalization denominator.
///
/// Invariant: `documents` and `max_frequencies` cover exactly the same
/// documents, and each max frequency equals the true maximum occurrence
/// count among the postings currently referencing that document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvertedIndex {
    name: String,
    terms: HashMap<String, PostingList>,
    documents: Vec<String>,
    max_frequencies: HashMap<String, u32>,
}

impl InvertedIndex {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: HashMap::new(),
            documents: Vec::new(),
            max_frequencies: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record one occurrence of `term` in `document`
    pub fn insert_term(&mut self, term: &str, document: &str) {
        let count = self
            .terms
            .entry(term.to_string())
            .or_default()
            .add(document);

        if !self.documents.iter().any(|d| d == document) {
            self.documents.push(document.to_string());
        }

        let max = self.max_frequencies.entry(document.to_string()).or_insert(0);
        if count > *max {
            *max = count;
        }
    }

    /// Record a sequence of terms for one document
    pub fn insert_terms<I, T>(&mut self, terms: I, document: &str)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for term in terms {
            self.insert_term(term.as_ref(), document);
        }
    }

    /// Record one term across a sequence of documents
    pub fn insert_term_multi<I, D>(&mut self, term: &str, documents: I)
    where
        I: IntoIterator<Item = D>,
        D: AsRef<str>,
    {
        for document in documents {
            self.insert_term(term, document.as_ref());
        }
    }

    /// Delete a term and repair the per-document bookkeeping
    ///
    /// For every document the term referenced, if the removed posting held
    /// the document's max frequency the max is recomputed from the
    /// remaining terms; a document no other term references is dropped
    /// entirely. Returns `None` when the term is not indexed.
    pub fn remove_term(&mut self, term: &str) -> Option<PostingList> {
        let list = self.terms.remove(term)?;

        for posting in list.postings() {
            let document = posting.document.as_str();
            if self.max_frequencies.get(document).copied() != Some(posting.occurrences) {
                continue;
            }

            let mut max = 0u32;
            let mut referenced = false;
            for other in self.terms.values() {
                if let Some(p) = other.get(document) {
                    max = max.max(p.occurrences);
                    referenced = true;
                }
            }

            if referenced {
                self.max_frequencies.insert(document.to_string(), max);
            } else {
                self.documents.retain(|d| d != document);
                self.max_frequencies.remove(document);
            }
        }

        Some(list)
    }

    /// Remove a document from every term's posting list
    ///
    /// Terms left with an empty posting list are deleted. Returns the
    /// number of terms the document was removed from, or `None` when the
    /// document was never indexed.
    pub fn remove_document(&mut self, document: &str) -> Option<usize> {
        if !self.max_frequencies.contains_key(document) {
            return None;
        }

        self.documents.retain(|d| d != document);
        self.max_frequencies.remove(document);

        let mut affected = 0;
        self.terms.retain(|_, list| {
            if list.remove(document) {
                affected += 1;
            }
            !list.is_empty()
        });

        Some(affected)
    }

    /// Remove degenerate stopwords: terms whose posting list covers a
    /// fraction of documents strictly greater than `threshold`. Recomputes
    /// all weights afterwards. A batch operation run on the save path, not
    /// after every mutation.
    pub fn prune_frequent_terms(&mut self, threshold: f64) {
        let total = self.documents.len() as f64;
        let frequent: Vec<String> = self
            .terms
            .iter()
            .filter(|(_, list)| list.len() as f64 / total > threshold)
            .map(|(term, _)| term.clone())
            .collect();

        for term in &frequent {
            self.remove_term(term);
        }
        if !frequent.is_empty() {
            debug!(pruned = frequent.len(), "removed frequent terms");
        }

        self.recompute_all_weights();
    }

    /// Recompute every posting's TF-IDF weight
    ///
    /// `weight = (occurrences / max_freq(document)) * ln(N / df) / ln(N)`.
    /// A single-document collection has `ln(N) = 0`; every weight is
    /// defined as 0 in that case.
    pub fn recompute_all_weights(&mut self) {
        let total = self.documents.len() as f64;
        let ln_total = total.ln();
        let max_frequencies = &self.max_frequencies;

        for list in self.terms.values_mut() {
            let df = list.len() as f64;
            let idf = (total / df).ln();
            for posting in list.postings_mut() {
                posting.weight = if total <= 1.0 {
                    0.0
                } else {
                    let max_freq = max_frequencies
                        .get(&posting.document)
                        .copied()
                        .unwrap_or(1) as f64;
                    let tf = f64::from(posting.occurrences) / max_freq;
                    tf * idf / ln_total
                };
            }
        }
    }

    pub fn posting_list(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|t| t.as_str())
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Documents in first-insertion order
    pub fn document_names(&self) -> &[String] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn contains_document(&self, document: &str) -> bool {
        self.max_frequencies.contains_key(document)
    }

    /// Number of documents containing `term`
    pub fn document_frequency(&self, term: &str) -> usize {
        self.terms.get(term).map(|l| l.len()).unwrap_or(0)
    }

    /// Maximum occurrence count of any term in `document`
    pub fn max_frequency(&self, document: &str) -> Option<u32> {
        self.max_frequencies.get(document).copied()
    }

    /// Stored weight of `term` in `document`, 0 when either is absent
    pub fn weight(&self, term: &str, document: &str) -> f64 {
        self.terms
            .get(term)
            .and_then(|list| list.get(document))
            .map(|p| p.weight)
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
