use serde::{Deserialize, Serialize};

/// Weight carried by a posting before the first re-weighting pass
pub const UNSET_WEIGHT: f64 = -1.0;

/// One (document, occurrence count, weight) fact for a term
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Posting {
    pub document: String,
    pub occurrences: u32,
    pub weight: f64,
}

impl Posting {
    /// Create a posting for the first occurrence of a term in a document
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            occurrences: 1,
            weight: UNSET_WEIGHT,
        }
    }
}

/// All postings for one term, plus the total occurrence count across
/// documents
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PostingList {
    postings: Vec<Posting>,
    total_occurrences: u64,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of the term in `document`. Creates a posting
    /// with count 1 on first sight, increments it afterwards. Returns the
    /// document's new occurrence count.
    pub fn add(&mut self, document: &str) -> u32 {
        self.total_occurrences += 1;
        if let Some(posting) = self.postings.iter_mut().find(|p| p.document == document) {
            posting.occurrences += 1;
            return posting.occurrences;
        }
        self.postings.push(Posting::new(document));
        1
    }

    /// Remove the document's posting. Returns false if the document has
    /// no posting in this list.
    pub fn remove(&mut self, document: &str) -> bool {
        match self.postings.iter().position(|p| p.document == document) {
            Some(pos) => {
                let posting = self.postings.remove(pos);
                self.total_occurrences -= u64::from(posting.occurrences);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, document: &str) -> Option<&Posting> {
        self.postings.iter().find(|p| p.document == document)
    }

    pub fn contains(&self, document: &str) -> bool {
        self.get(document).is_some()
    }

    /// Postings in insertion order
    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub(crate) fn postings_mut(&mut self) -> &mut [Posting] {
        &mut self.postings
    }

    /// Document names in posting order
    pub fn document_names(&self) -> impl Iterator<Item = &str> {
        self.postings.iter().map(|p| p.document.as_str())
    }

    /// Number of documents containing the term
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Occurrences of the term summed over all documents
    pub fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }
}
