//! Recall and precision against relevance judgments
//!
//! Consumes a query's returned document names and the ground-truth
//! relevant list; never influences the engines.

use std::io::BufRead;

use crate::corpus;
use crate::error::Result;

/// Ground-truth relevant documents per query (1-based query numbers)
pub struct RelevanceJudgments {
    relevant: Vec<Vec<String>>,
}

impl RelevanceJudgments {
    pub fn new(relevant: Vec<Vec<String>>) -> Self {
        Self { relevant }
    }

    /// Parse `query-number document-id` judgment lines
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::new(corpus::parse_relevance(reader)?))
    }

    pub fn relevant_for(&self, query_number: usize) -> &[String] {
        self.relevant
            .get(query_number.wrapping_sub(1))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fraction of the relevant documents that were returned
    pub fn recall(&self, query_number: usize, results: &[String]) -> f64 {
        let relevant = self.relevant_for(query_number);
        if relevant.is_empty() {
            return 0.0;
        }
        self.matches(query_number, results) as f64 / relevant.len() as f64
    }

    /// Fraction of the returned documents that are relevant
    pub fn precision(&self, query_number: usize, results: &[String]) -> f64 {
        if results.is_empty() {
            return 0.0;
        }
        self.matches(query_number, results) as f64 / results.len() as f64
    }

    fn matches(&self, query_number: usize, results: &[String]) -> usize {
        let relevant = self.relevant_for(query_number);
        results.iter().filter(|d| relevant.contains(d)).count()
    }
}
