//! Boolean set-algebra queries over posting lists

mod postfix;

pub use postfix::{infix_to_postfix, Token};

use crate::error::{QuerentError, Result};
use crate::index::InvertedIndex;

/// Evaluates boolean expressions (`AND`, `OR`, `NOT`, parentheses) against
/// a read-only index view
///
/// Result sets are ordered document-name sequences with set semantics:
/// literals yield their posting list's documents in posting order, `NOT`
/// walks the full document list in insertion order, and the binary
/// operators preserve the order of the most recently pushed operand.
pub struct BooleanQueryEngine<'a> {
    index: &'a InvertedIndex,
}

impl<'a> BooleanQueryEngine<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Evaluate an expression and return the matching document names
    ///
    /// A literal term absent from the index fails the whole query with
    /// [`QuerentError::TermNotFound`]; stack underflow (missing operand)
    /// and unbalanced parentheses are
    /// [`QuerentError::MalformedExpression`].
    pub fn execute(&self, expression: &str) -> Result<Vec<String>> {
        if expression.trim().is_empty() {
            return Err(QuerentError::EmptyQuery);
        }

        let tokens = infix_to_postfix(expression)?;
        if tokens.is_empty() {
            return Err(QuerentError::EmptyQuery);
        }

        let mut stack: Vec<Vec<String>> = Vec::new();
        for token in tokens {
            match token {
                Token::Operand(term) => {
                    let list = self
                        .index
                        .posting_list(&term)
                        .ok_or(QuerentError::TermNotFound(term.clone()))?;
                    stack.push(list.document_names().map(String::from).collect());
                }
                Token::Not => {
                    let set = Self::pop(&mut stack)?;
                    stack.push(self.complement(&set));
                }
                Token::And => {
                    let first = Self::pop(&mut stack)?;
                    let second = Self::pop(&mut stack)?;
                    stack.push(intersection(&first, &second));
                }
                Token::Or => {
                    let first = Self::pop(&mut stack)?;
                    let second = Self::pop(&mut stack)?;
                    stack.push(union(first, &second));
                }
            }
        }

        Self::pop(&mut stack)
    }

    fn pop(stack: &mut Vec<Vec<String>>) -> Result<Vec<String>> {
        stack.pop().ok_or_else(|| {
            QuerentError::MalformedExpression("operator is missing an operand".to_string())
        })
    }

    /// All indexed documents, in insertion order, minus `set`
    fn complement(&self, set: &[String]) -> Vec<String> {
        self.index
            .document_names()
            .iter()
            .filter(|d| !set.contains(d))
            .cloned()
            .collect()
    }
}

/// Documents of `a` that also appear in `b`, in `a`'s order
fn intersection(a: &[String], b: &[String]) -> Vec<String> {
    a.iter().filter(|d| b.contains(d)).cloned().collect()
}

/// `a` followed by the documents of `b` not already present
fn union(mut a: Vec<String>, b: &[String]) -> Vec<String> {
    for document in b {
        if !a.contains(document) {
            a.push(document.clone());
        }
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_index() -> InvertedIndex {
        let mut index = InvertedIndex::new("test");
        index.insert_terms(["the", "cat", "sat"], "doc1.txt");
        index.insert_terms(["the", "dog", "sat", "on", "the", "mat"], "doc2.txt");
        index
    }

    #[test]
    fn test_single_term_returns_posting_order() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        assert_eq!(
            engine.execute("sat").unwrap(),
            vec!["doc1.txt", "doc2.txt"]
        );
    }

    #[test]
    fn test_and() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        assert_eq!(engine.execute("cat AND sat").unwrap(), vec!["doc1.txt"]);
    }

    #[test]
    fn test_or() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        let mut result = engine.execute("cat OR dog").unwrap();
        result.sort();
        assert_eq!(result, vec!["doc1.txt", "doc2.txt"]);
    }

    #[test]
    fn test_not() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        assert_eq!(engine.execute("NOT cat").unwrap(), vec!["doc2.txt"]);
    }

    #[test]
    fn test_precedence_not_and_or() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        // Parses as (NOT cat AND dog) OR mat.
        let mut result = engine.execute("NOT cat AND dog OR mat").unwrap();
        result.sort();
        assert_eq!(result, vec!["doc2.txt"]);
    }

    #[test]
    fn test_parentheses() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        // Without parentheses this would be (cat AND dog) OR sat.
        let result = engine.execute("cat AND (dog OR sat)").unwrap();
        assert_eq!(result, vec!["doc1.txt"]);
    }

    #[test]
    fn test_de_morgan() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);

        let mut lhs = engine.execute("NOT (cat AND dog)").unwrap();
        let mut rhs = engine.execute("(NOT cat) OR (NOT dog)").unwrap();
        lhs.sort();
        rhs.sort();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_unindexed_term_fails_query() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        assert!(matches!(
            engine.execute("cat AND zebra"),
            Err(QuerentError::TermNotFound(term)) if term == "zebra"
        ));
    }

    #[test]
    fn test_missing_operand() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        assert!(matches!(
            engine.execute("AND cat"),
            Err(QuerentError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        assert!(matches!(
            engine.execute("(cat AND sat"),
            Err(QuerentError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_empty_expression() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        assert!(matches!(
            engine.execute("   "),
            Err(QuerentError::EmptyQuery)
        ));
    }

    #[test]
    fn test_repeated_not_is_malformed() {
        let index = test_index();
        let engine = BooleanQueryEngine::new(&index);
        // Equal-priority operators pop each other, so a doubled NOT leaves
        // an operator without an operand. Parenthesize to nest negation.
        assert!(matches!(
            engine.execute("NOT NOT cat"),
            Err(QuerentError::MalformedExpression(_))
        ));
        assert_eq!(engine.execute("NOT (NOT cat)").unwrap(), vec!["doc1.txt"]);
    }
}
