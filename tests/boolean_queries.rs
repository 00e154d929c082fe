//! End-to-end boolean query scenarios over an ingested catalog

use querent::{Catalog, InvertedIndex};

fn two_doc_catalog() -> Catalog {
    let catalog = Catalog::open(InvertedIndex::new("animals"));
    catalog
        .ingest_document("doc1.txt", ["the cat sat"])
        .unwrap();
    catalog
        .ingest_document("doc2.txt", ["the dog sat on the mat"])
        .unwrap();
    catalog
}

#[test]
fn and_query_returns_common_documents() {
    let catalog = two_doc_catalog();
    assert_eq!(
        catalog.boolean_query("cat AND sat").unwrap(),
        Some(vec!["doc1.txt".to_string()])
    );
}

#[test]
fn or_query_returns_either_document() {
    let catalog = two_doc_catalog();
    let mut result = catalog.boolean_query("cat OR dog").unwrap().unwrap();
    result.sort();
    assert_eq!(result, vec!["doc1.txt", "doc2.txt"]);
}

#[test]
fn not_query_returns_complement() {
    let catalog = two_doc_catalog();
    assert_eq!(
        catalog.boolean_query("NOT cat").unwrap(),
        Some(vec!["doc2.txt".to_string()])
    );
}

#[test]
fn de_morgan_equivalence() {
    let catalog = two_doc_catalog();

    let mut lhs = catalog.boolean_query("NOT (cat AND dog)").unwrap().unwrap();
    let mut rhs = catalog
        .boolean_query("(NOT cat) OR (NOT dog)")
        .unwrap()
        .unwrap();
    lhs.sort();
    rhs.sort();
    assert_eq!(lhs, rhs);
}

#[test]
fn precedence_without_parentheses() {
    let catalog = two_doc_catalog();
    // AND binds tighter than OR: (cat AND dog) OR mat.
    let result = catalog.boolean_query("cat AND dog OR mat").unwrap().unwrap();
    assert_eq!(result, vec!["doc2.txt"]);
}

#[test]
fn unindexed_literal_yields_no_result() {
    let catalog = two_doc_catalog();
    assert_eq!(catalog.boolean_query("cat AND zebra").unwrap(), None);
    // A sibling query on the same catalog still works afterwards.
    assert!(catalog.boolean_query("cat").unwrap().is_some());
}

#[test]
fn removed_document_unindexes_exclusive_terms() {
    let catalog = two_doc_catalog();
    assert!(catalog.remove_document("doc1.txt").unwrap());

    // "cat" appeared only in doc1, so the literal now misses entirely.
    assert_eq!(catalog.boolean_query("cat").unwrap(), None);
    // Terms still covered by doc2 keep answering.
    assert_eq!(
        catalog.boolean_query("sat").unwrap(),
        Some(vec!["doc2.txt".to_string()])
    );
}

#[test]
fn malformed_expression_is_an_error() {
    let catalog = two_doc_catalog();
    assert!(catalog.boolean_query("(cat AND sat").is_err());
    assert!(catalog.boolean_query("cat AND").is_err());
}
