use thiserror::Error;

/// Main error type for querent operations
#[derive(Error, Debug)]
pub enum QuerentError {
    #[error("Term not indexed: {0}")]
    TermNotFound(String),

    #[error("Document not indexed: {0}")]
    DocumentNotFound(String),

    #[error("Catalog is closed")]
    CatalogClosed,

    #[error("Malformed boolean expression: {0}")]
    MalformedExpression(String),

    #[error("Query is empty after cleaning")]
    EmptyQuery,

    #[error("Unknown similarity method: {0}")]
    UnknownMethod(String),

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for querent operations
pub type Result<T> = std::result::Result<T, QuerentError>;

impl QuerentError {
    /// Check if this error is reported to the caller as "no result"
    /// rather than a failure (query-side propagation policy).
    pub fn is_no_result(&self) -> bool {
        matches!(
            self,
            QuerentError::TermNotFound(_) | QuerentError::EmptyQuery
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuerentError::TermNotFound("cat".to_string());
        assert_eq!(err.to_string(), "Term not indexed: cat");

        let err = QuerentError::CatalogClosed;
        assert_eq!(err.to_string(), "Catalog is closed");
    }

    #[test]
    fn test_no_result_errors() {
        assert!(QuerentError::TermNotFound("x".to_string()).is_no_result());
        assert!(QuerentError::EmptyQuery.is_no_result());
        assert!(!QuerentError::CatalogClosed.is_no_result());
        assert!(!QuerentError::MalformedExpression("(".to_string()).is_no_result());
    }
}
