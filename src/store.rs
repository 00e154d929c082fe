//! Index persistence
//!
//! An [`IndexStore`] round-trips a whole [`InvertedIndex`] as an opaque
//! aggregate. The catalog prunes frequent terms and refreshes weights
//! before every save; stores only serialize.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{QuerentError, Result};
use crate::index::InvertedIndex;

/// On-disk format version written into every manifest
pub const STORE_VERSION: u32 = 1;

/// Loadable/saveable index storage
pub trait IndexStore {
    fn load(&self, name: &str) -> Result<InvertedIndex>;
    fn save(&self, index: &InvertedIndex) -> Result<()>;
    fn exists(&self, name: &str) -> bool;
    fn remove(&self, name: &str) -> Result<()>;
}

/// Human-readable sidecar written next to each index file
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub documents: usize,
    pub terms: usize,
}

/// File-backed store: one `<name>.idx` bincode file per index plus a
/// `<name>.json` manifest, all under a root directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn index_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.idx"))
    }

    fn manifest_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl IndexStore for FileStore {
    fn load(&self, name: &str) -> Result<InvertedIndex> {
        let path = self.index_path(name);
        if !path.exists() {
            return Err(QuerentError::IndexNotFound(name.to_string()));
        }
        let bytes = fs::read(&path)?;
        let index = bincode::deserialize(&bytes)?;
        info!(index = name, "index loaded");
        Ok(index)
    }

    fn save(&self, index: &InvertedIndex) -> Result<()> {
        fs::create_dir_all(&self.root)?;

        let bytes = bincode::serialize(index)?;
        fs::write(self.index_path(index.name()), bytes)?;

        let manifest = Manifest {
            version: STORE_VERSION,
            documents: index.document_count(),
            terms: index.term_count(),
        };
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(self.manifest_path(index.name()), json)?;

        info!(
            index = index.name(),
            documents = manifest.documents,
            terms = manifest.terms,
            "index saved"
        );
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.index_path(name).exists()
    }

    fn remove(&self, name: &str) -> Result<()> {
        if !self.exists(name) {
            return Err(QuerentError::IndexNotFound(name.to_string()));
        }
        fs::remove_file(self.index_path(name))?;
        let manifest = self.manifest_path(name);
        if manifest.exists() {
            fs::remove_file(manifest)?;
        }
        Ok(())
    }
}

/// Store that keeps nothing; for catalogs that never persist
pub struct NullStore;

impl IndexStore for NullStore {
    fn load(&self, name: &str) -> Result<InvertedIndex> {
        Err(QuerentError::IndexNotFound(name.to_string()))
    }

    fn save(&self, _index: &InvertedIndex) -> Result<()> {
        Ok(())
    }

    fn exists(&self, _name: &str) -> bool {
        false
    }

    fn remove(&self, name: &str) -> Result<()> {
        Err(QuerentError::IndexNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new("sample");
        index.insert_terms(["alpha", "beta", "alpha"], "doc1.txt");
        index.insert_terms(["beta", "gamma"], "doc2.txt");
        index.recompute_all_weights();
        index
    }

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        let index = sample_index();

        store.save(&index).unwrap();
        let loaded = store.load("sample").unwrap();

        assert_eq!(loaded.name(), index.name());
        assert_eq!(loaded.document_names(), index.document_names());
        assert_eq!(loaded.term_count(), index.term_count());
        for term in ["alpha", "beta", "gamma"] {
            let original = index.posting_list(term).unwrap();
            let restored = loaded.posting_list(term).unwrap();
            assert_eq!(original.total_occurrences(), restored.total_occurrences());
            for posting in original.postings() {
                let other = restored.get(&posting.document).unwrap();
                assert_eq!(other.occurrences, posting.occurrences);
                assert_eq!(other.weight, posting.weight);
            }
        }
        assert_eq!(
            loaded.max_frequency("doc1.txt"),
            index.max_frequency("doc1.txt")
        );
    }

    #[test]
    fn test_manifest_written() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        store.save(&sample_index()).unwrap();

        let json = fs::read_to_string(tmp.path().join("sample.json")).unwrap();
        let manifest: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest.version, STORE_VERSION);
        assert_eq!(manifest.documents, 2);
        assert_eq!(manifest.terms, 3);
    }

    #[test]
    fn test_load_missing_index() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());
        assert!(matches!(
            store.load("absent"),
            Err(QuerentError::IndexNotFound(_))
        ));
    }

    #[test]
    fn test_exists_and_remove() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path());

        assert!(!store.exists("sample"));
        store.save(&sample_index()).unwrap();
        assert!(store.exists("sample"));

        store.remove("sample").unwrap();
        assert!(!store.exists("sample"));
        assert!(store.remove("sample").is_err());
    }
}
