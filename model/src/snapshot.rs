//! Content-addressed local copies of vocabularies.
//!
//! A snapshot is the N-Triples serialization of the primary triples, written
//! under `<prefix>-<hash>__<sanitized namespace>.ttl`. The hash covers the
//! content, so unchanged vocabularies map to the same file and re-runs write
//! nothing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use vocabgen_rdf::serializer::ntriples::to_ntriples;
use vocabgen_rdf::TripleSource;

use crate::error::{Result, VocabError};
use crate::naming::sanitize_for_file_name;

/// Storage for vocabulary snapshots.
pub trait LocalCopyStore {
    /// Stores `content` under `file_name`, returning where it lives.
    ///
    /// Storing identical content under the same name again must succeed and
    /// return the same location.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::Snapshot`] if the content cannot be stored.
    fn store(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}

/// Stores snapshots as files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    directory: PathBuf,
}

impl DirectoryStore {
    /// Creates a store writing into `directory` (created on first write).
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the target directory.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl LocalCopyStore for DirectoryStore {
    fn store(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.directory.join(file_name);
        if fs::read_to_string(&path).is_ok_and(|existing| existing == content) {
            debug!(path = %path.display(), "local copy already up to date");
            return Ok(path);
        }
        fs::create_dir_all(&self.directory).map_err(|source| VocabError::Snapshot {
            path: self.directory.clone(),
            source,
        })?;
        fs::write(&path, content).map_err(|source| VocabError::Snapshot {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "wrote local copy");
        Ok(path)
    }
}

/// Signed 32-bit rolling hash (`h = 31 * h + unit`) over UTF-16 code units.
#[must_use]
pub fn content_hash(content: &str) -> i32 {
    content
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Builds the snapshot file name for a vocabulary.
#[must_use]
pub fn snapshot_file_name(prefix: &str, namespace: &str, content: &str) -> String {
    format!(
        "{prefix}-{}__{}.ttl",
        content_hash(content),
        sanitize_for_file_name(namespace)
    )
}

/// Serializes `source` and hands it to `store`.
///
/// # Errors
///
/// Propagates the store's [`VocabError::Snapshot`].
pub fn store_local_copy<S: TripleSource + ?Sized>(
    store: &dyn LocalCopyStore,
    prefix: &str,
    namespace: &str,
    source: &S,
) -> Result<PathBuf> {
    let content = to_ntriples(source);
    let file_name = snapshot_file_name(prefix, namespace, &content);
    store.store(&file_name, &content)
}
