#![forbid(unsafe_code)]

//! Reading and committing documents
//!
//! `FileStore` reads a document whole and commits it atomically: the new
//! content is written to a uniquely named temporary file next to the target
//! and renamed into place, so the target holds either the old or the new
//! content and never a partial write. Symlinked targets are followed.

use crate::engine::Document;
use crate::error::StoreError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Source and sink for the documents a run rewrites
pub trait DocumentStore {
    /// Read the whole document at `path`
    fn read(&self, path: &Path) -> Result<Document, StoreError>;

    /// Replace the document at `path` with `document`
    fn write(&self, path: &Path, document: &Document) -> Result<(), StoreError>;
}

/// Filesystem-backed store with atomic commits
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        FileStore
    }
}

impl DocumentStore for FileStore {
    fn read(&self, path: &Path) -> Result<Document, StoreError> {
        fs::read_to_string(path)
            .map(Document::from)
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write(&self, path: &Path, document: &Document) -> Result<(), StoreError> {
        write_atomic(path, document.as_str()).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolve the file a write should land on
///
/// A symlinked target is followed so the rename replaces the file it points
/// to and the link itself survives.
fn commit_target(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

/// Write to a fresh temp file next to the target, then rename over it
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let target = commit_target(path)?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Keep the target's permissions when it already exists.
    let permissions = fs::metadata(&target).ok().map(|meta| meta.permissions());

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions)?;
    }

    // On failure the temp file is dropped along with the error, which removes it.
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
