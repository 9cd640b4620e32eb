//! JSON file-based bookmark storage.
//!
//! This module provides a simple, human-readable persistence backend using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes, and it treats an unreadable or unparseable
//! file as an empty collection so a damaged file never blocks startup.

use crate::domain::error::{LadleError, Result};
use crate::domain::Recipe;
use crate::storage::backend::BookmarkStore;
use crate::storage::models::BookmarkRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk container format.
///
/// Wraps the bookmark sequence in a versioned object for future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookmarkFile {
    /// Version of the storage format.
    version: u32,

    /// Persisted bookmark snapshots, insertion order preserved.
    #[serde(default)]
    bookmarks: Vec<BookmarkRecord>,
}

impl Default for BookmarkFile {
    fn default() -> Self {
        Self {
            version: 1,
            bookmarks: Vec::new(),
        }
    }
}

/// JSON file bookmark backend.
///
/// The whole collection is rewritten on every save; at the sizes a bookmark
/// list reaches this is cheaper than any incremental scheme.
pub struct JsonBookmarks {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonBookmarks {
    /// Creates a backend rooted at `file_path`.
    ///
    /// Parent directories are created eagerly so the first save cannot fail on
    /// a missing directory.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing bookmark storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }

    fn read_file(path: &Path) -> Result<BookmarkFile> {
        let contents = std::fs::read_to_string(path)?;
        match serde_json::from_str::<BookmarkFile>(&contents) {
            Ok(file) => Ok(file),
            Err(e) => {
                // A damaged file is recoverable; start over with an empty collection.
                tracing::warn!(error = %e, path = ?path, "bookmark file unparseable, starting empty");
                Ok(BookmarkFile::default())
            }
        }
    }
}

impl BookmarkStore for JsonBookmarks {
    fn load(&self) -> Result<Vec<Recipe>> {
        let _span = tracing::debug_span!("bookmarks_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no bookmark file yet, starting empty");
            return Ok(Vec::new());
        }

        let file = Self::read_file(&self.file_path)?;
        let bookmarks: Vec<Recipe> = file
            .bookmarks
            .into_iter()
            .map(BookmarkRecord::into_recipe)
            .collect();

        tracing::debug!(count = bookmarks.len(), "bookmarks loaded");
        Ok(bookmarks)
    }

    fn save(&mut self, bookmarks: &[Recipe]) -> Result<()> {
        let _span = tracing::debug_span!("bookmarks_save", count = bookmarks.len()).entered();

        let file = BookmarkFile {
            version: 1,
            bookmarks: bookmarks.iter().map(BookmarkRecord::from_recipe).collect(),
        };

        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| LadleError::Storage(format!("failed to serialize bookmarks: {e}")))?;

        // Write to a temporary file first, then rename into place, so the file
        // is never left half-written.
        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("bookmarks saved");
        Ok(())
    }
}
