//! Bookmark persistence abstraction.
//!
//! This module defines the [`BookmarkStore`] trait that abstracts over
//! persistence backends for the bookmark collection. The trait is minimal on
//! purpose: the application loads the whole collection once at startup and
//! overwrites it on every mutating bookmark operation: no incremental diff,
//! no transaction.

use crate::domain::{Recipe, Result};

/// Abstraction over bookmark persistence backends.
///
/// # Implementations
///
/// - [`JsonBookmarks`](crate::storage::JsonBookmarks): JSON file with atomic
///   writes (default)
pub trait BookmarkStore: Send {
    /// Loads the persisted bookmark collection.
    ///
    /// Returns an empty collection when nothing has been stored yet, or when
    /// the stored content fails to parse; a damaged bookmark file must not
    /// crash startup.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine I/O failures (e.g. the file exists
    /// but cannot be read).
    fn load(&self) -> Result<Vec<Recipe>>;

    /// Persists the full bookmark collection, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    fn save(&mut self, bookmarks: &[Recipe]) -> Result<()>;
}
