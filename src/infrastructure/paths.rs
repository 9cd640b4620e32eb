//! Filesystem path utilities.
//!
//! Resolves where persistent data (the bookmark file) lives, following the
//! platform convention: `$XDG_DATA_HOME/ladle` when set, otherwise
//! `~/.local/share/ladle`.

use std::path::PathBuf;

/// Returns the data directory for ladle storage.
///
/// The bookmark file `bookmarks.json` is located within this directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("ladle");
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local/share/ladle");
    }
    PathBuf::from(".ladle")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths without a tilde pass through unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Ok(home) = std::env::var("HOME") else {
        return path.to_string();
    };
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{home}/{rest}")
    } else if path == "~" {
        home
    } else {
        path.to_string()
    }
}
