//! Application state and derived views of it.
//!
//! This module defines [`AppState`], the single source of truth for the
//! running application: the currently open recipe, the current search with
//! its pagination, and the bookmark collection. State is created once at
//! startup (bookmarks loaded from persistence, everything else empty) and
//! mutated exclusively by the [`Store`](crate::app::store::Store) operations.

use crate::domain::{Recipe, SearchResult};

/// The current search: query, results, and pagination.
///
/// `page` is 1-based. The derived page slice is
/// `results[(page - 1) * results_per_page .. page * results_per_page]`,
/// clamped so out-of-range pages and empty result sets yield an empty slice
/// rather than panicking.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// The query the results belong to (stored when a search starts, so a
    /// failed fetch leaves it pointing at the failed search).
    pub query: String,

    /// Results in API response order.
    pub results: Vec<SearchResult>,

    /// Current page, 1-based.
    pub page: usize,

    /// Fixed page size.
    pub results_per_page: usize,
}

impl SearchState {
    /// Creates an empty search with the configured page size.
    #[must_use]
    pub fn new(results_per_page: usize) -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            results_per_page,
        }
    }

    /// Number of pages the current results span. Zero when there are no
    /// results.
    #[must_use]
    pub fn num_pages(&self) -> usize {
        self.results.len().div_ceil(self.results_per_page)
    }

    /// The slice of results belonging to `page`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ladle::app::state::SearchState;
    ///
    /// let state = SearchState::new(10);
    /// assert!(state.page_slice(1).is_empty());
    /// assert!(state.page_slice(99).is_empty());
    /// ```
    #[must_use]
    pub fn page_slice(&self, page: usize) -> &[SearchResult] {
        let start = page.saturating_sub(1) * self.results_per_page;
        let end = (page * self.results_per_page).min(self.results.len());
        if start >= end {
            return &[];
        }
        &self.results[start..end]
    }
}

/// Central application state container.
///
/// Lives for the life of the session; there is no teardown. Owned by the
/// store and read by the coordinator when it drives the views.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The recipe currently open in the detail view, if any.
    pub recipe: Option<Recipe>,

    /// The current search and its pagination.
    pub search: SearchState,

    /// Bookmarked recipe snapshots, insertion order.
    pub bookmarks: Vec<Recipe>,
}

impl AppState {
    /// Creates the startup state: bookmarks from persistence, no recipe, an
    /// empty search.
    #[must_use]
    pub fn new(bookmarks: Vec<Recipe>, results_per_page: usize) -> Self {
        Self {
            recipe: None,
            search: SearchState::new(results_per_page),
            bookmarks,
        }
    }

    /// Whether a recipe id is in the bookmark collection.
    #[must_use]
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|bookmark| bookmark.id == id)
    }
}
