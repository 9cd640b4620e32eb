//! Commands representing user intents.
//!
//! This module defines the [`Command`] type, the typed equivalent of the user
//! interactions the UI surfaces: opening a recipe, searching, paging through
//! results, adjusting servings, bookmarking, and managing submissions. The
//! runtime shim translates raw input into commands; the coordinator consumes
//! them, calls state-store operations, and forwards results to the renderers.

/// A user intent to be dispatched by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Opens the recipe with the given id in the detail view.
    ///
    /// Equivalent of navigating to a `#<id>` fragment: the coordinator stores
    /// the id as the current location before loading.
    ShowRecipe {
        /// Identifier of the recipe to load.
        id: String,
    },

    /// Runs a search and shows the first page of results.
    Search {
        /// The search term sent to the API.
        query: String,
    },

    /// Jumps to a page of the current search results.
    Paginate {
        /// Target page, 1-based.
        page: usize,
    },

    /// Rescales the open recipe to a new serving count.
    ///
    /// Non-positive counts are rejected before they reach the store.
    SetServings {
        /// The new serving count.
        servings: u32,
    },

    /// Bookmarks the open recipe, or removes its bookmark if it has one.
    ToggleBookmark,

    /// Opens or closes the recipe submission form.
    ToggleRecipeForm,

    /// Submits a new recipe from flat form entries.
    ///
    /// Keys named `ingredient-N` carry comma-joined ingredient triples; the
    /// remaining keys are the scalar recipe fields.
    Upload {
        /// Form entries as name/value pairs.
        entries: Vec<(String, String)>,
    },

    /// Deletes the open recipe (user-submitted recipes only).
    Delete,

    /// Ends the session.
    Quit,
}
