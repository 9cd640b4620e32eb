//! Per-region renderers.
//!
//! One renderer per UI region, each implementing the
//! [`View`](crate::ui::view::View) contract over its own
//! [`Region`](crate::ui::view::Region):
//!
//! - [`RecipeView`]: the open recipe's detail block
//! - [`ResultsView`]: the current page of search results
//! - [`PaginationView`]: previous/next page controls
//! - [`BookmarksView`]: the persisted bookmark list
//! - [`AddRecipeView`]: the submission form and its modal state
//!
//! Results and bookmarks share the preview-item template in [`preview`].

pub mod add_recipe;
pub mod bookmarks;
pub mod pagination;
pub mod preview;
pub mod recipe;
pub mod results;

pub use add_recipe::AddRecipeView;
pub use bookmarks::BookmarksView;
pub use pagination::PaginationView;
pub use recipe::RecipeView;
pub use results::ResultsView;
