//! Markup rendering layer.
//!
//! Views translate slices of application state into an abstract markup tree
//! ([`node::Node`]) and keep each UI region's current tree up to date, either
//! by full replacement or by an index-aligned diff that patches only changed
//! text and attributes ([`diff`]). The [`view::View`] trait is the shared
//! contract; [`components`] holds one renderer per region.

pub mod components;
pub mod diff;
pub mod node;
pub mod view;

pub use components::{AddRecipeView, BookmarksView, PaginationView, RecipeView, ResultsView};
pub use node::Node;
pub use view::{Region, View};
