//! Bookmark list renderer.

use crate::domain::Recipe;
use crate::ui::components::preview::preview_item;
use crate::ui::node::Node;
use crate::ui::view::{Region, View};

/// Renders the bookmark collection as preview items.
///
/// Bookmarks are full recipe snapshots, but the list shows the same preview
/// row as search results.
pub struct BookmarksView {
    region: Region,
    active_id: Option<String>,
}

impl BookmarksView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            region: Region::new("bookmarks__list"),
            active_id: None,
        }
    }

    /// Sets which recipe id should carry the active highlight.
    pub fn set_active(&mut self, id: Option<String>) {
        self.active_id = id;
    }
}

impl Default for BookmarksView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for BookmarksView {
    type Data = [Recipe];

    fn region(&self) -> &Region {
        &self.region
    }

    fn region_mut(&mut self) -> &mut Region {
        &mut self.region
    }

    fn template(&self, data: &[Recipe]) -> Node {
        Node::new("ul").attr("class", "bookmarks__list").children(data.iter().map(|bookmark| {
            preview_item(
                &bookmark.id,
                &bookmark.title,
                &bookmark.publisher,
                &bookmark.image_url,
                bookmark.key.is_some(),
                self.active_id.as_deref() == Some(bookmark.id.as_str()),
            )
        }))
    }

    fn is_empty(&self, data: &[Recipe]) -> bool {
        data.is_empty()
    }

    fn error_message(&self) -> &str {
        "No bookmarks yet. Find a nice recipe and bookmark it ;)"
    }
}
