//! Search results renderer.

use crate::domain::SearchResult;
use crate::ui::components::preview::preview_item;
use crate::ui::node::Node;
use crate::ui::view::{Region, View};

/// Renders the current page of search results as preview items.
///
/// Tracks the id of the currently open recipe so patch updates can move the
/// active highlight without re-rendering the list.
pub struct ResultsView {
    region: Region,
    active_id: Option<String>,
}

impl ResultsView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            region: Region::new("results"),
            active_id: None,
        }
    }

    /// Sets which recipe id should carry the active highlight.
    pub fn set_active(&mut self, id: Option<String>) {
        self.active_id = id;
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ResultsView {
    type Data = [SearchResult];

    fn region(&self) -> &Region {
        &self.region
    }

    fn region_mut(&mut self) -> &mut Region {
        &mut self.region
    }

    fn template(&self, data: &[SearchResult]) -> Node {
        Node::new("ul").attr("class", "results").children(data.iter().map(|result| {
            preview_item(
                &result.id,
                &result.title,
                &result.publisher,
                &result.image_url,
                result.key.is_some(),
                self.active_id.as_deref() == Some(result.id.as_str()),
            )
        }))
    }

    fn is_empty(&self, data: &[SearchResult]) -> bool {
        data.is_empty()
    }

    fn error_message(&self) -> &str {
        "No recipes found for your query! Please try again ;)"
    }
}
