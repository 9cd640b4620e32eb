//! Pagination controls renderer.

use crate::app::state::SearchState;
use crate::ui::node::Node;
use crate::ui::view::{Region, View};

/// Renders previous/next page buttons for the current search.
///
/// Page 1 of many shows only the next button, the last page only the previous
/// one, middle pages both, and a single page neither.
pub struct PaginationView {
    region: Region,
}

impl PaginationView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            region: Region::new("pagination"),
        }
    }
}

impl Default for PaginationView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PaginationView {
    type Data = SearchState;

    fn region(&self) -> &Region {
        &self.region
    }

    fn region_mut(&mut self) -> &mut Region {
        &mut self.region
    }

    fn template(&self, search: &SearchState) -> Node {
        let current = search.page;
        let num_pages = search.num_pages();
        let container = Node::new("div").attr("class", "pagination");

        if current == 1 && num_pages > 1 {
            container.child(page_button(current + 1, "next"))
        } else if current == num_pages && num_pages > 1 {
            container.child(page_button(current - 1, "prev"))
        } else if current < num_pages {
            container
                .child(page_button(current - 1, "prev"))
                .child(page_button(current + 1, "next"))
        } else {
            container
        }
    }
}

fn page_button(target: usize, direction: &str) -> Node {
    let arrow = if direction == "prev" {
        "icons.svg#icon-arrow-left"
    } else {
        "icons.svg#icon-arrow-right"
    };

    Node::new("button")
        .attr("data-goto", target.to_string())
        .attr("class", format!("btn--inline pagination__btn--{direction}"))
        .child(Node::new("span").text(format!("Page {target}")))
        .child(
            Node::new("svg")
                .attr("class", "search__icon")
                .child(Node::new("use").attr("href", arrow)),
        )
}
