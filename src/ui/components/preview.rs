//! Shared preview-item template.
//!
//! Search results and the bookmark list render the same compact preview row;
//! both views delegate here instead of duplicating the markup.

use crate::ui::node::Node;

/// Builds one preview list item.
///
/// The item linked to the currently open recipe gets the active modifier on
/// its link; user-submitted recipes show the ownership marker.
#[must_use]
pub fn preview_item(
    id: &str,
    title: &str,
    publisher: &str,
    image_url: &str,
    user_submitted: bool,
    active: bool,
) -> Node {
    let link_class = if active {
        "preview__link preview__link--active"
    } else {
        "preview__link"
    };
    let marker_class = if user_submitted {
        "preview__user-generated"
    } else {
        "preview__user-generated hidden"
    };

    Node::new("li").attr("class", "preview").child(
        Node::new("a")
            .attr("class", link_class)
            .attr("href", format!("#{id}"))
            .child(
                Node::new("figure")
                    .attr("class", "preview__fig")
                    .child(Node::new("img").attr("src", image_url).attr("alt", title)),
            )
            .child(
                Node::new("div")
                    .attr("class", "preview__data")
                    .child(Node::new("h4").attr("class", "preview__title").text(title))
                    .child(
                        Node::new("p")
                            .attr("class", "preview__publisher")
                            .text(publisher),
                    )
                    .child(
                        Node::new("div").attr("class", marker_class).child(
                            Node::new("svg")
                                .child(Node::new("use").attr("href", "icons.svg#icon-user")),
                        ),
                    ),
            ),
    )
}
