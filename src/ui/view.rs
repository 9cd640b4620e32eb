//! Rendering contract shared by all views.
//!
//! Every UI region (recipe detail, search results, pagination, bookmark list,
//! submission form) is driven through the same capability contract: a full
//! render that replaces the region's markup, a patch update that diffs against
//! the current markup in place, and the transient states (spinner, error
//! panel, message panel). Views implement [`View`] by providing a template;
//! the render modes are provided by the trait over a shared [`Region`] and the
//! diff utility; composition instead of a base-class hierarchy.

use crate::ui::diff::{apply, diff};
use crate::ui::node::Node;

/// The mounted rendering surface for one UI region.
///
/// Stands in for the container element a view's markup is inserted into.
/// Holds the region's current markup tree so patch updates have something to
/// diff against.
#[derive(Debug, Clone)]
pub struct Region {
    name: String,
    root: Option<Node>,
}

impl Region {
    /// Creates an empty region with a container name (e.g. `"results"`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: None,
        }
    }

    /// The region's container name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the region's markup wholesale.
    pub fn set(&mut self, node: Node) {
        self.root = Some(node);
    }

    /// Removes all markup from the region.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// The current markup tree, if any.
    #[must_use]
    pub fn node(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Mutable access to the current markup tree, if any.
    pub fn node_mut(&mut self) -> Option<&mut Node> {
        self.root.as_mut()
    }

    /// Serializes the current markup, or an empty string for a cleared region.
    #[must_use]
    pub fn markup(&self) -> String {
        self.root.as_ref().map(Node::to_markup).unwrap_or_default()
    }
}

/// Capability contract of a renderer.
///
/// Implementors provide the data type, the template, and their default
/// messages; the render modes come with the trait.
pub trait View {
    /// The slice of application state this view renders.
    type Data: ?Sized;

    fn region(&self) -> &Region;

    fn region_mut(&mut self) -> &mut Region;

    /// Builds the markup tree for a data slice.
    fn template(&self, data: &Self::Data) -> Node;

    /// Whether the data counts as absent for rendering purposes.
    ///
    /// Full renders redirect empty data to the error panel.
    fn is_empty(&self, data: &Self::Data) -> bool {
        let _ = data;
        false
    }

    /// Default error panel text for this view.
    fn error_message(&self) -> &str {
        "Something went wrong. Please try again!"
    }

    /// Default message panel text for this view.
    fn success_message(&self) -> &str {
        ""
    }

    /// Replaces all markup under the region with a fresh template render.
    ///
    /// Empty or absent data is an error condition and renders the error panel
    /// instead.
    fn render_full(&mut self, data: &Self::Data) {
        if self.is_empty(data) {
            self.render_error(None);
            return;
        }
        let markup = self.template(data);
        self.region_mut().set(markup);
    }

    /// Patches the region's current markup in place to match a fresh render.
    ///
    /// Computes the new markup, diffs it node-by-node against the current
    /// markup, and applies only the changed text and attributes. Falls back to
    /// a full replacement when the region has no markup yet.
    fn render_update(&mut self, data: &Self::Data) {
        let next = self.template(data);
        let region = self.region_mut();
        if region.node().is_none() {
            region.set(next);
            return;
        }
        if let Some(current) = region.node_mut() {
            let patches = diff(current, &next);
            apply(current, &patches);
        }
    }

    /// Shows the loading indicator.
    fn render_spinner(&mut self) {
        let markup = spinner();
        self.region_mut().set(markup);
    }

    /// Shows the error panel, with the view's default message as fallback.
    fn render_error(&mut self, message: Option<&str>) {
        let text = message.unwrap_or_else(|| self.error_message()).to_string();
        self.region_mut().set(error_panel(&text));
    }

    /// Shows the message panel, with the view's default message as fallback.
    fn render_message(&mut self, message: Option<&str>) {
        let text = message.unwrap_or_else(|| self.success_message()).to_string();
        self.region_mut().set(message_panel(&text));
    }
}

/// Markup for the loading indicator.
#[must_use]
pub fn spinner() -> Node {
    Node::new("div").attr("class", "spinner").child(
        Node::new("svg").child(Node::new("use").attr("href", "icons.svg#icon-loader")),
    )
}

/// Markup for an error panel.
#[must_use]
pub fn error_panel(message: &str) -> Node {
    Node::new("div")
        .attr("class", "error")
        .child(
            Node::new("div")
                .child(Node::new("svg").child(Node::new("use").attr("href", "icons.svg#icon-alert-triangle"))),
        )
        .child(Node::new("p").text(message))
}

/// Markup for a message panel.
#[must_use]
pub fn message_panel(message: &str) -> Node {
    Node::new("div")
        .attr("class", "message")
        .child(
            Node::new("div")
                .child(Node::new("svg").child(Node::new("use").attr("href", "icons.svg#icon-smile"))),
        )
        .child(Node::new("p").text(message))
}
