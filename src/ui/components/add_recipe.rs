//! Recipe submission form renderer.
//!
//! Renders the upload form and its transient states (spinner while posting,
//! success message, error panel), and tracks whether the form modal is open.
//! The coordinator toggles the modal closed again shortly after a successful
//! upload.

use crate::ui::node::Node;
use crate::ui::view::{Region, View};

/// Number of ingredient rows offered by the form.
const INGREDIENT_ROWS: usize = 6;

/// Renders the recipe submission form.
pub struct AddRecipeView {
    region: Region,
    window_open: bool,
}

impl AddRecipeView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            region: Region::new("upload"),
            window_open: false,
        }
    }

    /// Whether the form modal is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.window_open
    }

    /// Toggles the form modal open or closed.
    ///
    /// Opening re-renders the blank form so a previous success message or
    /// error panel does not linger.
    pub fn toggle_window(&mut self) {
        self.window_open = !self.window_open;
        if self.window_open {
            self.render_full(&());
        }
    }
}

impl Default for AddRecipeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for AddRecipeView {
    type Data = ();

    fn region(&self) -> &Region {
        &self.region
    }

    fn region_mut(&mut self) -> &mut Region {
        &mut self.region
    }

    fn template(&self, _data: &()) -> Node {
        let data_fields = [
            ("title", "Title"),
            ("source_url", "URL"),
            ("image_url", "Image URL"),
            ("publisher", "Publisher"),
            ("cooking_time", "Prep time"),
            ("servings", "Servings"),
        ];

        Node::new("form")
            .attr("class", "upload")
            .child(
                Node::new("div")
                    .attr("class", "upload__column")
                    .child(
                        Node::new("h3")
                            .attr("class", "upload__heading")
                            .text("Recipe data"),
                    )
                    .children(data_fields.iter().flat_map(|(name, label)| {
                        [
                            Node::new("label").text(*label),
                            Node::new("input")
                                .attr("name", *name)
                                .attr("required", "required"),
                        ]
                    })),
            )
            .child(
                Node::new("div")
                    .attr("class", "upload__column")
                    .child(
                        Node::new("h3")
                            .attr("class", "upload__heading")
                            .text("Ingredients"),
                    )
                    .children((1..=INGREDIENT_ROWS).flat_map(|n| {
                        [
                            Node::new("label").text(format!("Ingredient {n}")),
                            Node::new("input")
                                .attr("name", format!("ingredient-{n}"))
                                .attr("placeholder", "Format: 'Quantity,Unit,Description'"),
                        ]
                    })),
            )
            .child(
                Node::new("button")
                    .attr("class", "btn upload__btn")
                    .child(Node::new("span").text("Upload")),
            )
    }

    fn success_message(&self) -> &str {
        "Recipe was successfully uploaded :)"
    }
}
