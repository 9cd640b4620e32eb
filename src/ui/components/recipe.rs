//! Recipe detail renderer.
//!
//! The largest template: header figure, cooking time and servings with the
//! adjustment controls, bookmark and delete controls, the ingredient list,
//! and the directions block. Servings changes are applied through patch
//! updates so only the affected numbers and button targets change.

use crate::domain::{Ingredient, Recipe};
use crate::ui::node::Node;
use crate::ui::view::{Region, View};

/// Renders the currently open recipe.
pub struct RecipeView {
    region: Region,
}

impl RecipeView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            region: Region::new("recipe"),
        }
    }
}

impl Default for RecipeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for RecipeView {
    type Data = Recipe;

    fn region(&self) -> &Region {
        &self.region
    }

    fn region_mut(&mut self) -> &mut Region {
        &mut self.region
    }

    fn template(&self, recipe: &Recipe) -> Node {
        let bookmark_icon = if recipe.bookmarked {
            "icons.svg#icon-bookmark-fill"
        } else {
            "icons.svg#icon-bookmark"
        };
        let owned_class = |base: &str| {
            if recipe.is_user_submitted() {
                base.to_string()
            } else {
                format!("{base} hidden")
            }
        };

        Node::new("div")
            .attr("class", "recipe")
            .child(
                Node::new("figure")
                    .attr("class", "recipe__fig")
                    .child(
                        Node::new("img")
                            .attr("src", &recipe.image_url)
                            .attr("alt", &recipe.title)
                            .attr("class", "recipe__img"),
                    )
                    .child(
                        Node::new("h1")
                            .attr("class", "recipe__title")
                            .child(Node::new("span").text(&recipe.title)),
                    ),
            )
            .child(
                Node::new("div")
                    .attr("class", "recipe__details")
                    .child(
                        Node::new("div")
                            .attr("class", "recipe__info")
                            .child(
                                Node::new("svg")
                                    .attr("class", "recipe__info-icon")
                                    .child(Node::new("use").attr("href", "icons.svg#icon-clock")),
                            )
                            .child(
                                Node::new("span")
                                    .attr("class", "recipe__info-data recipe__info-data--minutes")
                                    .text(recipe.cooking_time.to_string()),
                            )
                            .child(
                                Node::new("span")
                                    .attr("class", "recipe__info-text")
                                    .text("minutes"),
                            ),
                    )
                    .child(
                        Node::new("div")
                            .attr("class", "recipe__info")
                            .child(
                                Node::new("svg")
                                    .attr("class", "recipe__info-icon")
                                    .child(Node::new("use").attr("href", "icons.svg#icon-users")),
                            )
                            .child(
                                Node::new("span")
                                    .attr("class", "recipe__info-data recipe__info-data--people")
                                    .text(recipe.servings.to_string()),
                            )
                            .child(
                                Node::new("span")
                                    .attr("class", "recipe__info-text")
                                    .text("servings"),
                            )
                            .child(
                                Node::new("div")
                                    .attr("class", "recipe__info-buttons")
                                    .child(
                                        Node::new("button")
                                            .attr("class", "btn--tiny btn--update-servings")
                                            .attr(
                                                "data-update-to",
                                                recipe.servings.saturating_sub(1).to_string(),
                                            )
                                            .child(Node::new("svg").child(
                                                Node::new("use")
                                                    .attr("href", "icons.svg#icon-minus-circle"),
                                            )),
                                    )
                                    .child(
                                        Node::new("button")
                                            .attr("class", "btn--tiny btn--update-servings")
                                            .attr(
                                                "data-update-to",
                                                (recipe.servings + 1).to_string(),
                                            )
                                            .child(Node::new("svg").child(
                                                Node::new("use")
                                                    .attr("href", "icons.svg#icon-plus-circle"),
                                            )),
                                    ),
                            ),
                    )
                    .child(
                        Node::new("div")
                            .attr("class", owned_class("recipe__user-generated"))
                            .child(
                                Node::new("svg")
                                    .child(Node::new("use").attr("href", "icons.svg#icon-user")),
                            ),
                    )
                    .child(
                        Node::new("button")
                            .attr("class", "btn--round btn--bookmark")
                            .child(
                                Node::new("svg")
                                    .child(Node::new("use").attr("href", bookmark_icon)),
                            ),
                    )
                    .child(
                        Node::new("button")
                            .attr("class", owned_class("btn--round recipe__delete"))
                            .child(
                                Node::new("svg").child(
                                    Node::new("use").attr("href", "icons.svg#icon-alert-circle"),
                                ),
                            ),
                    ),
            )
            .child(
                Node::new("div")
                    .attr("class", "recipe__ingredients")
                    .child(
                        Node::new("h2")
                            .attr("class", "heading--2")
                            .text("Recipe ingredients"),
                    )
                    .child(
                        Node::new("ul")
                            .attr("class", "recipe__ingredient-list")
                            .children(recipe.ingredients.iter().map(ingredient_item)),
                    ),
            )
            .child(
                Node::new("div")
                    .attr("class", "recipe__directions")
                    .child(
                        Node::new("h2")
                            .attr("class", "heading--2")
                            .text("How to cook it"),
                    )
                    .child(
                        Node::new("p")
                            .attr("class", "recipe__directions-text")
                            .text("This recipe was carefully designed and tested by")
                            .child(
                                Node::new("span")
                                    .attr("class", "recipe__publisher")
                                    .text(&recipe.publisher),
                            ),
                    )
                    .child(
                        Node::new("a")
                            .attr("class", "btn--small recipe__btn")
                            .attr("href", &recipe.source_url)
                            .child(Node::new("span").text("Directions")),
                    ),
            )
    }

    fn error_message(&self) -> &str {
        "We could not find that recipe. Please try another one!"
    }
}

fn ingredient_item(ingredient: &Ingredient) -> Node {
    let quantity = ingredient
        .quantity
        .map(format_quantity)
        .unwrap_or_default();

    Node::new("li")
        .attr("class", "recipe__ingredient")
        .child(
            Node::new("svg")
                .attr("class", "recipe__icon")
                .child(Node::new("use").attr("href", "icons.svg#icon-check")),
        )
        .child(
            Node::new("div")
                .attr("class", "recipe__quantity")
                .text(quantity),
        )
        .child(
            Node::new("div")
                .attr("class", "recipe__description")
                .text(&ingredient.description)
                .child(
                    Node::new("span")
                        .attr("class", "recipe__unit")
                        .text(&ingredient.unit),
                ),
        )
}

/// Formats a scaled quantity for display: whole numbers without a decimal
/// point, fractions trimmed to at most two places.
fn format_quantity(quantity: f64) -> String {
    if (quantity - quantity.round()).abs() < 1e-9 {
        format!("{}", quantity.round() as i64)
    } else {
        format!("{quantity:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
