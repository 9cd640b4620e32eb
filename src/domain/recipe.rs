//! Recipe domain model and operations.
//!
//! This module defines the core [`Recipe`] type along with its [`Ingredient`]
//! rows and the lightweight [`SearchResult`] projection used for list display.
//! Recipes scale their ingredient quantities in place when the serving count
//! changes, and ingredient rows can be parsed from the comma-joined triples
//! submitted through the recipe form.

use crate::domain::error::{LadleError, Result};
use serde::{Deserialize, Serialize};

/// A full culinary record with ingredients, servings, timing, and attribution.
///
/// # Fields
///
/// - `id`: origin-assigned identifier (the API mints ids for submissions)
/// - `key`: ownership marker, present only on user-submitted recipes
/// - `bookmarked`: derived from the bookmark collection, never sent to the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    pub key: Option<String>,
    #[serde(default)]
    pub bookmarked: bool,
}

impl Recipe {
    /// Scales every ingredient quantity to a new serving count, then updates
    /// the stored serving count.
    ///
    /// Each quantity becomes `old_quantity * new_servings / old_servings`.
    /// Ingredients without a quantity are left untouched.
    ///
    /// Callers must reject `new_servings == 0` before calling; this method does
    /// not validate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ladle::domain::{Ingredient, Recipe};
    ///
    /// let mut recipe = Recipe {
    ///     id: "5ed6604591c37cdc054bc886".to_string(),
    ///     title: "Pizza".to_string(),
    ///     publisher: "101 Cookbooks".to_string(),
    ///     source_url: "https://example.com/pizza".to_string(),
    ///     image_url: "https://example.com/pizza.jpg".to_string(),
    ///     servings: 2,
    ///     cooking_time: 60,
    ///     ingredients: vec![Ingredient {
    ///         quantity: Some(100.0),
    ///         unit: "g".to_string(),
    ///         description: "flour".to_string(),
    ///     }],
    ///     key: None,
    ///     bookmarked: false,
    /// };
    ///
    /// recipe.scale_servings(4);
    /// assert_eq!(recipe.servings, 4);
    /// assert_eq!(recipe.ingredients[0].quantity, Some(200.0));
    /// ```
    pub fn scale_servings(&mut self, new_servings: u32) {
        let old_servings = self.servings;
        for ingredient in &mut self.ingredients {
            if let Some(quantity) = ingredient.quantity {
                ingredient.quantity =
                    Some(quantity * f64::from(new_servings) / f64::from(old_servings));
            }
        }
        self.servings = new_servings;
    }

    /// Whether this recipe was submitted by the user.
    ///
    /// User-submitted recipes carry the ownership marker and are the only ones
    /// that can be deleted.
    #[must_use]
    pub fn is_user_submitted(&self) -> bool {
        self.key.is_some()
    }
}

/// One ingredient row of a recipe.
///
/// Immutable once attached to a recipe, except through
/// [`Recipe::scale_servings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Amount of the ingredient, `None` when the row has no measurable quantity
    /// (e.g. "salt to taste").
    pub quantity: Option<f64>,
    /// Unit of measurement, possibly empty.
    pub unit: String,
    /// Free-text description.
    pub description: String,
}

impl Ingredient {
    /// Parses an ingredient row from a comma-joined `"quantity,unit,description"`
    /// form entry.
    ///
    /// Fields are trimmed. An empty quantity field parses to `None`; a
    /// non-empty quantity must be a number.
    ///
    /// # Errors
    ///
    /// Returns [`LadleError::Validation`] when the entry does not split into
    /// exactly three fields, or when a non-empty quantity is not numeric.
    ///
    /// # Examples
    ///
    /// ```
    /// use ladle::domain::Ingredient;
    ///
    /// let ing = Ingredient::from_entry("2,kg,flour").unwrap();
    /// assert_eq!(ing.quantity, Some(2.0));
    /// assert_eq!(ing.unit, "kg");
    /// assert_eq!(ing.description, "flour");
    ///
    /// assert!(Ingredient::from_entry("kg,flour").is_err());
    /// ```
    pub fn from_entry(raw: &str) -> Result<Self> {
        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(LadleError::Validation(
                "Wrong ingredient format! Please use the correct format :)".to_string(),
            ));
        }

        let quantity = if fields[0].is_empty() {
            None
        } else {
            let parsed = fields[0].parse::<f64>().map_err(|_| {
                LadleError::Validation(format!("Ingredient quantity is not a number: {}", fields[0]))
            })?;
            Some(parsed)
        };

        Ok(Self {
            quantity,
            unit: fields[1].to_string(),
            description: fields[2].to_string(),
        })
    }
}

/// Lightweight projection of a [`Recipe`] for list display.
///
/// Carries just enough to render a preview item; never carries ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub key: Option<String>,
}
