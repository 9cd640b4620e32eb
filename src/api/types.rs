//! Wire types for the recipe API.
//!
//! This module defines the raw request and response shapes exchanged with the
//! remote recipe API. These types are separate from domain models to maintain a
//! clear boundary between the wire representation and business logic: responses
//! arrive wrapped in a `data` envelope and are mapped into [`Recipe`] /
//! [`SearchResult`] values before they touch application state.

use crate::domain::{Ingredient, Recipe, SearchResult};
use serde::{Deserialize, Serialize};

/// Envelope of a single-recipe response: `{ "data": { "recipe": { ... } } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeEnvelope {
    pub data: RecipeData,
}

/// Inner object of a single-recipe response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeData {
    pub recipe: RecipeWire,
}

/// Envelope of a search response: `{ "data": { "recipes": [ ... ] } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    pub data: SearchData,
}

/// Inner object of a search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchData {
    pub recipes: Vec<PreviewWire>,
}

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// A full recipe as the API serializes it.
///
/// The `key` field is present only on user-submitted recipes.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeWire {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub key: Option<String>,
}

impl RecipeWire {
    /// Maps the wire shape into the domain [`Recipe`].
    ///
    /// The `bookmarked` flag is derived from the bookmark collection by the
    /// state store, so it starts out `false` here.
    #[must_use]
    pub fn into_recipe(self) -> Recipe {
        Recipe {
            id: self.id,
            title: self.title,
            publisher: self.publisher,
            source_url: self.source_url,
            image_url: self.image_url,
            servings: self.servings,
            cooking_time: self.cooking_time,
            ingredients: self.ingredients,
            key: self.key,
            bookmarked: false,
        }
    }
}

/// A search hit as the API serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewWire {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default)]
    pub key: Option<String>,
}

impl PreviewWire {
    /// Maps the wire shape into the domain [`SearchResult`].
    #[must_use]
    pub fn into_search_result(self) -> SearchResult {
        SearchResult {
            id: self.id,
            title: self.title,
            publisher: self.publisher,
            image_url: self.image_url,
            key: self.key,
        }
    }
}

/// Payload of a recipe submission.
///
/// Matches the API's POST body shape; the API assigns the id and attaches the
/// ownership key in its response.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeUpload {
    pub title: String,
    pub source_url: String,
    pub image_url: String,
    pub publisher: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}
