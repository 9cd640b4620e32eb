//! Storage record models for the persistence layer.
//!
//! This module defines the raw record types written to the bookmark file.
//! These are separate from domain models to keep a clear boundary between the
//! stored representation and business logic: a [`BookmarkRecord`] is a recipe
//! snapshot plus storage-only metadata.

use crate::domain::{Ingredient, Recipe};
use serde::{Deserialize, Serialize};

/// A bookmarked recipe snapshot as persisted on disk.
///
/// Unlike the domain [`Recipe`], this record carries the `bookmarked_at`
/// timestamp and omits the derived `bookmarked` flag, since everything in the file
/// is a bookmark by definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
    pub key: Option<String>,

    /// Unix timestamp of when the bookmark was added.
    pub bookmarked_at: i64,
}

impl BookmarkRecord {
    /// Snapshots a recipe into a storage record, stamping the current time.
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            source_url: recipe.source_url.clone(),
            image_url: recipe.image_url.clone(),
            servings: recipe.servings,
            cooking_time: recipe.cooking_time,
            ingredients: recipe.ingredients.clone(),
            key: recipe.key.clone(),
            bookmarked_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Restores the domain recipe from a stored record.
    ///
    /// Records come out of the bookmark file, so the restored recipe is
    /// flagged as bookmarked.
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
            bookmarked: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_recipe_fields() {
        let recipe = Recipe {
            id: "abc123".to_string(),
            title: "Soup".to_string(),
            publisher: "Test Kitchen".to_string(),
            source_url: "https://example.com/soup".to_string(),
            image_url: "https://example.com/soup.jpg".to_string(),
            servings: 2,
            cooking_time: 45,
            ingredients: vec![Ingredient {
                quantity: Some(1.5),
                unit: "l".to_string(),
                description: "stock".to_string(),
            }],
            key: Some("owner-key".to_string()),
            bookmarked: false,
        };

        let restored = BookmarkRecord::from_recipe(&recipe).into_recipe();
        assert_eq!(restored.id, recipe.id);
        assert_eq!(restored.ingredients, recipe.ingredients);
        assert_eq!(restored.key, recipe.key);
        assert!(restored.bookmarked);
    }
}
