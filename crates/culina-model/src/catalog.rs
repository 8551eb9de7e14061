//! Catalog access: API payload mapping and the network-collaborator seam.
//!
//! The actual transport (fetch, timeout race) is an excluded collaborator;
//! it appears here only as the [`CatalogSource`] trait. What does belong here
//! is the wire shape: the API wraps a recipe in a `data.recipe` envelope with
//! snake_case fields, which get normalized into [`Recipe`] on the way in and
//! denormalized on upload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::recipe::{Ingredient, Recipe, RecipePreview};

/// Envelope around a single recipe payload: `{ "data": { "recipe": … } }`.
#[derive(Debug, Deserialize)]
pub struct RecipeEnvelope {
    /// Payload body.
    pub data: RecipeData,
}

/// Inner payload of [`RecipeEnvelope`].
#[derive(Debug, Deserialize)]
pub struct RecipeData {
    /// The recipe in wire shape.
    pub recipe: ApiRecipe,
}

/// A recipe as the catalog API sends and receives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRecipe {
    /// Catalog id (absent on upload payloads).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display title.
    pub title: String,
    /// Publishing site or author.
    pub publisher: String,
    /// Link to the full directions.
    pub source_url: String,
    /// Image URL.
    pub image_url: String,
    /// Servings count.
    pub servings: u32,
    /// Cooking time in minutes.
    pub cooking_time: u32,
    /// Ingredient lines.
    pub ingredients: Vec<Ingredient>,
    /// Present on user-authored recipes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl From<ApiRecipe> for Recipe {
    fn from(api: ApiRecipe) -> Self {
        Self {
            id: api.id.unwrap_or_default(),
            title: api.title,
            publisher: api.publisher,
            source_url: api.source_url,
            image: api.image_url,
            servings: api.servings,
            cooking_time: api.cooking_time,
            ingredients: api.ingredients,
            bookmarked: false,
            key: api.key,
        }
    }
}

/// Parse a `data.recipe` envelope into a normalized [`Recipe`].
///
/// # Errors
///
/// [`ModelError::Storage`] when the payload is not valid JSON for the
/// envelope shape.
pub fn recipe_from_payload(json: &str) -> Result<Recipe, ModelError> {
    let envelope: RecipeEnvelope = serde_json::from_str(json)?;
    Ok(envelope.data.recipe.into())
}

/// The recipe catalog, at its interface boundary. Implementations carry the
/// transport; the model layer never sees URLs or timeouts.
pub trait CatalogSource {
    /// Fetch one recipe by id.
    fn recipe(&self, id: &str) -> Result<Recipe, ModelError>;

    /// Search recipes by query, returning preview projections.
    fn search(&self, query: &str) -> Result<Vec<RecipePreview>, ModelError>;

    /// Submit a user-authored recipe; the catalog assigns it an id and
    /// returns the stored form.
    fn submit(&self, recipe: ApiRecipe) -> Result<Recipe, ModelError>;
}

/// In-memory catalog used by tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    recipes: HashMap<String, Recipe>,
    next_id: std::cell::Cell<u32>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog with a recipe.
    pub fn insert(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.id.clone(), recipe);
    }
}

impl CatalogSource for InMemoryCatalog {
    fn recipe(&self, id: &str) -> Result<Recipe, ModelError> {
        self.recipes
            .get(id)
            .cloned()
            .ok_or_else(|| ModelError::UnknownRecipe(id.to_string()))
    }

    fn search(&self, query: &str) -> Result<Vec<RecipePreview>, ModelError> {
        let query = query.to_lowercase();
        let mut results: Vec<RecipePreview> = self
            .recipes
            .values()
            .filter(|r| r.title.to_lowercase().contains(&query))
            .map(Recipe::preview)
            .collect();
        results.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(results)
    }

    fn submit(&self, recipe: ApiRecipe) -> Result<Recipe, ModelError> {
        let id = format!("user-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        let mut stored: Recipe = recipe.into();
        stored.id = id;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "data": {
            "recipe": {
                "id": "5ed6604591c37cdc054bc886",
                "title": "Pizza Margherita",
                "publisher": "The Kitchen",
                "source_url": "https://example.com/pizza",
                "image_url": "https://example.com/pizza.jpg",
                "servings": 4,
                "cooking_time": 45,
                "ingredients": [
                    { "quantity": 1, "unit": "kg", "description": "flour" },
                    { "quantity": null, "unit": "", "description": "salt" }
                ]
            }
        }
    }"#;

    #[test]
    fn test_recipe_from_payload_normalizes_fields() {
        let recipe = recipe_from_payload(PAYLOAD).unwrap();
        assert_eq!(recipe.id, "5ed6604591c37cdc054bc886");
        assert_eq!(recipe.image, "https://example.com/pizza.jpg");
        assert_eq!(recipe.cooking_time, 45);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].quantity, None);
        assert_eq!(recipe.key, None);
        assert!(!recipe.bookmarked);
    }

    #[test]
    fn test_recipe_from_payload_rejects_bad_json() {
        let err = recipe_from_payload("{\"data\":{}}").unwrap_err();
        assert!(matches!(err, ModelError::Storage(_)));
    }

    #[test]
    fn test_in_memory_catalog_fetch_and_miss() {
        let mut catalog = InMemoryCatalog::new();
        let recipe = recipe_from_payload(PAYLOAD).unwrap();
        catalog.insert(recipe.clone());

        assert_eq!(catalog.recipe(&recipe.id).unwrap().title, recipe.title);
        assert!(matches!(
            catalog.recipe("missing"),
            Err(ModelError::UnknownRecipe(id)) if id == "missing"
        ));
    }

    #[test]
    fn test_in_memory_catalog_search_is_case_insensitive() {
        let mut catalog = InMemoryCatalog::new();
        catalog.insert(recipe_from_payload(PAYLOAD).unwrap());

        let hits = catalog.search("pizza").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Pizza Margherita");
        assert!(catalog.search("sushi").unwrap().is_empty());
    }

    #[test]
    fn test_submit_assigns_id() {
        let catalog = InMemoryCatalog::new();
        let api = ApiRecipe {
            id: None,
            title: "Toast".to_string(),
            publisher: "Me".to_string(),
            source_url: "https://example.com".to_string(),
            image_url: "https://example.com/t.jpg".to_string(),
            servings: 1,
            cooking_time: 5,
            ingredients: vec![],
            key: Some("secret".to_string()),
        };
        let stored = catalog.submit(api).unwrap();
        assert!(stored.id.starts_with("user-"));
        assert_eq!(stored.key.as_deref(), Some("secret"));
    }
}
