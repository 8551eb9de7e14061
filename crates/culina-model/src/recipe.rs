//! Recipe entities and servings scaling.

use culina_core::Renderable;
use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Quantity; `None` for "to taste" style lines.
    pub quantity: Option<f64>,
    /// Unit of measure (may be empty).
    pub unit: String,
    /// Free-text description.
    pub description: String,
}

/// A full recipe as held in application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Publishing site or author.
    pub publisher: String,
    /// Link to the full directions.
    pub source_url: String,
    /// Image URL.
    pub image: String,
    /// Servings the ingredient quantities are scaled for.
    pub servings: u32,
    /// Cooking time in minutes.
    pub cooking_time: u32,
    /// Ingredient lines.
    pub ingredients: Vec<Ingredient>,
    /// Whether the recipe is currently bookmarked.
    #[serde(default)]
    pub bookmarked: bool,
    /// API key marker for user-authored recipes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Recipe {
    /// Rescale every ingredient quantity proportionally to a new servings
    /// count. `None` quantities are left alone.
    pub fn scale_servings(&mut self, new_servings: u32) {
        let old_servings = self.servings;
        if old_servings == 0 || new_servings == 0 {
            return;
        }
        for ingredient in &mut self.ingredients {
            if let Some(quantity) = ingredient.quantity.as_mut() {
                *quantity = *quantity * f64::from(new_servings) / f64::from(old_servings);
            }
        }
        self.servings = new_servings;
    }

    /// The preview (search-result / bookmark entry) projection of this
    /// recipe.
    #[must_use]
    pub fn preview(&self) -> RecipePreview {
        RecipePreview {
            id: self.id.clone(),
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            image: self.image.clone(),
            key: self.key.clone(),
        }
    }
}

impl Renderable for Recipe {
    // An unset record (no id) counts as absent.
    fn is_absent(&self) -> bool {
        self.id.is_empty()
    }
}

/// The compact projection shown in result and bookmark lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePreview {
    /// Catalog id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Publishing site or author.
    pub publisher: String,
    /// Image URL.
    pub image: String,
    /// API key marker for user-authored recipes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Renderable for RecipePreview {
    fn is_absent(&self) -> bool {
        self.id.is_empty()
    }
}
