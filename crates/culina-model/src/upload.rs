//! Parsing and validation of the add-recipe form.
//!
//! The form arrives as flat name/value pairs. Ingredient fields are named
//! `ingredient-1`, `ingredient-2`, … and hold `quantity,unit,description`
//! triples; empty ingredient fields are skipped.

use crate::catalog::ApiRecipe;
use crate::error::ModelError;
use crate::recipe::Ingredient;

/// A validated user-authored recipe, ready for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    /// Display title.
    pub title: String,
    /// Link to the full directions.
    pub source_url: String,
    /// Image URL.
    pub image: String,
    /// Publishing site or author.
    pub publisher: String,
    /// Cooking time in minutes.
    pub cooking_time: u32,
    /// Servings count.
    pub servings: u32,
    /// Parsed ingredient lines.
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDraft {
    /// The wire shape for submission to the catalog.
    #[must_use]
    pub fn to_payload(&self) -> ApiRecipe {
        ApiRecipe {
            id: None,
            title: self.title.clone(),
            publisher: self.publisher.clone(),
            source_url: self.source_url.clone(),
            image_url: self.image.clone(),
            servings: self.servings,
            cooking_time: self.cooking_time,
            ingredients: self.ingredients.clone(),
            key: None,
        }
    }
}

/// Parse and validate the raw form fields into a [`RecipeDraft`].
///
/// # Errors
///
/// [`ModelError::InvalidIngredientFormat`] when an ingredient field does not
/// split into exactly three comma-separated parts or its quantity is not
/// numeric.
pub fn parse_recipe_form(fields: &[(String, String)]) -> Result<RecipeDraft, ModelError> {
    let ingredients = fields
        .iter()
        .filter(|(name, value)| name.starts_with("ingredient") && !value.is_empty())
        .map(|(_, value)| parse_ingredient(value))
        .collect::<Result<Vec<_>, _>>()?;

    let get = |name: &str| {
        fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };

    Ok(RecipeDraft {
        title: get("title"),
        source_url: get("sourceUrl"),
        image: get("image"),
        publisher: get("publisher"),
        cooking_time: get("cookingTime").parse().unwrap_or(0),
        servings: get("servings").parse().unwrap_or(0),
        ingredients,
    })
}

fn parse_ingredient(raw: &str) -> Result<Ingredient, ModelError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ModelError::InvalidIngredientFormat(raw.to_string()));
    }
    let quantity = if parts[0].is_empty() {
        None
    } else {
        Some(
            parts[0]
                .parse::<f64>()
                .map_err(|_| ModelError::InvalidIngredientFormat(raw.to_string()))?,
        )
    };
    Ok(Ingredient {
        quantity,
        unit: parts[1].to_string(),
        description: parts[2].to_string(),
    })
}
