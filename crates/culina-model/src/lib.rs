//! Domain layer for the Culina recipe UI.
//!
//! Entities ([`Recipe`], [`RecipePreview`], [`Ingredient`]), application
//! state ([`AppState`], [`SearchState`]), and the seams to the excluded
//! collaborators: the recipe catalog ([`CatalogSource`]) and bookmark
//! persistence ([`BookmarkStore`]).

pub mod bookmarks;
pub mod catalog;
pub mod config;
mod error;
pub mod recipe;
pub mod search;
pub mod state;
pub mod upload;

pub use bookmarks::{BookmarkStore, MemoryStore};
pub use catalog::{recipe_from_payload, ApiRecipe, CatalogSource, InMemoryCatalog};
pub use error::ModelError;
pub use recipe::{Ingredient, Recipe, RecipePreview};
pub use search::SearchState;
pub use state::AppState;
pub use upload::{parse_recipe_form, RecipeDraft};
