//! Application state: the current recipe, the current search, and bookmarks.

use crate::bookmarks::BookmarkStore;
use crate::error::ModelError;
use crate::recipe::Recipe;
use crate::search::SearchState;

/// The whole of the orchestration layer's mutable state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Recipe currently shown, if any.
    pub recipe: Option<Recipe>,
    /// Current search.
    pub search: SearchState,
    /// Bookmarked recipes, in bookmarking order.
    pub bookmarks: Vec<Recipe>,
}

impl AppState {
    /// Create empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate bookmarks from storage on startup.
    ///
    /// # Errors
    ///
    /// Propagates [`ModelError::Storage`] from a corrupt payload.
    pub fn init(&mut self, store: &dyn BookmarkStore) -> Result<(), ModelError> {
        self.bookmarks = store.load()?;
        Ok(())
    }

    /// Install a freshly loaded recipe as current, flagging it bookmarked if
    /// it already is.
    pub fn set_recipe(&mut self, mut recipe: Recipe) {
        recipe.bookmarked = self.bookmarks.iter().any(|b| b.id == recipe.id);
        self.recipe = Some(recipe);
    }

    /// Is the recipe with this id bookmarked?
    #[must_use]
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    /// Add a bookmark and persist the list. The current recipe's flag is
    /// kept in sync.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the store.
    pub fn add_bookmark(
        &mut self,
        recipe: Recipe,
        store: &dyn BookmarkStore,
    ) -> Result<(), ModelError> {
        let id = recipe.id.clone();
        self.bookmarks.push(recipe);
        if let Some(current) = self.recipe.as_mut() {
            if current.id == id {
                current.bookmarked = true;
            }
        }
        store.save(&self.bookmarks)
    }

    /// Remove a bookmark by id (a miss is a no-op) and persist the list.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the store.
    pub fn remove_bookmark(
        &mut self,
        id: &str,
        store: &dyn BookmarkStore,
    ) -> Result<(), ModelError> {
        let Some(index) = self.bookmarks.iter().position(|b| b.id == id) else {
            return Ok(());
        };
        self.bookmarks.remove(index);
        if let Some(current) = self.recipe.as_mut() {
            if current.id == id {
                current.bookmarked = false;
            }
        }
        store.save(&self.bookmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::MemoryStore;
    use crate::recipe::Ingredient;

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            publisher: "P".to_string(),
            source_url: String::new(),
            image: String::new(),
            servings: 2,
            cooking_time: 10,
            ingredients: vec![Ingredient {
                quantity: Some(2.0),
                unit: "g".to_string(),
                description: "x".to_string(),
            }],
            bookmarked: false,
            key: None,
        }
    }

    #[test]
    fn test_set_recipe_marks_existing_bookmark() {
        let store = MemoryStore::new();
        let mut state = AppState::new();
        state.add_bookmark(recipe("a"), &store).unwrap();

        state.set_recipe(recipe("a"));
        assert!(state.recipe.as_ref().is_some_and(|r| r.bookmarked));

        state.set_recipe(recipe("b"));
        assert!(state.recipe.as_ref().is_some_and(|r| !r.bookmarked));
    }

    #[test]
    fn test_add_bookmark_flags_current_recipe_and_persists() {
        let store = MemoryStore::new();
        let mut state = AppState::new();
        state.set_recipe(recipe("a"));

        state.add_bookmark(recipe("a"), &store).unwrap();

        assert!(state.recipe.as_ref().is_some_and(|r| r.bookmarked));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_bookmark_unflags_current_recipe() {
        let store = MemoryStore::new();
        let mut state = AppState::new();
        state.set_recipe(recipe("a"));
        state.add_bookmark(recipe("a"), &store).unwrap();

        state.remove_bookmark("a", &store).unwrap();

        assert!(state.bookmarks.is_empty());
        assert!(state.recipe.as_ref().is_some_and(|r| !r.bookmarked));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_remove_missing_bookmark_is_noop() {
        let store = MemoryStore::new();
        let mut state = AppState::new();
        state.add_bookmark(recipe("a"), &store).unwrap();

        state.remove_bookmark("zzz", &store).unwrap();
        assert_eq!(state.bookmarks.len(), 1);
    }

    #[test]
    fn test_init_restores_persisted_bookmarks() {
        let store = MemoryStore::new();
        {
            let mut state = AppState::new();
            state.add_bookmark(recipe("a"), &store).unwrap();
            state.add_bookmark(recipe("b"), &store).unwrap();
        }

        let mut fresh = AppState::new();
        fresh.init(&store).unwrap();
        assert_eq!(fresh.bookmarks.len(), 2);
        assert!(fresh.is_bookmarked("b"));
    }
}
