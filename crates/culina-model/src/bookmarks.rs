//! Bookmark persistence seam.
//!
//! The real application persists bookmarks to browser local storage; that
//! collaborator is excluded and appears only as the [`BookmarkStore`] trait.
//! [`MemoryStore`] keeps the serialized JSON in memory, which is enough to
//! exercise the round trip.

use std::cell::RefCell;

use crate::error::ModelError;
use crate::recipe::Recipe;

/// Durable storage for the bookmark list.
pub trait BookmarkStore {
    /// Load all persisted bookmarks; an empty list when nothing was saved.
    fn load(&self) -> Result<Vec<Recipe>, ModelError>;

    /// Persist the full bookmark list.
    fn save(&self, bookmarks: &[Recipe]) -> Result<(), ModelError>;
}

/// In-memory store holding the serialized JSON payload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw serialized payload, if anything was saved.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl BookmarkStore for MemoryStore {
    fn load(&self) -> Result<Vec<Recipe>, ModelError> {
        match &*self.payload.borrow() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, bookmarks: &[Recipe]) -> Result<(), ModelError> {
        let json = serde_json::to_string(bookmarks)?;
        *self.payload.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Ingredient, Recipe};

    fn recipe(id: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: "T".to_string(),
            publisher: "P".to_string(),
            source_url: String::new(),
            image: String::new(),
            servings: 2,
            cooking_time: 10,
            ingredients: vec![Ingredient {
                quantity: Some(1.0),
                unit: "g".to_string(),
                description: "x".to_string(),
            }],
            bookmarked: true,
            key: None,
        }
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = MemoryStore::new();
        let bookmarks = vec![recipe("a"), recipe("b")];
        store.save(&bookmarks).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, bookmarks);
    }

    #[test]
    fn test_save_overwrites_previous_payload() {
        let store = MemoryStore::new();
        store.save(&[recipe("a")]).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_payload_is_a_storage_error() {
        let store = MemoryStore::new();
        *store.payload.borrow_mut() = Some("not json".to_string());
        assert!(matches!(store.load(), Err(ModelError::Storage(_))));
    }
}
