//! Error types for the model layer.

use thiserror::Error;

/// Errors from catalog access, persistence, and form parsing.
#[derive(Debug, Error)]
pub enum ModelError {
    /// An ingredient field did not follow the `quantity,unit,description`
    /// format.
    #[error("wrong ingredient format, please use the correct format: `{0}`")]
    InvalidIngredientFormat(String),

    /// The catalog has no recipe with this id.
    #[error("recipe `{0}` not found")]
    UnknownRecipe(String),

    /// A bookmark payload failed to serialize or deserialize.
    #[error("bookmark storage error: {0}")]
    Storage(#[from] serde_json::Error),

    /// The catalog request failed (timeout, transport, or API error from the
    /// excluded network collaborator).
    #[error("catalog request failed: {0}")]
    Catalog(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ingredient_format_message() {
        let err = ModelError::InvalidIngredientFormat("1,cup".to_string());
        assert!(err.to_string().contains("wrong ingredient format"));
        assert!(err.to_string().contains("1,cup"));
    }

    #[test]
    fn test_unknown_recipe_message() {
        let err = ModelError::UnknownRecipe("abc123".to_string());
        assert_eq!(err.to_string(), "recipe `abc123` not found");
    }

    #[test]
    fn test_storage_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = ModelError::from(serde_err);
        assert!(err.to_string().contains("bookmark storage error"));
    }
}
