//! Result and bookmark lists: composites over the preview component.

use std::cell::RefCell;

use culina_core::{Container, Fragment, MarkupGenerator, View};
use culina_model::RecipePreview;

use crate::preview::{ActiveRecipe, PreviewMarkup};

/// Default error message for the results list.
pub const RESULTS_ERROR: &str = "No recipes found for your query! Please try again.";

/// Default error message for the bookmarks list.
pub const BOOKMARKS_ERROR: &str = "No bookmarks yet. Find a nice recipe and bookmark it :)";

/// Composite generator: concatenates preview fragments for an ordered
/// sequence of items.
///
/// The child preview view is detached and only ever produces fragments; the
/// composite's own `update` reconciles the whole concatenation as one opaque
/// tree.
#[derive(Debug)]
pub struct PreviewListMarkup {
    preview: RefCell<View<RecipePreview, PreviewMarkup>>,
}

impl PreviewListMarkup {
    /// Create a composite generator over a detached preview view.
    #[must_use]
    pub fn new(active: ActiveRecipe) -> Self {
        Self {
            preview: RefCell::new(View::detached(PreviewMarkup::new(active))),
        }
    }
}

impl MarkupGenerator<Vec<RecipePreview>> for PreviewListMarkup {
    fn generate(&self, data: &Vec<RecipePreview>) -> Fragment {
        let mut preview = self.preview.borrow_mut();
        let markup: String = data
            .iter()
            .map(|item| preview.render_fragment(item.clone()).to_string())
            .collect();
        Fragment::new(markup)
    }
}

/// The search results list.
pub type ResultsView = View<Vec<RecipePreview>, PreviewListMarkup>;

/// The bookmarks list.
pub type BookmarksView = View<Vec<RecipePreview>, PreviewListMarkup>;

/// Build the results list view on its container.
#[must_use]
pub fn results_view(container: Container, active: ActiveRecipe) -> ResultsView {
    View::new(container, PreviewListMarkup::new(active)).with_error_message(RESULTS_ERROR)
}

/// Build the bookmarks list view on its container.
#[must_use]
pub fn bookmarks_view(container: Container, active: ActiveRecipe) -> BookmarksView {
    View::new(container, PreviewListMarkup::new(active)).with_error_message(BOOKMARKS_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn previews() -> Vec<RecipePreview> {
        ["a", "b"]
            .iter()
            .map(|id| RecipePreview {
                id: (*id).to_string(),
                title: format!("Recipe {id}"),
                publisher: "Pub".to_string(),
                image: format!("{id}.jpg"),
                key: None,
            })
            .collect()
    }

    #[test]
    fn test_composite_concatenates_child_fragments() {
        let container = Container::new("div");
        let mut view = results_view(container.clone(), ActiveRecipe::new());

        view.render(previews()).unwrap();

        let markup = container.inner_markup();
        assert_eq!(markup.matches("<li class=\"preview\">").count(), 2);
        assert!(markup.contains("href=\"#a\""));
        assert!(markup.contains("href=\"#b\""));
    }

    #[test]
    fn test_empty_results_render_error_template() {
        let container = Container::new("div");
        let mut view = results_view(container.clone(), ActiveRecipe::new());

        view.render(Vec::new()).unwrap();

        assert!(container.inner_markup().contains(RESULTS_ERROR));
    }

    #[test]
    fn test_empty_bookmarks_render_their_own_message() {
        let container = Container::new("div");
        let mut view = bookmarks_view(container.clone(), ActiveRecipe::new());

        view.render(Vec::new()).unwrap();

        assert!(container.inner_markup().contains(BOOKMARKS_ERROR));
    }

    #[test]
    fn test_update_highlights_selection_in_place() {
        let container = Container::new("div");
        let active = ActiveRecipe::new();
        let mut view = results_view(container.clone(), active.clone());
        view.render(previews()).unwrap();
        let before = container.descendant_elements();

        // Selecting a recipe re-derives the same items; only one link's
        // class attribute changes.
        active.set(Some("b"));
        view.update(previews()).unwrap();

        let after = container.descendant_elements();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert!(Rc::ptr_eq(b, a));
        }
        let markup = container.inner_markup();
        assert_eq!(markup.matches("preview__link--active").count(), 1);
        assert!(markup.contains(
            "<a class=\"preview__link preview__link--active\" href=\"#b\""
        ));
    }
}
