//! Preview item: one search result or bookmark entry.

use std::cell::RefCell;
use std::rc::Rc;

use culina_core::{Fragment, MarkupGenerator, ICONS};
use culina_model::RecipePreview;

use crate::format::escape;

/// Shared handle to the id of the recipe currently being shown.
///
/// The preview generator highlights the matching item. The handle is shared
/// between the orchestration layer, which sets it on navigation, and the
/// generators that read it while producing markup.
#[derive(Debug, Clone, Default)]
pub struct ActiveRecipe(Rc<RefCell<Option<String>>>);

impl ActiveRecipe {
    /// Create a handle with no active recipe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active recipe id (or clear it with `None`).
    pub fn set(&self, id: Option<&str>) {
        *self.0.borrow_mut() = id.map(ToString::to_string);
    }

    /// The current active recipe id.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

/// Markup generator for one preview list item.
#[derive(Debug, Clone)]
pub struct PreviewMarkup {
    active: ActiveRecipe,
}

impl PreviewMarkup {
    /// Create a generator highlighting against the given active-recipe
    /// handle.
    #[must_use]
    pub fn new(active: ActiveRecipe) -> Self {
        Self { active }
    }
}

impl MarkupGenerator<RecipePreview> for PreviewMarkup {
    fn generate(&self, data: &RecipePreview) -> Fragment {
        let active = self.active.get().as_deref() == Some(data.id.as_str());
        let link_class = if active {
            "preview__link preview__link--active"
        } else {
            "preview__link"
        };
        let generated_class = if data.key.is_some() {
            "preview__user-generated"
        } else {
            "preview__user-generated hidden"
        };
        Fragment::new(format!(
            "<li class=\"preview\">\
             <a class=\"{link_class}\" href=\"#{id}\">\
             <figure class=\"preview__fig\"><img src=\"{image}\" alt=\"{title}\"></figure>\
             <div class=\"preview__data\">\
             <h4 class=\"preview__title\">{title}</h4>\
             <p class=\"preview__publisher\">{publisher}</p>\
             <div class=\"{generated_class}\"><svg><use href=\"{ICONS}#icon-user\"></use></svg></div>\
             </div></a></li>",
            id = escape(&data.id),
            image = escape(&data.image),
            title = escape(&data.title),
            publisher = escape(&data.publisher),
        ))
    }
}
