//! The full recipe view.

use std::fmt::Write as _;

use culina_core::{Container, Fragment, MarkupGenerator, View, ICONS};
use culina_model::Recipe;

use crate::format::{escape, format_quantity};

/// Default error message for the recipe view.
pub const RECIPE_ERROR: &str = "We could not find that recipe. Please try another one!";

/// Markup generator for the full recipe display: header, servings controls,
/// ingredient list, and directions link.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeMarkup;

impl MarkupGenerator<Recipe> for RecipeMarkup {
    fn generate(&self, data: &Recipe) -> Fragment {
        let title = escape(&data.title);
        let mut markup = format!(
            "<figure class=\"recipe__fig\">\
             <img src=\"{image}\" alt=\"{title}\" class=\"recipe__img\">\
             <h1 class=\"recipe__title\"><span>{title}</span></h1>\
             </figure>",
            image = escape(&data.image),
        );

        let generated_class = if data.key.is_some() {
            "recipe__user-generated"
        } else {
            "recipe__user-generated hidden"
        };
        let bookmark_icon = if data.bookmarked {
            "icon-bookmark-fill"
        } else {
            "icon-bookmark"
        };
        let _ = write!(
            markup,
            "<div class=\"recipe__details\">\
             <div class=\"recipe__info\">\
             <svg class=\"recipe__info-icon\"><use href=\"{ICONS}#icon-clock\"></use></svg>\
             <span class=\"recipe__info-data recipe__info-data--minutes\">{minutes}</span>\
             <span class=\"recipe__info-text\">minutes</span>\
             </div>\
             <div class=\"recipe__info\">\
             <svg class=\"recipe__info-icon\"><use href=\"{ICONS}#icon-users\"></use></svg>\
             <span class=\"recipe__info-data recipe__info-data--people\">{servings}</span>\
             <span class=\"recipe__info-text\">servings</span>\
             <div class=\"recipe__info-buttons\">\
             <button class=\"btn--tiny btn--update-servings\" data-update-to=\"{fewer}\">\
             <svg><use href=\"{ICONS}#icon-minus-circle\"></use></svg></button>\
             <button class=\"btn--tiny btn--update-servings\" data-update-to=\"{more}\">\
             <svg><use href=\"{ICONS}#icon-plus-circle\"></use></svg></button>\
             </div></div>\
             <div class=\"{generated_class}\">\
             <svg><use href=\"{ICONS}#icon-user\"></use></svg></div>\
             <button class=\"btn--round btn--bookmark\">\
             <svg><use href=\"{ICONS}#{bookmark_icon}\"></use></svg></button>\
             </div>",
            minutes = data.cooking_time,
            servings = data.servings,
            fewer = data.servings.saturating_sub(1),
            more = data.servings + 1,
        );

        markup.push_str(
            "<div class=\"recipe__ingredients\">\
             <h2 class=\"heading--2\">Recipe ingredients</h2>\
             <ul class=\"recipe__ingredient-list\">",
        );
        for ingredient in &data.ingredients {
            let _ = write!(
                markup,
                "<li class=\"recipe__ingredient\">\
                 <svg class=\"recipe__icon\"><use href=\"{ICONS}#icon-check\"></use></svg>\
                 <div class=\"recipe__quantity\">{quantity}</div>\
                 <div class=\"recipe__description\">\
                 <span class=\"recipe__unit\">{unit}</span> {description}</div></li>",
                quantity = format_quantity(ingredient.quantity),
                unit = escape(&ingredient.unit),
                description = escape(&ingredient.description),
            );
        }
        markup.push_str("</ul></div>");

        let _ = write!(
            markup,
            "<div class=\"recipe__directions\">\
             <h2 class=\"heading--2\">How to cook it</h2>\
             <p class=\"recipe__directions-text\">This recipe was carefully designed and tested by \
             <span class=\"recipe__publisher\">{publisher}</span>. \
             Please check out directions at their website.</p>\
             <a class=\"btn--small recipe__btn\" href=\"{source}\">\
             <span>Directions</span>\
             <svg class=\"search__icon\"><use href=\"{ICONS}#icon-arrow-right\"></use></svg>\
             </a></div>",
            publisher = escape(&data.publisher),
            source = escape(&data.source_url),
        );

        Fragment::new(markup)
    }
}

/// The recipe view.
pub type RecipeView = View<Recipe, RecipeMarkup>;

/// Build the recipe view on its container.
#[must_use]
pub fn recipe_view(container: Container) -> RecipeView {
    View::new(container, RecipeMarkup).with_error_message(RECIPE_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use culina_model::Ingredient;
    use std::rc::Rc;

    fn recipe() -> Recipe {
        Recipe {
            id: "abc123".to_string(),
            title: "Pizza Margherita".to_string(),
            publisher: "The Kitchen".to_string(),
            source_url: "https://example.com/pizza".to_string(),
            image: "pizza.jpg".to_string(),
            servings: 4,
            cooking_time: 45,
            ingredients: vec![
                Ingredient {
                    quantity: Some(8.0),
                    unit: "dl".to_string(),
                    description: "tomato sauce".to_string(),
                },
                Ingredient {
                    quantity: None,
                    unit: String::new(),
                    description: "basil".to_string(),
                },
            ],
            bookmarked: false,
            key: None,
        }
    }

    #[test]
    fn test_markup_carries_servings_controls() {
        let markup = RecipeMarkup.generate(&recipe());
        assert!(markup.as_str().contains("data-update-to=\"3\""));
        assert!(markup.as_str().contains("data-update-to=\"5\""));
        assert!(markup
            .as_str()
            .contains("recipe__info-data--people\">4</span>"));
    }

    #[test]
    fn test_markup_lists_each_ingredient() {
        let markup = RecipeMarkup.generate(&recipe());
        assert_eq!(markup.as_str().matches("recipe__ingredient\"").count(), 2);
        assert!(markup.as_str().contains("<div class=\"recipe__quantity\">8</div>"));
        assert!(markup.as_str().contains("<div class=\"recipe__quantity\"></div>"));
        assert!(markup.as_str().contains("basil"));
    }

    #[test]
    fn test_bookmark_icon_follows_state() {
        let mut data = recipe();
        let plain = RecipeMarkup.generate(&data);
        assert!(plain.as_str().contains("#icon-bookmark\""));

        data.bookmarked = true;
        let filled = RecipeMarkup.generate(&data);
        assert!(filled.as_str().contains("#icon-bookmark-fill\""));
    }

    #[test]
    fn test_render_then_serialize_matches_fragment() {
        let container = Container::new("div");
        let mut view = recipe_view(container.clone());
        let data = recipe();
        let expected = RecipeMarkup.generate(&data);

        view.render(data).unwrap();
        assert_eq!(container.inner_markup(), expected.as_str());
    }

    #[test]
    fn test_absent_recipe_renders_configured_error() {
        let container = Container::new("div");
        let mut view = recipe_view(container.clone());
        let mut data = recipe();
        data.id.clear();

        view.render(data).unwrap();
        assert!(container.inner_markup().contains(RECIPE_ERROR));
    }

    #[test]
    fn test_servings_update_patches_quantities_in_place() {
        let container = Container::new("div");
        let mut view = recipe_view(container.clone());
        let mut data = recipe();
        view.render(data.clone()).unwrap();
        let before = container.descendant_elements();

        data.scale_servings(8);
        view.update(data).unwrap();

        let after = container.descendant_elements();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert!(Rc::ptr_eq(b, a));
        }
        let markup = container.inner_markup();
        assert!(markup.contains("<div class=\"recipe__quantity\">16</div>"));
        assert!(markup.contains("recipe__info-data--people\">8</span>"));
        assert!(markup.contains("data-update-to=\"7\""));
        assert!(markup.contains("data-update-to=\"9\""));
    }
}
