//! Concrete view components for the Culina recipe UI.
//!
//! Each component pairs a markup generator with the generic view base from
//! `culina-core`: the full recipe display, the preview item, the results and
//! bookmarks lists (composites over the preview), and the pagination
//! controls.

pub mod format;
pub mod pagination;
pub mod preview;
pub mod recipe;
pub mod results;

pub use format::{escape, format_quantity};
pub use pagination::{pagination_view, PaginationMarkup, PaginationView};
pub use preview::{ActiveRecipe, PreviewMarkup};
pub use recipe::{recipe_view, RecipeMarkup, RecipeView, RECIPE_ERROR};
pub use results::{
    bookmarks_view, results_view, BookmarksView, PreviewListMarkup, ResultsView, BOOKMARKS_ERROR,
    RESULTS_ERROR,
};
