//! Pagination controls for the results list.

use culina_core::{Container, Fragment, MarkupGenerator, View, ICONS};
use culina_model::SearchState;

/// Which pagination button to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Prev,
    Next,
}

fn button(direction: Direction, current_page: usize) -> String {
    match direction {
        Direction::Prev => {
            let target = current_page - 1;
            format!(
                "<button data-goto=\"{target}\" class=\"btn--inline pagination__btn--prev\">\
                 <svg class=\"search__icon\"><use href=\"{ICONS}#icon-arrow-left\"></use></svg>\
                 <span>Page {target}</span></button>"
            )
        }
        Direction::Next => {
            let target = current_page + 1;
            format!(
                "<button data-goto=\"{target}\" class=\"btn--inline pagination__btn--next\">\
                 <span>Page {target}</span>\
                 <svg class=\"search__icon\"><use href=\"{ICONS}#icon-arrow-right\"></use></svg>\
                 </button>"
            )
        }
    }
}

/// Markup generator for the prev/next pagination buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationMarkup;

impl MarkupGenerator<SearchState> for PaginationMarkup {
    fn generate(&self, data: &SearchState) -> Fragment {
        let page = data.page;
        let num_pages = data.num_pages();

        // First page with more to come: only "next".
        if page == 1 && num_pages > 1 {
            return Fragment::new(button(Direction::Next, page));
        }
        // Last page of several: only "prev".
        if page == num_pages && num_pages > 1 {
            return Fragment::new(button(Direction::Prev, page));
        }
        // Somewhere in the middle: both.
        if page < num_pages {
            let mut markup = button(Direction::Prev, page);
            markup.push_str(&button(Direction::Next, page));
            return Fragment::new(markup);
        }
        // Single page: nothing to paginate.
        Fragment::default()
    }
}

/// The pagination view.
pub type PaginationView = View<SearchState, PaginationMarkup>;

/// Build the pagination view on its container.
#[must_use]
pub fn pagination_view(container: Container) -> PaginationView {
    View::new(container, PaginationMarkup)
}
