//! Search state and result pagination.

use culina_core::Renderable;
use serde::{Deserialize, Serialize};

use crate::config::RESULTS_PER_PAGE;
use crate::recipe::RecipePreview;

/// The current search: query, full result set, and the page being shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// The query the results were loaded for.
    pub query: String,
    /// All results, unpaged.
    pub results: Vec<RecipePreview>,
    /// Current page, 1-based.
    pub page: usize,
    /// Results shown per page.
    pub results_per_page: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            page: 1,
            results_per_page: RESULTS_PER_PAGE,
        }
    }
}

impl SearchState {
    /// Store a fresh result set and reset to the first page.
    pub fn set_results(&mut self, query: impl Into<String>, results: Vec<RecipePreview>) {
        self.query = query.into();
        self.results = results;
        self.page = 1;
    }

    /// Move to `page` and return that page's slice of results.
    pub fn page_slice(&mut self, page: usize) -> Vec<RecipePreview> {
        self.page = page;
        self.current_page_slice()
    }

    /// The current page's slice of results.
    #[must_use]
    pub fn current_page_slice(&self) -> Vec<RecipePreview> {
        let start = self.page.saturating_sub(1) * self.results_per_page;
        let end = (self.page * self.results_per_page).min(self.results.len());
        if start >= self.results.len() {
            return Vec::new();
        }
        self.results[start..end].to_vec()
    }

    /// Total number of pages for the current result set.
    #[must_use]
    pub fn num_pages(&self) -> usize {
        self.results.len().div_ceil(self.results_per_page)
    }
}

impl Renderable for SearchState {
    fn is_absent(&self) -> bool {
        self.results.is_empty()
    }
}
