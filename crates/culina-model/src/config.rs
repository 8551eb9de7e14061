//! Application-wide constants.

/// Base URL of the recipe catalog API.
pub const API_URL: &str = "https://forkify-api.herokuapp.com/api/v2/recipes/";

/// Request timeout threshold, in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Number of search results shown per page.
pub const RESULTS_PER_PAGE: usize = 10;

/// Delay before closing the upload modal after success, in seconds.
pub const MODAL_CLOSE_SECS: f64 = 2.5;
