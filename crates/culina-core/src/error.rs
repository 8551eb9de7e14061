//! Error types for the view core.

use thiserror::Error;

/// Errors surfaced by view construction and mounted-only operations.
///
/// The reconciliation path itself never fails: absent data falls back to the
/// error template and structural drift degrades the visual result without an
/// error value.
#[derive(Debug, Error)]
pub enum ViewError {
    /// No element in the hosting document matches the selector. Fatal at
    /// component construction.
    #[error("no element matches selector `{0}`")]
    MissingContainer(String),

    /// A mounted-only operation was called on a detached (fragment-only)
    /// view.
    #[error("view is detached; mount it on a container before rendering")]
    Detached,
}
