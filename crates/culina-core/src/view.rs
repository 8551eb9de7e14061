//! Generic view base: render, update, and the fixed status templates.
//!
//! Every visual component is a [`View`] binding one container, one
//! [`MarkupGenerator`], and the last data it rendered. `render` replaces the
//! container's content wholesale; `update` routes through the reconciler and
//! patches the existing tree in place, preserving the identity of every node
//! it does not explicitly change.

use crate::dom::Container;
use crate::error::ViewError;
use crate::reconcile::reconcile;

/// Path prefix for the icon sprite referenced by the status templates.
pub const ICONS: &str = "icons.svg";

/// An immutable serialized tree fragment produced by a markup generator.
///
/// A fragment has no identity beyond its string content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap a markup string.
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The serialized markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the fragment contains no markup at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Fragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fragment {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

/// Pure function from a data value to a complete fragment.
///
/// Implementations must not touch any container; composition happens by
/// concatenating the returned strings.
pub trait MarkupGenerator<T> {
    /// Produce the complete fragment for `data`.
    fn generate(&self, data: &T) -> Fragment;
}

/// Absent-data test for renderable values.
///
/// An empty ordered sequence or an unset/empty record counts as absent and
/// makes `render` fall back to the error-state template. Absence is not an
/// error condition; there is no distinct "empty" visual state.
pub trait Renderable {
    /// True when there is nothing to render.
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> Renderable for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// A component instance: one container, one generator, the last rendered
/// data, and the component's configured status messages.
///
/// Mounted views own exactly one rendered tree at a time. Detached views
/// (no container) exist only to serve composites with fragments via
/// [`View::render_fragment`].
#[derive(Debug)]
pub struct View<T, G> {
    container: Option<Container>,
    generator: G,
    last_data: Option<T>,
    error_message: String,
    message: String,
}

impl<T: Renderable, G: MarkupGenerator<T>> View<T, G> {
    /// Create a view mounted on a container.
    #[must_use]
    pub fn new(container: Container, generator: G) -> Self {
        Self {
            container: Some(container),
            generator,
            last_data: None,
            error_message: String::from("Something went wrong!"),
            message: String::new(),
        }
    }

    /// Create a fragment-only view with no container.
    #[must_use]
    pub fn detached(generator: G) -> Self {
        Self {
            container: None,
            generator,
            last_data: None,
            error_message: String::from("Something went wrong!"),
            message: String::new(),
        }
    }

    /// Set the component's default error message.
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Set the component's default informational message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the container's content with the fragment generated from
    /// `data`. Absent data falls back to the error-state template.
    ///
    /// # Errors
    ///
    /// [`ViewError::Detached`] when called on a fragment-only view.
    pub fn render(&mut self, data: T) -> Result<(), ViewError> {
        if data.is_absent() {
            return self.render_error(None);
        }
        let fragment = self.generator.generate(&data);
        self.last_data = Some(data);
        self.mounted()?.set_markup(fragment.as_str());
        Ok(())
    }

    /// The `replace = false` path: generate and return the fragment without
    /// touching any container. Used by composites to obtain child markup.
    ///
    /// Absent data yields the error-state template as a fragment.
    pub fn render_fragment(&mut self, data: T) -> Fragment {
        if data.is_absent() {
            return self.error_fragment(None);
        }
        let fragment = self.generator.generate(&data);
        self.last_data = Some(data);
        fragment
    }

    /// Reconcile the live tree against the fragment generated from `data`,
    /// patching text and attributes in place.
    ///
    /// Precondition: the data's shape matches what was last rendered; shape
    /// drift degrades the visual result without failing.
    ///
    /// # Errors
    ///
    /// [`ViewError::Detached`] when called on a fragment-only view.
    pub fn update(&mut self, data: T) -> Result<(), ViewError> {
        let fragment = self.generator.generate(&data);
        self.last_data = Some(data);
        reconcile(self.mounted()?, &fragment);
        Ok(())
    }

    /// Replace the container's content with the loading-spinner template.
    ///
    /// # Errors
    ///
    /// [`ViewError::Detached`] when called on a fragment-only view.
    pub fn render_spinner(&self) -> Result<(), ViewError> {
        let fragment = spinner_fragment();
        self.mounted()?.set_markup(fragment.as_str());
        Ok(())
    }

    /// Replace the container's content with the error template. `message`
    /// overrides the component's configured default.
    ///
    /// # Errors
    ///
    /// [`ViewError::Detached`] when called on a fragment-only view.
    pub fn render_error(&self, message: Option<&str>) -> Result<(), ViewError> {
        let fragment = self.error_fragment(message);
        self.mounted()?.set_markup(fragment.as_str());
        Ok(())
    }

    /// Replace the container's content with the informational template.
    /// `message` overrides the component's configured default.
    ///
    /// # Errors
    ///
    /// [`ViewError::Detached`] when called on a fragment-only view.
    pub fn render_message(&self, message: Option<&str>) -> Result<(), ViewError> {
        let text = message.unwrap_or(&self.message);
        let fragment = status_fragment("message", "icon-smile", text);
        self.mounted()?.set_markup(fragment.as_str());
        Ok(())
    }

    /// The last data rendered or updated through this view.
    #[must_use]
    pub fn last_data(&self) -> Option<&T> {
        self.last_data.as_ref()
    }

    /// The container this view is mounted on, if any.
    #[must_use]
    pub fn container(&self) -> Option<&Container> {
        self.container.as_ref()
    }

    fn mounted(&self) -> Result<&Container, ViewError> {
        self.container.as_ref().ok_or(ViewError::Detached)
    }

    fn error_fragment(&self, message: Option<&str>) -> Fragment {
        let text = message.unwrap_or(&self.error_message);
        status_fragment("error", "icon-alert-triangle", text)
    }
}

/// The loading-spinner template.
#[must_use]
pub fn spinner_fragment() -> Fragment {
    Fragment::new(format!(
        "<div class=\"spinner\"><svg><use href=\"{ICONS}#icon-loader\"></use></svg></div>"
    ))
}

fn status_fragment(class: &str, icon: &str, text: &str) -> Fragment {
    Fragment::new(format!(
        "<div class=\"{class}\"><div><svg><use href=\"{ICONS}#{icon}\"></use></svg></div><p>{text}</p></div>"
    ))
}
