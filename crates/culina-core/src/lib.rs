//! Core rendering machinery for the Culina recipe UI.
//!
//! This crate provides the incremental view-rendering mechanism shared by
//! every visual component:
//! - A headless markup tree model: [`Node`], [`Element`], [`Container`],
//!   [`Document`]
//! - A lenient fragment parser: [`parse_fragment`]
//! - The positional reconciler: [`reconcile`]
//! - The generic view base: [`View`], [`MarkupGenerator`], [`Renderable`]
//!
//! `render` replaces a container's content wholesale; `update` patches the
//! existing tree in place so that node identity (focus, scroll position of
//! untouched elements) survives data changes.

pub mod dom;
mod error;
pub mod parse;
pub mod reconcile;
pub mod view;

pub use dom::{element_sequence, Container, Document, Element, Node, NodeRef};
pub use error::ViewError;
pub use parse::parse_fragment;
pub use reconcile::reconcile;
pub use view::{spinner_fragment, Fragment, MarkupGenerator, Renderable, View, ICONS};
