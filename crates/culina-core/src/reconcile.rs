//! Positional reconciliation of a live rendered tree against new markup.
//!
//! Given the fragment freshly generated from new data and the tree currently
//! under a container, apply the minimum text/attribute patches so the live
//! tree becomes visually equivalent to the fragment, without removing or
//! recreating any node whose traversal position is unchanged.
//!
//! Alignment is purely positional: element `i` of the new fragment's
//! depth-first sequence is paired with element `i` of the live tree's. There
//! is no key matching and no structural diffing; when the two sequences have
//! different lengths, positions beyond the shorter one are left unpatched.
//! Callers whose data can change the node *count* between updates must render
//! instead. This is an intentional trade-off: the data this mechanism serves
//! (quantities after a servings edit, a gained highlight class) changes text
//! and a handful of attributes while the tree shape stays fixed.
//!
//! Known, preserved asymmetry: attributes present on the live element but
//! absent from the new one are not removed.

use tracing::{trace, warn};

use crate::dom::{element_sequence, Container, NodeRef};
use crate::parse::parse_fragment;
use crate::view::Fragment;

/// Patch the container's live tree toward the given fragment.
///
/// Never fails and never panics; a fragment whose shape diverges from the
/// live tree produces a visually inconsistent (but intact) result.
pub fn reconcile(container: &Container, fragment: &Fragment) {
    let new_nodes = parse_fragment(fragment.as_str());
    let new_elements = element_sequence(&new_nodes);
    let current_elements = container.descendant_elements();

    if new_elements.len() != current_elements.len() {
        warn!(
            new = new_elements.len(),
            current = current_elements.len(),
            "element count drift; trailing positions left unpatched"
        );
    }

    for (new_el, cur_el) in new_elements.iter().zip(&current_elements) {
        patch_pair(new_el, cur_el);
    }
}

/// Patch one positionally aligned pair. The snapshot taken by [`reconcile`]
/// keeps `cur_el` reachable even if an earlier text patch detached it.
fn patch_pair(new_el: &NodeRef, cur_el: &NodeRef) {
    if new_el.borrow().deep_equal(&cur_el.borrow()) {
        return;
    }

    // Pull everything we need out of the new node before mutating.
    let (own_text, text_content, attributes) = {
        let node = new_el.borrow();
        let Some(el) = node.as_element() else {
            return;
        };
        (el.own_text(), el.text_content(), el.attributes().to_vec())
    };

    let mut node = cur_el.borrow_mut();
    let Some(el) = node.as_element_mut() else {
        return;
    };

    // Text patch, guarded: an element whose own text is empty or
    // whitespace-only keeps its current text, since its visible text lives
    // in descendants and must not be clobbered.
    if !own_text.trim().is_empty() {
        trace!(tag = el.tag(), "text patch");
        el.set_text_content(text_content);
    }

    // Attribute patch: copy every new attribute, adding or overwriting.
    // Stale attributes on the live element are deliberately kept.
    for (name, value) in attributes {
        el.set_attribute(name, value);
    }
}
