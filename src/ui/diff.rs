//! Index-aligned markup diffing.
//!
//! This module computes the patch list that turns a region's current markup
//! tree into a freshly templated one, touching only the text and attributes
//! that actually changed. Full re-renders replace the whole tree and lose
//! transient presentation state; patching in place preserves it.
//!
//! The diff walks both trees' elements in document order and pairs them by
//! index; it is deliberately NOT a keyed reconciliation. It assumes both
//! trees came from the same template and differ only in data.

use crate::ui::node::Node;

/// One in-place modification of a markup tree.
///
/// The `index` addresses an element by its position in document order (the
/// order [`Node::flatten`] yields).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Replace the element's own text content.
    Text { index: usize, text: String },

    /// Replace the element's attribute list with the new element's.
    Attrs {
        index: usize,
        attrs: Vec<(String, String)>,
    },
}

/// Computes the patches that reconcile `current` toward `next`.
///
/// Elements are paired by document-order index. For each pair that is not
/// structurally equal, the new text is taken when it is non-blank, and all
/// attributes are copied. Structurally equal pairs produce no patches.
///
/// # Examples
///
/// ```
/// use ladle::ui::node::Node;
/// use ladle::ui::diff::{diff, Patch};
///
/// let current = Node::new("div").child(Node::new("span").text("4"));
/// let next = Node::new("div").child(Node::new("span").text("6"));
///
/// let patches = diff(&current, &next);
/// assert!(patches.contains(&Patch::Text { index: 1, text: "6".to_string() }));
/// ```
#[must_use]
pub fn diff(current: &Node, next: &Node) -> Vec<Patch> {
    let current_elements = current.flatten();
    let next_elements = next.flatten();

    let mut patches = Vec::new();
    for (index, (new_el, cur_el)) in next_elements.iter().zip(current_elements.iter()).enumerate() {
        if new_el == cur_el {
            continue;
        }

        if !new_el.text.trim().is_empty() && new_el.text != cur_el.text {
            patches.push(Patch::Text {
                index,
                text: new_el.text.clone(),
            });
        }

        if new_el.attrs != cur_el.attrs {
            patches.push(Patch::Attrs {
                index,
                attrs: new_el.attrs.clone(),
            });
        }
    }

    patches
}

/// Applies a patch list to a tree in place.
///
/// Patches addressing indices past the end of the tree are ignored; the diff
/// never produces them for trees it was computed from.
pub fn apply(root: &mut Node, patches: &[Patch]) {
    for patch in patches {
        let index = match patch {
            Patch::Text { index, .. } | Patch::Attrs { index, .. } => *index,
        };
        let mut cursor = 0;
        apply_at(root, index, &mut cursor, patch);
    }
}

fn apply_at(node: &mut Node, target: usize, cursor: &mut usize, patch: &Patch) -> bool {
    if *cursor == target {
        match patch {
            Patch::Text { text, .. } => node.text = text.clone(),
            Patch::Attrs { attrs, .. } => node.attrs = attrs.clone(),
        }
        return true;
    }
    *cursor += 1;
    for child in &mut node.children {
        if apply_at(child, target, cursor, patch) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn servings_tree(servings: u32) -> Node {
        Node::new("div")
            .attr("class", "recipe__info")
            .child(
                Node::new("span")
                    .attr("class", "recipe__info-data")
                    .text(servings.to_string()),
            )
            .child(
                Node::new("button")
                    .attr("data-update-to", (servings + 1).to_string())
                    .text("+"),
            )
    }

    #[test]
    fn equal_trees_produce_no_patches() {
        let a = servings_tree(4);
        let b = servings_tree(4);
        assert!(diff(&a, &b).is_empty());
    }

    #[test]
    fn changed_text_and_attrs_are_patched() {
        let current = servings_tree(4);
        let next = servings_tree(5);

        let patches = diff(&current, &next);
        assert_eq!(
            patches,
            vec![
                Patch::Text {
                    index: 1,
                    text: "5".to_string()
                },
                Patch::Attrs {
                    index: 2,
                    attrs: vec![("data-update-to".to_string(), "6".to_string())],
                },
            ]
        );
    }

    #[test]
    fn blank_new_text_is_not_copied() {
        let current = Node::new("div").child(Node::new("p").attr("class", "old").text("hello"));
        let next = Node::new("div").child(Node::new("p").attr("class", "new").text("  "));

        let patches = diff(&current, &next);
        assert_eq!(
            patches,
            vec![Patch::Attrs {
                index: 1,
                attrs: vec![("class".to_string(), "new".to_string())],
            }]
        );
    }

    #[test]
    fn apply_reconciles_data_changes() {
        let mut current = servings_tree(4);
        let next = servings_tree(9);

        let patches = diff(&current, &next);
        apply(&mut current, &patches);
        assert_eq!(current, next);
    }

    #[test]
    fn unrelated_elements_are_untouched() {
        let mut current = Node::new("div")
            .child(Node::new("input").attr("value", "typed-by-user"))
            .child(Node::new("span").text("4"));
        let next = Node::new("div")
            .child(Node::new("input").attr("value", "typed-by-user"))
            .child(Node::new("span").text("6"));

        let patches = diff(&current, &next);
        apply(&mut current, &patches);

        assert_eq!(current.children[0].attr_value("value"), Some("typed-by-user"));
        assert_eq!(current.children[1].text, "6");
    }

    #[test]
    fn extra_new_elements_are_ignored() {
        let current = Node::new("div");
        let next = Node::new("div").child(Node::new("p").text("added"));
        // Index-aligned diff only pairs what both trees have.
        assert!(diff(&current, &next).is_empty());
    }
}
