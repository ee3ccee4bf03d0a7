//! Assertion utilities for sizes and render trees

use tumble_ui::{NodeType, RenderNode};
use tumble_ui_graphics::Size;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a size is approximately equal to another.
pub fn assert_size_approx_eq(actual: Size, expected: Size, tolerance: f32, msg: &str) {
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that a node resolves to exactly `expected` on both dimensions.
pub fn assert_node_size(node: &RenderNode, expected: Size, msg: &str) {
    let resolved = node.style().resolve();
    assert_eq!(
        resolved.size(),
        Some(expected),
        "{}: node {:?} resolved to {}",
        msg,
        node.node_type().display_name(),
        resolved
    );
}

/// Assert that a collection has an expected count.
pub fn assert_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{}: expected {} items, got {}",
        msg,
        expected,
        items.len()
    );
}

/// Collect every node in the tree (root included) matching `predicate`, in
/// pre-order.
pub fn find_nodes<'a>(
    root: &'a RenderNode,
    predicate: impl Fn(&RenderNode) -> bool,
) -> Vec<&'a RenderNode> {
    fn search<'a>(
        node: &'a RenderNode,
        predicate: &dyn Fn(&RenderNode) -> bool,
        found: &mut Vec<&'a RenderNode>,
    ) {
        if predicate(node) {
            found.push(node);
        }
        for child in node.children() {
            search(child, predicate, found);
        }
    }

    let mut found = Vec::new();
    search(root, &predicate, &mut found);
    found
}

/// Collect every node whose type equals `node_type`.
pub fn find_nodes_of_type<'a>(root: &'a RenderNode, node_type: &NodeType) -> Vec<&'a RenderNode> {
    find_nodes(root, |node| node.node_type() == node_type)
}

/// Find the first node carrying `text`.
pub fn find_text<'a>(root: &'a RenderNode, text: &str) -> Option<&'a RenderNode> {
    find_nodes(root, |node| node.text() == Some(text))
        .into_iter()
        .next()
}
