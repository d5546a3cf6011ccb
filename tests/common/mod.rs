//! Shared test utilities and fixtures.

#![allow(dead_code)]

use linkchain::{LinkedList, Node};

/// Build a list holding `values` in order.
pub fn list_of(values: &[i32]) -> LinkedList {
    values.iter().copied().collect()
}

/// The list used by the walkthrough scenarios: `[5, 10, 15, 20]`.
pub fn sample_list() -> LinkedList {
    let mut list = LinkedList::new();
    list.insert_end(10);
    list.insert_end(15);
    list.insert_end(20);
    list.insert_beginning(5);
    list
}

// ============================================================================
// INVARIANT ASSERTIONS
// ============================================================================

/// Assert the structural invariants that every list must satisfy.
///
/// - traversal terminates and agrees with `length()`
/// - exactly one node (the last) has no successor
/// - `get(i)` agrees with the i-th node of the traversal
pub fn assert_list_well_formed(list: &LinkedList) {
    let nodes: Vec<&Node> = list.nodes().collect();
    assert_eq!(nodes.len(), list.length(), "length disagrees with traversal");
    assert_eq!(list.is_empty(), nodes.is_empty());

    for (i, node) in nodes.iter().enumerate() {
        let is_last = i + 1 == nodes.len();
        assert_eq!(
            node.is_last(),
            is_last,
            "node {} ({}) has wrong successor state",
            i,
            node.value
        );
        assert_eq!(list.get(i).map(|n| n.value), Ok(node.value));
    }

    assert!(list.get(nodes.len()).is_err());
}

/// Assert that a node handed back by a removal owns nothing.
pub fn assert_detached(node: &Node, value: i32) {
    assert_eq!(node.value, value);
    assert!(node.next().is_none(), "removed node {} still linked", value);
}
