// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the chain invariants.
//!
//! Debug-mode assertions that the list operations call after they relink
//! nodes. These contracts:
//!
//! 1. Are **zero-cost in release builds** (`debug_assert!`, and traversals
//!    are skipped entirely when `debug_assertions` is off)
//! 2. Provide **early failure detection** while tests run
//!
//! # Contracts
//!
//! | Contract Function        | Invariant                                      |
//! |--------------------------|------------------------------------------------|
//! | `check_index_in_bounds`  | `index < length` for every positional access   |
//! | `check_detached`         | a removed node owns no successor               |
//! | `check_chain_length`     | reachable node count matches the expected size |
//! | `check_last_is_terminal` | the final reachable node has no successor      |

use crate::node::Node;
use crate::LinkedList;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that a resolved index lies in `[0, length)`.
///
/// # Panics (debug builds only)
/// Panics if `index >= length`.
#[inline]
pub fn check_index_in_bounds(index: usize, length: usize) {
    debug_assert!(
        index < length,
        "Contract violation: index {} >= length {}",
        index,
        length
    );
}

// ============================================================================
// NODE CONTRACTS
// ============================================================================

/// Check that a node handed back to the caller no longer links into a chain.
///
/// # Panics (debug builds only)
/// Panics if the node still has a successor.
#[inline]
pub fn check_detached(node: &Node) {
    debug_assert!(
        node.next.is_none(),
        "Contract violation: removed node {} still owns a successor",
        node.value
    );
}

// ============================================================================
// CHAIN CONTRACTS
// ============================================================================

/// Check that the list holds exactly `expected` reachable nodes.
///
/// # Panics (debug builds only)
/// Panics if the traversal count differs from `expected`.
#[inline]
pub fn check_chain_length(list: &LinkedList, expected: usize) {
    if cfg!(debug_assertions) {
        let actual = list.length();
        debug_assert_eq!(
            actual, expected,
            "Contract violation: chain has {} nodes, expected {}",
            actual, expected
        );
    }
}

/// Check that traversal ends on a node with no successor.
#[inline]
pub fn check_last_is_terminal(list: &LinkedList) {
    if cfg!(debug_assertions) {
        if let Some(last) = list.nodes().last() {
            debug_assert!(
                last.is_last(),
                "Contract violation: last node {} has a successor",
                last.value
            );
        }
    }
}
