// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single link of the chain.

/// Owning link to the next node, or `None` at the end of the chain.
pub(crate) type Link = Option<Box<Node>>;

/// One element of a [`LinkedList`](crate::LinkedList).
///
/// A node reachable from a list is owned by its predecessor (or by the list
/// for the head). A node handed back by a removal owns nothing: its successor
/// link has already been severed.
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    /// Payload carried by this node.
    pub value: i32,
    pub(crate) next: Link,
}

impl Node {
    /// Create an unlinked node.
    pub fn new(value: i32) -> Self {
        Self { value, next: None }
    }

    pub(crate) fn with_next(value: i32, next: Link) -> Self {
        Self { value, next }
    }

    /// The successor of this node, if any.
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// True when nothing follows this node.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
